#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "vanaraksha exited");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env();
    match &config.backend_url {
        Some(url) => tracing::info!(backend_url = %url, "backend configured"),
        None => tracing::warn!("VANARAKSHA_BACKEND_URL not set; auth requests go to the page origin"),
    }

    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let app = routes::app(conf.leptos_options);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "vanaraksha listening");
    axum::serve(listener, app).await?;
    Ok(())
}
