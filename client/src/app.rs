//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::search_bar::SearchPalette;
use crate::components::toaster::Toaster;
use crate::pages::{dashboard::DashboardPage, home::HomePage, sign_in::SignInPage, sign_up::SignUpPage};
use crate::state::auth::SessionContext;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Publishes the backend base URL so the browser bundle can pick it up at
/// runtime instead of relying on the value baked in at build time.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let backend_url = crate::config::backend_url();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name={crate::config::BACKEND_URL_META} content=backend_url/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, UI and toast contexts, then reads persisted state
/// once after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::provide();
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(ui);
    provide_context(toasts);

    // Effects only run in the browser, so storage is never touched during SSR.
    Effect::new(move || {
        session.initialize();
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/vanaraksha.css"/>
        <Title text="VanaRaksha"/>
        <Meta name="description" content="Report threats, track wildlife and support forest conservation."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=StaticSegment("sign-up") view=SignUpPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <SearchPalette/>
        <Toaster/>
    }
}
