//! Public landing page.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::hero::Hero;

/// Served from the site's `public/` assets.
const GALLERY: [(&str, &str); 3] = [("/plants.jpg", "Plants"), ("/animal.jpg", "Wildlife"), ("/forest.jpg", "Forest")];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="home-page">
            <Hero/>
            <section class="home-page__gallery">
                {GALLERY
                    .into_iter()
                    .map(|(src, alt)| view! { <img class="home-page__image" src=src alt=alt loading="lazy"/> })
                    .collect::<Vec<_>>()}
            </section>
        </main>
    }
}
