//! Landing-page hero with a rotating highlighted word.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use std::time::Duration;

use leptos::prelude::*;

pub const TITLES: [&str; 5] = ["nature", "vital", "empowering", "sustainable", "transformative"];
pub const ROTATE_INTERVAL: Duration = Duration::from_secs(2);

#[must_use]
pub fn next_title_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Words before the active one slide up, later ones wait below.
#[must_use]
pub fn title_class(index: usize, active: usize) -> &'static str {
    match index.cmp(&active) {
        std::cmp::Ordering::Equal => "hero__word hero__word--active",
        std::cmp::Ordering::Less => "hero__word hero__word--above",
        std::cmp::Ordering::Greater => "hero__word hero__word--below",
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let active = RwSignal::new(0_usize);

    #[cfg(feature = "hydrate")]
    {
        let token = crate::util::cancel::CancelToken::new();
        let task_token = token.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(ROTATE_INTERVAL).await;
                if task_token.is_cancelled() {
                    break;
                }
                active.update(|i| *i = next_title_index(*i, TITLES.len()));
            }
        });
        on_cleanup(move || token.cancel());
    }

    view! {
        <section class="hero">
            <a class="btn btn--secondary btn--sm" href="/sign-up">
                "Get started"
                <span class="icon icon--arrow-right" aria-hidden="true"></span>
            </a>
            <h1 class="hero__title">
                <span>"This is something"</span>
                <span class="hero__rotator">
                    {TITLES
                        .into_iter()
                        .enumerate()
                        .map(|(i, title)| {
                            view! { <span class=move || title_class(i, active.get())>{title}</span> }
                        })
                        .collect::<Vec<_>>()}
                </span>
            </h1>
            <p class="hero__lead">
                "Protecting our forests shouldn't be complicated. Report threats, track wildlife, and "
                "support conservation efforts with just a few taps. Our mission is to empower "
                "communities to safeguard natural treasures for generations to come."
            </p>
            <div class="hero__actions">
                <button class="btn btn--primary btn--lg">
                    "Download"
                    <img src="/android.svg" alt="android" width="20" height="20"/>
                </button>
            </div>
        </section>
    }
}
