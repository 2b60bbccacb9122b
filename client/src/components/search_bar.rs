//! Header search button and the command palette it opens.
//!
//! The palette is mounted once per page and also toggles on Ctrl+K / Cmd+K.

#[cfg(test)]
#[path = "search_bar_test.rs"]
mod search_bar_test;

use leptos::prelude::*;

use crate::state::ui::UiState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub const SUGGESTIONS: [Suggestion; 3] = [
    Suggestion { label: "Get App", href: Some("https://dakseva.vercel.app/services/chat") },
    Suggestion { label: "Download Reports", href: Some("https://dakseva.vercel.app/services/info#POS") },
    Suggestion { label: "Carbon Footprint Calculator", href: None },
];

/// Suggestions whose label contains `query`, ignoring case and surrounding space.
#[must_use]
pub fn filter_suggestions(query: &str) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    SUGGESTIONS
        .into_iter()
        .filter(|s| s.label.to_lowercase().contains(&needle))
        .collect()
}

#[must_use]
pub fn is_toggle_shortcut(key: &str, meta: bool, ctrl: bool) -> bool {
    key.eq_ignore_ascii_case("k") && (meta || ctrl)
}

#[component]
pub fn SearchButton() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button class="nav-link search-button" on:click=move |_| ui.update(|u| u.search_open = true)>
            <span class="icon icon--search" aria-hidden="true"></span>
            <span>"Search"</span>
        </button>
    }
}

#[component]
pub fn SearchPalette() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let query = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if is_toggle_shortcut(&ev.key(), ev.meta_key(), ev.ctrl_key()) {
                ev.prevent_default();
                ui.update(UiState::toggle_search);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let close = move || {
        ui.update(|u| u.search_open = false);
        query.set(String::new());
    };

    view! {
        <Show when=move || ui.get().search_open>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog command"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            close();
                        }
                    }
                >
                    <input
                        class="command__input"
                        type="text"
                        placeholder="Type a command or search..."
                        autofocus=true
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    {move || {
                        let matches = filter_suggestions(&query.get());
                        if matches.is_empty() {
                            view! { <p class="command__empty">"No results found."</p> }.into_any()
                        } else {
                            view! {
                                <div class="command__group">
                                    <p class="command__heading">"Suggestions"</p>
                                    {matches
                                        .into_iter()
                                        .map(|s| {
                                            view! {
                                                <a class="command__item" href=s.href>
                                                    {s.label}
                                                </a>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </Show>
    }
}
