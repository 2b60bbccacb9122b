//! Landing-page header: brand, navigation, search, theme and account area.

use leptos::prelude::*;

use crate::components::mode_toggle::ModeToggle;
use crate::components::search_bar::SearchButton;
use crate::components::user_avatar::UserAvatar;
use crate::state::auth::SessionContext;
use crate::state::ui::UiState;

const NAV_LINKS: [(&str, &str); 2] = [("Home", "/"), ("Services", "/services")];

#[component]
pub fn Header() -> impl IntoView {
    let session = SessionContext::expect();
    let ui = expect_context::<RwSignal<UiState>>();

    let nav_class = move || {
        if ui.get().nav_open { "site-header__nav site-header__nav--open" } else { "site-header__nav" }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                <img src="/logo.png" alt="Logo" width="35" height="35"/>
                <span>"VanaRaksha"</span>
            </a>
            <button
                class="btn btn--ghost site-header__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || ui.get().nav_open.to_string()
                on:click=move |_| ui.update(UiState::toggle_nav)
            >
                "☰"
            </button>
            <nav class=nav_class>
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, href)| view! { <a class="nav-link" href=href>{label}</a> })
                    .collect::<Vec<_>>()}
                <SearchButton/>
                <ModeToggle/>
                {move || {
                    if session.user().is_some() {
                        view! { <UserAvatar/> }.into_any()
                    } else {
                        view! { <a class="btn btn--primary" href="/sign-in">"Login"</a> }.into_any()
                    }
                }}
            </nav>
        </header>
    }
}
