//! Avatar button with the signed-in user's account menu.

#[cfg(test)]
#[path = "user_avatar_test.rs"]
mod user_avatar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Role, SessionUser};
use crate::state::auth::SessionContext;

/// Upper-cased first letters of the first two name parts, e.g. `"MG"`.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

fn menu_class(open: bool) -> &'static str {
    if open { "avatar-menu__content avatar-menu__content--open" } else { "avatar-menu__content" }
}

/// Menu heading: the signed-in email, or a generic label when it is missing.
fn account_heading(user: Option<&SessionUser>) -> String {
    user.and_then(SessionUser::email).map_or_else(|| "My Account".to_owned(), str::to_owned)
}

fn role_caption(user: Option<&SessionUser>) -> Option<String> {
    user.and_then(SessionUser::role).map(Role::label)
}

const MENU_ITEMS: [&str; 3] = ["Bookings", "Transactions", "Parcels"];

#[component]
pub fn UserAvatar() -> impl IntoView {
    let session = SessionContext::expect();
    let navigate = use_navigate();
    let open = RwSignal::new(false);

    let short_name = move || {
        session
            .user()
            .and_then(|u| u.name().map(initials))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        open.set(false);
        session.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="avatar-menu">
            <button
                class="avatar"
                aria-haspopup="menu"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="avatar__fallback">{short_name}</span>
            </button>
            <div class=move || menu_class(open.get()) role="menu">
                <p class="avatar-menu__label">{move || account_heading(session.user().as_ref())}</p>
                {move || {
                    role_caption(session.user().as_ref())
                        .map(|role| view! { <p class="avatar-menu__role">{role}</p> })
                }}
                <hr class="avatar-menu__separator"/>
                <button class="avatar-menu__item" role="menuitem" on:click=move |_| open.set(false)>
                    "Profile"
                </button>
                <button class="avatar-menu__item" role="menuitem" on:click=on_logout>
                    "Logout"
                </button>
                {MENU_ITEMS
                    .into_iter()
                    .map(|label| {
                        view! {
                            <button
                                class="avatar-menu__item"
                                role="menuitem"
                                on:click=move |_| open.set(false)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
