use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn ModeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn btn--ghost mode-toggle"
            title="Toggle theme"
            on:click=move |_| {
                let next = dark_mode::toggle(ui.get_untracked().dark_mode);
                ui.update(|u| u.dark_mode = next);
            }
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
