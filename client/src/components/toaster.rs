//! Toast viewport and the helper pages use to raise notifications.

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState, ToastVariant};

/// Show `notice` and schedule its dismissal after `TOAST_DURATION`.
pub fn show_toast(toasts: RwSignal<ToastState>, notice: Notice) {
    let mut id = 0;
    toasts.update(|t| id = t.push(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::state::toast::TOAST_DURATION).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toast-viewport" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items()
                    .iter()
                    .cloned()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <li class=toast_class(toast.variant) role="status">
                                <span class="toast__title">{toast.title}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ol>
    }
}
