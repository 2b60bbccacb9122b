//! Sign-in page: email + password form that opens a session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation and phase tracking live in `state::sign_in::SignInFlow`; this
//! page binds inputs, sends the request and follows the outcome. In-flight
//! work is tied to a `CancelToken` cancelled when the page unmounts.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::components::form_field::TextField;
use crate::state::flow::SubmitError;
use crate::state::sign_in::{SignInDraft, SignInField, SignInFlow};
use crate::util::cancel::CancelToken;

#[component]
pub fn SignInPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let touched = RwSignal::new(BTreeSet::<SignInField>::new());
    let flow = RwSignal::new(SignInFlow::default());

    let token = CancelToken::new();
    let cleanup_token = token.clone();
    on_cleanup(move || cleanup_token.cancel());

    let draft = move || SignInDraft { email: email.get(), password: password.get() };
    let error_for = move |field: SignInField| {
        Signal::derive(move || {
            if !touched.get().contains(&field) {
                return None;
            }
            draft().validate().err().and_then(|errors| errors.get(field))
        })
    };
    let touch = move |field: SignInField| {
        Callback::new(move |()| {
            touched.update(|t| {
                t.insert(field);
            });
        })
    };

    #[cfg(feature = "hydrate")]
    let session = crate::state::auth::SessionContext::expect();
    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<crate::state::toast::ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft();
        let request = match flow.try_update(|f| f.submit(&current)) {
            Some(Ok(request)) => request,
            Some(Err(SubmitError::Invalid(_))) => {
                touched.set([SignInField::Email, SignInField::Password].into_iter().collect());
                return;
            }
            Some(Err(SubmitError::Busy(_))) | None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            let token = token.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&request).await;
                if token.is_cancelled() {
                    log::debug!("login response after unmount ignored");
                    return;
                }
                let mut writer = session;
                let Some(outcome) = flow.try_update(|f| f.resolve(&token, result, &mut writer)) else {
                    return;
                };
                super::flow_outcome::follow(outcome, token, toasts, navigate).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &token);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__form">
                <div class="auth-card">
                    <h1 class="auth-card__title">"Login"</h1>
                    <p class="auth-card__subtitle">"Enter your email below to login to your account"</p>
                    <form class="auth-form" on:submit=on_submit novalidate=true>
                        <TextField
                            label="Email"
                            input_type="email"
                            placeholder="m@example.com"
                            value=email
                            error=error_for(SignInField::Email)
                            on_blur=touch(SignInField::Email)
                        />
                        <TextField
                            label="Password"
                            input_type="password"
                            value=password
                            error=error_for(SignInField::Password)
                            on_blur=touch(SignInField::Password)
                        />
                        <a class="auth-form__aside" href="/forgot-password">
                            "Forgot your password?"
                        </a>
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || !flow.get().can_submit(&draft())
                        >
                            {move || if flow.get().is_busy() { "Logging in..." } else { "Login" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "Don't have an account? "
                        <a href="/sign-up">"Sign up"</a>
                    </p>
                </div>
            </div>
            <div class="auth-page__cover">
                <img src="/signin.jpg" alt="Forest canopy" width="1920" height="1080"/>
            </div>
        </div>
    }
}
