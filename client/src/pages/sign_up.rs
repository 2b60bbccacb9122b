//! Sign-up page: account registration form.
//!
//! Mirrors the sign-in page wiring; success routes to `/sign-in` without
//! opening a session.

use std::collections::BTreeSet;

use leptos::prelude::*;

use crate::components::form_field::{SelectField, TextField};
use crate::net::types::{GovernmentIdType, Role};
use crate::state::flow::SubmitError;
use crate::state::sign_up::{SignUpDraft, SignUpField, SignUpFlow};
use crate::util::cancel::CancelToken;

const ALL_FIELDS: [SignUpField; 8] = [
    SignUpField::FirstName,
    SignUpField::LastName,
    SignUpField::Email,
    SignUpField::Password,
    SignUpField::MobileNo,
    SignUpField::GovernmentIdType,
    SignUpField::GovernmentId,
    SignUpField::Role,
];

#[component]
pub fn SignUpPage() -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let mobile_no = RwSignal::new(String::new());
    let government_id_type = RwSignal::new(String::new());
    let government_id = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let touched = RwSignal::new(BTreeSet::<SignUpField>::new());
    let flow = RwSignal::new(SignUpFlow::default());

    let token = CancelToken::new();
    let cleanup_token = token.clone();
    on_cleanup(move || cleanup_token.cancel());

    let draft = move || SignUpDraft {
        first_name: first_name.get(),
        last_name: last_name.get(),
        email: email.get(),
        password: password.get(),
        mobile_no: mobile_no.get(),
        government_id_type: government_id_type.get().parse::<GovernmentIdType>().ok(),
        government_id: government_id.get(),
        role: role.get().parse::<Role>().ok(),
    };
    let error_for = move |field: SignUpField| {
        Signal::derive(move || {
            if !touched.get().contains(&field) {
                return None;
            }
            draft().validate().err().and_then(|errors| errors.get(field))
        })
    };
    let touch = move |field: SignUpField| {
        Callback::new(move |()| {
            touched.update(|t| {
                t.insert(field);
            });
        })
    };

    let role_options = Role::REGISTRABLE.into_iter().map(|r| (r.as_str(), r.label())).collect::<Vec<_>>();
    let id_type_options = GovernmentIdType::ALL
        .into_iter()
        .map(|t| (t.as_str(), t.label().to_owned()))
        .collect::<Vec<_>>();

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
                touched.set(ALL_FIELDS.into_iter().collect());
                return;
            }
            Some(Err(SubmitError::Busy(_))) | None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            let token = token.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::register(&request).await;
                if token.is_cancelled() {
                    log::debug!("register response after unmount ignored");
                    return;
                }
                let Some(outcome) = flow.try_update(|f| f.resolve(&token, result)) else {
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
                <div class="auth-card auth-card--wide">
                    <h1 class="auth-card__title">"Sign Up"</h1>
                    <p class="auth-card__subtitle">"Enter your information to create an account"</p>
                    <form class="auth-form" on:submit=on_submit novalidate=true>
                        <div class="auth-form__row">
                            <TextField
                                label="First name"
                                placeholder="Max"
                                value=first_name
                                error=error_for(SignUpField::FirstName)
                                on_blur=touch(SignUpField::FirstName)
                            />
                            <TextField
                                label="Last name"
                                placeholder="Robinson"
                                value=last_name
                                error=error_for(SignUpField::LastName)
                                on_blur=touch(SignUpField::LastName)
                            />
                        </div>
                        <TextField
                            label="Email"
                            input_type="email"
                            placeholder="m@example.com"
                            value=email
                            error=error_for(SignUpField::Email)
                            on_blur=touch(SignUpField::Email)
                        />
                        <TextField
                            label="Password"
                            input_type="password"
                            value=password
                            error=error_for(SignUpField::Password)
                            on_blur=touch(SignUpField::Password)
                        />
                        <TextField
                            label="Mobile number"
                            input_type="tel"
                            placeholder="9876543210"
                            value=mobile_no
                            error=error_for(SignUpField::MobileNo)
                            on_blur=touch(SignUpField::MobileNo)
                        />
                        <div class="auth-form__row">
                            <SelectField
                                label="Government Id type"
                                placeholder="Select an Id"
                                options=id_type_options
                                value=government_id_type
                                error=error_for(SignUpField::GovernmentIdType)
                                on_blur=touch(SignUpField::GovernmentIdType)
                            />
                            <TextField
                                label="Government Id"
                                value=government_id
                                error=error_for(SignUpField::GovernmentId)
                                on_blur=touch(SignUpField::GovernmentId)
                            />
                        </div>
                        <SelectField
                            label="Role"
                            placeholder="Select a role"
                            options=role_options
                            value=role
                            error=error_for(SignUpField::Role)
                            on_blur=touch(SignUpField::Role)
                        />
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || !flow.get().can_submit(&draft())
                        >
                            {move || if flow.get().is_busy() { "Creating account..." } else { "Create an account" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "Already have an account? "
                        <a href="/sign-in">"Sign in"</a>
                    </p>
                </div>
            </div>
            <div class="auth-page__cover">
                <img src="/register.jpg" alt="Forest canopy" width="1920" height="1080"/>
            </div>
        </div>
    }
}
