//! Labelled inputs shared by the sign-in and sign-up forms.

use leptos::prelude::*;

/// Text input bound to `value`, with an inline error shown under it.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <FieldError error=error/>
        </label>
    }
}

/// Select over `options` (`(value, label)` pairs) with a disabled placeholder.
#[component]
pub fn SelectField(
    label: &'static str,
    placeholder: &'static str,
    options: Vec<(&'static str, String)>,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<&'static str>>,
    #[prop(into)] on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <select
                class="form-field__input"
                prop:value=move || value.get()
                on:change=move |ev| {
                    value.set(event_target_value(&ev));
                    on_blur.run(());
                }
                on:blur=move |_| on_blur.run(())
            >
                <option value="" disabled=true>
                    {placeholder}
                </option>
                {options
                    .into_iter()
                    .map(|(v, text)| view! { <option value=v>{text}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <FieldError error=error/>
        </label>
    }
}

#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <p class="form-field__error" role="alert">
            {move || error.get().unwrap_or_default()}
        </p>
    }
}
