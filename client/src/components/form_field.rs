//! Labeled text input bound to a signal.

use leptos::prelude::*;

#[component]
pub fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into, default = "text".to_owned())] input_type: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label" for=id.clone()>{label}</label>
            <input
                id=id.clone()
                name=id
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
