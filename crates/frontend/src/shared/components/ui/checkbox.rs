use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

/// Checkbox bound to a bool signal, with a translated label.
#[component]
pub fn Checkbox(
    label_key: &'static str,
    checked: RwSignal<bool>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let is_disabled = move || disabled.get();

    view! {
        <label
            class="form__checkbox-wrapper"
            class:form__checkbox-wrapper--disabled=is_disabled
        >
            <input
                id=id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=is_disabled
                on:change=move |ev| checked.set(event_target_checked(&ev))
            />
            <span class="form__checkbox-label">{move || i18n.t(label_key)}</span>
        </label>
    }
}
