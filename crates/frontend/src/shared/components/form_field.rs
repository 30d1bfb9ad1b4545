use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

/// Label, input and the inline validation message under it.
#[component]
pub fn FormField(
    /// Translation key of the label
    label_key: &'static str,
    #[prop(optional)] required: bool,
    /// Translation key of the current error, if any
    #[prop(optional, into)]
    error: Signal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="form__group" class:form__group--invalid=move || error.get().is_some()>
            <label class="form__label">
                {move || i18n.t(label_key)}
                {required.then(|| view! { <span class="form__required">"*"</span> })}
            </label>
            {children()}
            {move || error.get().map(|key| view! { <div class="form__error">{i18n.t(key)}</div> })}
        </div>
    }
}
