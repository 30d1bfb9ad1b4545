use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

/// `<select>` over `(id, label)` pairs with an empty "choose" entry.
#[component]
pub fn EntitySelect(
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    value: RwSignal<Option<i64>>,
    #[prop(optional)] placeholder_key: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Fired after `value` changed through the UI
    #[prop(optional)]
    on_change: Option<Callback<Option<i64>>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let placeholder_key = placeholder_key.unwrap_or("common.select");

    view! {
        <select
            class="form__select"
            id=id
            disabled=move || disabled.get()
            prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
            on:change=move |ev| {
                let selected = event_target_value(&ev).parse::<i64>().ok();
                value.set(selected);
                if let Some(cb) = on_change {
                    cb.run(selected);
                }
            }
        >
            <option value="">{move || i18n.t(placeholder_key)}</option>
            {move || {
                let current = value.get();
                options
                    .get()
                    .into_iter()
                    .map(|(id, label)| {
                        view! {
                            <option value=id.to_string() selected=current == Some(id)>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}
