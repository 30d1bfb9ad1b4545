//! Inputs used inside grid rows. Values come from the row, edits go back
//! through callbacks; focus ids and keydown are wired by the owning grid.

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::shared::i18n::use_i18n;

#[component]
pub fn GridInput(
    #[prop(into)] id: Signal<String>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    on_keydown: Callback<KeyboardEvent>,
    /// Right-aligned decimal entry.
    #[prop(optional)]
    numeric: bool,
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <input
            type="text"
            inputmode=if numeric { "decimal" } else { "text" }
            class="grid__input"
            class:grid__input--numeric=numeric
            class:grid__input--invalid=move || invalid.get()
            id=move || id.get()
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:keydown=move |ev| on_keydown.run(ev)
        />
    }
}

#[component]
pub fn GridSelect(
    #[prop(into)] id: Signal<String>,
    #[prop(into)] options: Signal<Vec<(i64, String)>>,
    #[prop(into)] value: Signal<Option<i64>>,
    on_change: Callback<Option<i64>>,
    on_keydown: Callback<KeyboardEvent>,
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <select
            class="grid__select"
            class:grid__input--invalid=move || invalid.get()
            id=move || id.get()
            prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
            on:change=move |ev| { on_change.run(event_target_value(&ev).parse::<i64>().ok()) }
            on:keydown=move |ev| on_keydown.run(ev)
        >
            <option value="">{move || i18n.t("common.select")}</option>
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
