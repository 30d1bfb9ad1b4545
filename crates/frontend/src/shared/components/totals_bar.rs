use leptos::prelude::*;

use crate::shared::i18n::use_i18n;

/// Row of labelled totals under a report table.
///
/// Each entry is `(label translation key, formatted value)`.
#[component]
pub fn TotalsBar(#[prop(into)] items: Signal<Vec<(&'static str, String)>>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="totals-bar">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|(label_key, value)| {
                        view! {
                            <div class="totals-bar__item">
                                <span class="totals-bar__label">{i18n.t(label_key)}</span>
                                <span class="totals-bar__value">{value}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
