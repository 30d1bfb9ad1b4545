use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::format::{format_date, parse_date};

/// DateInput component with native date picker bound to a `NaiveDate`.
/// The browser shows the date in the user's locale; the value stays
/// `yyyy-mm-dd`.
#[component]
pub fn DateInput(
    value: RwSignal<NaiveDate>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] on_change: Option<Callback<NaiveDate>>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="form__input form__input--date"
            id=id
            prop:value=move || format_date(value.get())
            on:change=move |ev| {
                // Cleared or half-typed dates keep the previous value.
                if let Some(date) = parse_date(&event_target_value(&ev)) {
                    value.set(date);
                    if let Some(cb) = on_change {
                        cb.run(date);
                    }
                }
            }
        />
    }
}
