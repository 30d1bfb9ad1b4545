use chrono::{Datelike, Duration, NaiveDate};
use contracts::reports::ReportPeriod;
use leptos::prelude::*;
use thaw::*;

use crate::shared::i18n::use_i18n;
use crate::shared::date_utils::today;
use crate::shared::format::{format_date, parse_date};

/// Whole calendar month containing `day`.
pub fn month_of(day: NaiveDate) -> ReportPeriod {
    let from = day.with_day(1).unwrap_or(day);
    let next = if from.month() == 12 {
        NaiveDate::from_ymd_opt(from.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(from.year(), from.month() + 1, 1)
    };
    let to = next.map(|d| d - Duration::days(1)).unwrap_or(day);
    ReportPeriod { from, to }
}

/// Month before the one `period` starts in.
pub fn previous_month(period: ReportPeriod) -> ReportPeriod {
    month_of(period.from.with_day(1).unwrap_or(period.from) - Duration::days(1))
}

/// DateRangePicker: two date inputs plus "this month" / "previous month".
#[component]
pub fn DateRangePicker(value: RwSignal<ReportPeriod>) -> impl IntoView {
    let i18n = use_i18n();

    let set_from = move |raw: String| {
        if let Some(from) = parse_date(&raw) {
            value.update(|p| p.from = from);
        }
    };
    let set_to = move |raw: String| {
        if let Some(to) = parse_date(&raw) {
            value.update(|p| p.to = to);
        }
    };

    view! {
        <div class="date-range-picker">
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || format_date(value.get().from)
                on:change=move |ev| set_from(event_target_value(&ev))
            />
            <span class="date-range-picker__sep">"—"</span>
            <input
                type="date"
                class="form__input form__input--date"
                prop:value=move || format_date(value.get().to)
                on:change=move |ev| set_to(event_target_value(&ev))
            />
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| value.set(month_of(today()))
            >
                {move || i18n.t("period.this_month")}
            </Button>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                on_click=move |_| value.update(|p| *p = previous_month(*p))
            >
                {move || i18n.t("period.previous_month")}
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn month_bounds_handle_december_and_leap_years() {
        assert_eq!(
            month_of(d(2024, 12, 15)),
            ReportPeriod {
                from: d(2024, 12, 1),
                to: d(2024, 12, 31)
            }
        );
        assert_eq!(month_of(d(2024, 2, 10)).to, d(2024, 2, 29));
    }

    #[test]
    fn previous_month_crosses_year() {
        let jan = month_of(d(2025, 1, 20));
        assert_eq!(
            previous_month(jan),
            ReportPeriod {
                from: d(2024, 12, 1),
                to: d(2024, 12, 31)
            }
        );
    }
}
