/// Utilities for the current date as the browser sees it
use chrono::NaiveDate;

/// Calendar date from the parts `js_sys::Date` reports (0-based month).
/// Out-of-range parts fall back to the Unix epoch date.
pub fn date_from_js_parts(year: u32, month0: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year as i32, month0 + 1, day).unwrap_or_default()
}

/// Today in the user's local time zone.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    date_from_js_parts(now.get_full_year(), now.get_month(), now.get_date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_month_is_zero_based() {
        assert_eq!(
            date_from_js_parts(2024, 0, 31),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
        );
    }

    #[test]
    fn invalid_parts_fall_back_to_epoch() {
        assert_eq!(date_from_js_parts(2024, 1, 30), NaiveDate::default());
    }
}
