use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::shared::validation::MSG_DATE_RANGE;
use crate::shared::ValidationErrors;

/// Inclusive date range sent as `from` / `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportPeriod {
    /// First day of `today`'s month through `today`.
    pub fn month_to_date(today: NaiveDate) -> Self {
        let from = today.with_day(1).unwrap_or(today);
        Self { from, to: today }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.from > self.to {
            errors.add("to", MSG_DATE_RANGE);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_to_date_starts_on_first() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let period = ReportPeriod::month_to_date(today);
        assert_eq!(period.from, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(period.to, today);
        assert!(period.validate().is_ok());
    }

    #[test]
    fn reversed_range_is_rejected() {
        let period = ReportPeriod {
            from: NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            to: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(period.validate().unwrap_err().get("to"), Some(MSG_DATE_RANGE));
    }
}
