use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceDto};
use crate::shared::validation::{line_field, MSG_NON_NEGATIVE};
use crate::shared::ValidationErrors;

pub const MSG_NO_COUNT_LINES: &str = "validation.count.no_lines";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountStatus {
    #[default]
    Draft,
    Completed,
    /// Differences were posted back to stock.
    Adjusted,
}

impl CountStatus {
    pub fn label_key(&self) -> &'static str {
        match self {
            CountStatus::Draft => "count.status.draft",
            CountStatus::Completed => "count.status.completed",
            CountStatus::Adjusted => "count.status.adjusted",
        }
    }

    pub fn can_adjust(&self) -> bool {
        matches!(self, CountStatus::Completed)
    }
}

/// On-hand quantity of one item in one store, as returned by
/// `GET /inventories/{id}/stock`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLine {
    pub item_id: i64,
    pub item_name: String,
    pub unit_id: i64,
    #[serde(default)]
    pub unit_name: Option<String>,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountDetail {
    pub item_id: i64,
    #[serde(default)]
    pub item_name: Option<String>,
    pub unit_id: i64,
    #[serde(default)]
    pub unit_name: Option<String>,
    pub expected_quantity: f64,
    pub counted_quantity: f64,
}

impl CountDetail {
    pub fn from_stock(line: &StockLine) -> Self {
        Self {
            item_id: line.item_id,
            item_name: Some(line.item_name.clone()),
            unit_id: line.unit_id,
            unit_name: line.unit_name.clone(),
            expected_quantity: line.quantity,
            counted_quantity: line.quantity,
        }
    }

    /// Positive when more was found than the books say.
    pub fn difference(&self) -> f64 {
        self.counted_quantity - self.expected_quantity
    }

    pub fn has_difference(&self) -> bool {
        self.difference().abs() > 1e-9
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCount {
    pub id: i64,
    pub inventory_id: i64,
    #[serde(default)]
    pub inventory_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub status: CountStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub details: Vec<CountDetail>,
}

impl InventoryCount {
    pub fn lines_with_difference(&self) -> usize {
        self.details.iter().filter(|d| d.has_difference()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryCountDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub inventory_id: Option<i64>,
    pub date: NaiveDate,
    pub status: CountStatus,
    pub notes: Option<String>,
    pub details: Vec<CountDetail>,
}

impl Default for InventoryCountDto {
    fn default() -> Self {
        Self {
            id: None,
            inventory_id: None,
            date: NaiveDate::default(),
            status: CountStatus::Draft,
            notes: None,
            details: Vec::new(),
        }
    }
}

impl ApiResource for InventoryCount {
    const COLLECTION: &'static str = "inventory-counts";
    type Dto = InventoryCountDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!(
            "#{} {} {}",
            self.id,
            self.inventory_name.as_deref().unwrap_or_default(),
            self.date.format("%Y-%m-%d")
        )
    }

    fn to_dto(&self) -> InventoryCountDto {
        InventoryCountDto {
            id: Some(self.id),
            inventory_id: Some(self.inventory_id),
            date: self.date,
            status: self.status,
            notes: self.notes.clone(),
            details: self.details.clone(),
        }
    }
}

impl ResourceDto for InventoryCountDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("inventory_id", &self.inventory_id);
        if self.details.is_empty() {
            errors.add("details", MSG_NO_COUNT_LINES);
        }
        for (index, line) in self.details.iter().enumerate() {
            if line.counted_quantity < 0.0 {
                errors.add(
                    line_field("details", index, "counted_quantity"),
                    MSG_NON_NEGATIVE,
                );
            }
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_sheet_starts_from_book_quantity() {
        let stock = StockLine {
            item_id: 4,
            item_name: "Sugar".into(),
            unit_id: 1,
            unit_name: Some("kg".into()),
            quantity: 12.5,
        };
        let mut line = CountDetail::from_stock(&stock);
        assert!(!line.has_difference());

        line.counted_quantity = 10.0;
        assert_eq!(line.difference(), -2.5);
        assert!(line.has_difference());
    }

    #[test]
    fn only_completed_counts_can_be_adjusted() {
        assert!(!CountStatus::Draft.can_adjust());
        assert!(CountStatus::Completed.can_adjust());
        assert!(!CountStatus::Adjusted.can_adjust());
    }

    #[test]
    fn negative_counts_are_rejected() {
        let dto = InventoryCountDto {
            inventory_id: Some(2),
            details: vec![CountDetail {
                item_id: 1,
                item_name: None,
                unit_id: 1,
                unit_name: None,
                expected_quantity: 3.0,
                counted_quantity: -1.0,
            }],
            ..InventoryCountDto::default()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("details.0.counted_quantity"),
            Some(MSG_NON_NEGATIVE)
        );
    }
}
