//! Inventory Count Details - ViewModel

use chrono::NaiveDate;
use contracts::domain::a008_inventory_count::aggregate::{
    CountDetail, CountStatus, InventoryCount, InventoryCountDto, StockLine,
};
use contracts::domain::non_blank;
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;
use crate::shared::format::parse_decimal;

/// Statuses a user may set; `Adjusted` is only ever set by the backend.
pub const EDITABLE_STATUSES: [CountStatus; 2] = [CountStatus::Draft, CountStatus::Completed];

pub fn status_value(status: CountStatus) -> &'static str {
    match status {
        CountStatus::Draft => "draft",
        CountStatus::Completed => "completed",
        CountStatus::Adjusted => "adjusted",
    }
}

pub fn status_from_value(value: &str) -> Option<CountStatus> {
    EDITABLE_STATUSES
        .into_iter()
        .find(|s| status_value(*s) == value)
}

/// One sheet line: the book figure plus what the user typed.
#[derive(Debug, Clone, PartialEq)]
pub struct CountLine {
    pub detail: CountDetail,
    pub counted: String,
}

impl CountLine {
    pub fn new(detail: CountDetail) -> Self {
        let counted = detail.counted_quantity.to_string();
        Self { detail, counted }
    }

    /// Unreadable input counts as -1 so validation flags the line.
    pub fn to_detail(&self) -> CountDetail {
        let counted_quantity = if self.counted.trim().is_empty() {
            0.0
        } else {
            parse_decimal(&self.counted).unwrap_or(-1.0)
        };
        CountDetail {
            counted_quantity,
            ..self.detail.clone()
        }
    }

    pub fn difference(&self) -> f64 {
        self.to_detail().difference()
    }

    pub fn has_difference(&self) -> bool {
        self.to_detail().has_difference()
    }
}

/// Fresh sheet from the store's book quantities.
pub fn sheet_from_stock(stock: &[StockLine]) -> Vec<CountLine> {
    stock
        .iter()
        .map(|s| CountLine::new(CountDetail::from_stock(s)))
        .collect()
}

#[derive(Clone, Copy)]
pub struct InventoryCountDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub inventory_id: RwSignal<Option<i64>>,
    pub date: RwSignal<NaiveDate>,
    pub status: RwSignal<CountStatus>,
    pub notes: RwSignal<String>,
    pub lines: RwSignal<Vec<CountLine>>,
    pub only_differences: RwSignal<bool>,
    pub loading_stock: RwSignal<bool>,
    pub form: FormStatus,
}

impl InventoryCountDetailsVm {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            id: RwSignal::new(None),
            inventory_id: RwSignal::new(None),
            date: RwSignal::new(date),
            status: RwSignal::new(CountStatus::Draft),
            notes: RwSignal::new(String::new()),
            lines: RwSignal::new(Vec::new()),
            only_differences: RwSignal::new(false),
            loading_stock: RwSignal::new(false),
            form: FormStatus::new(),
        }
    }

    pub fn load(&self, count: InventoryCount) {
        self.id.set(Some(count.id));
        self.inventory_id.set(Some(count.inventory_id));
        self.date.set(count.date);
        self.status.set(count.status);
        self.notes.set(count.notes.unwrap_or_default());
        self.lines
            .set(count.details.into_iter().map(CountLine::new).collect());
    }

    /// Adjusted counts are history and cannot change.
    pub fn is_locked(&self) -> bool {
        self.status.get() == CountStatus::Adjusted
    }

    pub fn set_counted(&self, index: usize, value: String) {
        self.lines.update(|lines| {
            if let Some(line) = lines.get_mut(index) {
                line.counted = value;
            }
        });
    }

    /// Indices of the lines to show; tracked.
    pub fn visible_indices(&self) -> Vec<usize> {
        let only_differences = self.only_differences.get();
        self.lines.with(|lines| {
            lines
                .iter()
                .enumerate()
                .filter(|(_, l)| !only_differences || l.has_difference())
                .map(|(i, _)| i)
                .collect()
        })
    }

    pub fn difference_count(&self) -> usize {
        self.lines
            .with(|lines| lines.iter().filter(|l| l.has_difference()).count())
    }

    pub fn build_save_dto(&self) -> InventoryCountDto {
        InventoryCountDto {
            id: self.id.get_untracked(),
            inventory_id: self.inventory_id.get_untracked(),
            date: self.date.get_untracked(),
            status: self.status.get_untracked(),
            notes: non_blank(&self.notes.get_untracked()),
            details: self
                .lines
                .with_untracked(|lines| lines.iter().map(CountLine::to_detail).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock(item_id: i64, quantity: f64) -> StockLine {
        StockLine {
            item_id,
            item_name: format!("Item {item_id}"),
            unit_id: 1,
            unit_name: None,
            quantity,
        }
    }

    #[test]
    fn sheet_starts_without_differences() {
        let sheet = sheet_from_stock(&[stock(1, 4.0), stock(2, 0.5)]);
        assert_eq!(sheet.len(), 2);
        assert!(sheet.iter().all(|l| !l.has_difference()));
        assert_eq!(sheet[1].counted, "0.5");
    }

    #[test]
    fn typed_count_drives_difference() {
        let mut line = sheet_from_stock(&[stock(1, 4.0)]).remove(0);
        line.counted = "6".into();
        assert_eq!(line.difference(), 2.0);
        line.counted = "x".into();
        assert_eq!(line.to_detail().counted_quantity, -1.0);
    }

    #[test]
    fn only_user_statuses_parse() {
        assert_eq!(status_from_value("completed"), Some(CountStatus::Completed));
        assert_eq!(status_from_value("adjusted"), None);
    }
}
