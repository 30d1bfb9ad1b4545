use std::cmp::Ordering;

use contracts::shared::SortDirection;

use super::column::{CellValue, Column};
use super::record::TableRecord;

/// Current sort of a table. No column means "newest first" (id descending).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: &str, direction: SortDirection) -> Self {
        Self {
            column: Some(column.to_string()),
            direction,
        }
    }

    /// Header click: another column starts ascending, the same column flips.
    pub fn toggled(&self, column: &str) -> Self {
        match &self.column {
            Some(current) if current == column => Self::by(column, self.direction.toggled()),
            _ => Self::by(column, SortDirection::Asc),
        }
    }

    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        match &self.column {
            Some(current) if current == column => Some(self.direction),
            _ => None,
        }
    }
}

/// Numbers compare numerically, dates chronologically, anything else as
/// case-insensitive text with empty cells as "".
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_number(), b.as_number()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    if let (CellValue::Date(x), CellValue::Date(y)) = (a, b) {
        return x.cmp(y);
    }
    a.sort_text()
        .to_lowercase()
        .cmp(&b.sort_text().to_lowercase())
}

pub fn sort_records<T: TableRecord>(rows: &mut [T], columns: &[Column<T>], sort: &SortState) {
    let column = sort
        .column
        .as_deref()
        .and_then(|key| columns.iter().find(|c| c.key == key));

    match column {
        Some(column) => rows.sort_by(|a, b| {
            let ord = column.compare(a, b);
            match sort.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }),
        None => rows.sort_by(|a, b| b.record_id().cmp(&a.record_id())),
    }
}

/// Keeps rows where any column's text contains `needle`, ignoring case.
pub fn filter_records<T>(rows: Vec<T>, columns: &[Column<T>], needle: &str) -> Vec<T> {
    let needle = needle.trim().to_lowercase();
    if needle.is_empty() {
        return rows;
    }
    rows.into_iter()
        .filter(|row| {
            columns
                .iter()
                .any(|c| c.value(row).display().to_lowercase().contains(&needle))
        })
        .collect()
}

pub fn sort_indicator(sort: &SortState, column: &str) -> &'static str {
    match sort.direction_of(column) {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

pub fn sort_class(sort: &SortState, column: &str) -> &'static str {
    if sort.direction_of(column).is_some() {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Clone, Debug)]
    struct Row {
        id: i64,
        name: &'static str,
        qty: f64,
        date: NaiveDate,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> i64 {
            self.id
        }
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 1, name: "banana", qty: 10.0, date: d(5) },
            Row { id: 2, name: "Apple", qty: 2.0, date: d(20) },
            Row { id: 3, name: "cherry", qty: 100.0, date: d(1) },
        ]
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "common.name", |r: &Row| CellValue::text(r.name)),
            Column::new("qty", "common.quantity", |r: &Row| CellValue::Number(r.qty)),
            Column::new("date", "common.date", |r: &Row| CellValue::Date(r.date)),
        ]
    }

    fn ids(rows: &[Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn text_sort_ignores_case() {
        let mut data = rows();
        sort_records(&mut data, &columns(), &SortState::by("name", SortDirection::Asc));
        assert_eq!(ids(&data), vec![2, 1, 3]);
        sort_records(&mut data, &columns(), &SortState::by("name", SortDirection::Desc));
        assert_eq!(ids(&data), vec![3, 1, 2]);
    }

    #[test]
    fn numbers_sort_numerically_not_lexically() {
        let mut data = rows();
        sort_records(&mut data, &columns(), &SortState::by("qty", SortDirection::Asc));
        assert_eq!(ids(&data), vec![2, 1, 3]);
        sort_records(&mut data, &columns(), &SortState::by("qty", SortDirection::Desc));
        assert_eq!(ids(&data), vec![3, 1, 2]);
    }

    #[test]
    fn dates_sort_chronologically() {
        let mut data = rows();
        sort_records(&mut data, &columns(), &SortState::by("date", SortDirection::Asc));
        assert_eq!(ids(&data), vec![3, 1, 2]);
        sort_records(&mut data, &columns(), &SortState::by("date", SortDirection::Desc));
        assert_eq!(ids(&data), vec![2, 1, 3]);
    }

    #[test]
    fn no_sort_column_means_newest_id_first() {
        let mut data = rows();
        sort_records(&mut data, &columns(), &SortState::default());
        assert_eq!(ids(&data), vec![3, 2, 1]);
    }

    #[test]
    fn header_click_cycles_asc_desc_asc() {
        let s = SortState::default().toggled("name");
        assert_eq!(s.direction_of("name"), Some(SortDirection::Asc));
        let s = s.toggled("name");
        assert_eq!(s.direction_of("name"), Some(SortDirection::Desc));
        let s = s.toggled("name");
        assert_eq!(s.direction_of("name"), Some(SortDirection::Asc));
        let s = s.toggled("qty");
        assert_eq!(s.direction_of("qty"), Some(SortDirection::Asc));
        assert_eq!(s.direction_of("name"), None);
    }

    #[test]
    fn empty_cells_compare_as_empty_text() {
        assert_eq!(
            compare_cells(&CellValue::Empty, &CellValue::text("a")),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(&CellValue::Number(3.0), &CellValue::text("3")),
            Ordering::Equal
        );
    }

    #[test]
    fn filter_matches_any_column_case_insensitively() {
        let found = filter_records(rows(), &columns(), "APP");
        assert_eq!(ids(&found), vec![2]);
        assert_eq!(filter_records(rows(), &columns(), "  ").len(), 3);
    }
}
