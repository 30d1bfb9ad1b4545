use super::column::Column;
use super::pagination::{clamp_page, page_count, page_slice, PageSize};
use super::record::TableRecord;
use super::sorting::{filter_records, sort_records, SortState};

/// Where the rows of a table come from, stripped of its reactive parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSource {
    /// Every row is at hand: filter, sort and slice here.
    Local,
    /// The rows are one page as served; `total` counts all pages.
    Served { total: usize },
}

/// Rows of the current page plus the numbers the pager shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing<T> {
    pub rows: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

pub fn visible_rows<T: TableRecord>(
    source: RowSource,
    rows: Vec<T>,
    columns: &[Column<T>],
    sort: &SortState,
    filter: &str,
    page: usize,
    size: PageSize,
) -> Listing<T> {
    match source {
        RowSource::Local => {
            let mut prepared = filter_records(rows, columns, filter);
            sort_records(&mut prepared, columns, sort);
            let total = prepared.len();
            let page_size = size.resolve(total);
            let page = clamp_page(page, total, page_size);
            Listing {
                rows: page_slice(&prepared, page, page_size).to_vec(),
                total,
                page,
                page_size,
                page_count: page_count(total, page_size),
            }
        }
        RowSource::Served { total } => {
            let page_size = size.resolve(total);
            Listing {
                rows,
                total,
                page: clamp_page(page, total, page_size),
                page_size,
                page_count: page_count(total, page_size),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::CellValue;
    use contracts::shared::SortDirection;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        name: String,
    }

    impl TableRecord for Row {
        fn record_id(&self) -> i64 {
            self.id
        }
    }

    fn columns() -> Vec<Column<Row>> {
        vec![Column::new("name", "common.name", |r: &Row| CellValue::text(r.name.clone()))]
    }

    fn rows(count: i64) -> Vec<Row> {
        (1..=count)
            .map(|id| Row {
                id,
                name: format!("row {id:02}"),
            })
            .collect()
    }

    fn ids(listing: &Listing<Row>) -> Vec<i64> {
        listing.rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn served_rows_pass_through_untouched() {
        // Neither id-descending nor name-sorted.
        let served = rows(3);
        let page = vec![served[1].clone(), served[0].clone(), served[2].clone()];
        let sort = SortState::by("name", SortDirection::Desc);
        let listing = visible_rows(
            RowSource::Served { total: 57 },
            page.clone(),
            &columns(),
            &sort,
            "no such text",
            2,
            PageSize::Rows(3),
        );
        assert_eq!(listing.rows, page);
        assert_eq!(listing.total, 57);
        assert_eq!(listing.page, 2);
        assert_eq!(listing.page_count, 19);
    }

    #[test]
    fn served_show_all_uses_reported_total() {
        let listing = visible_rows(
            RowSource::Served { total: 137 },
            rows(137),
            &columns(),
            &SortState::default(),
            "",
            1,
            PageSize::All,
        );
        assert_eq!(listing.page_size, 137);
        assert_eq!(listing.page_count, 1);
        assert_eq!(listing.rows.len(), 137);
    }

    #[test]
    fn served_page_beyond_total_clamps_without_dropping_rows() {
        let listing = visible_rows(
            RowSource::Served { total: 23 },
            rows(3),
            &columns(),
            &SortState::default(),
            "",
            9,
            PageSize::Rows(10),
        );
        assert_eq!(listing.page, 3);
        assert_eq!(listing.rows.len(), 3);
    }

    #[test]
    fn local_rows_are_filtered_sorted_and_sliced() {
        let listing = visible_rows(
            RowSource::Local,
            rows(23),
            &columns(),
            &SortState::default(),
            "",
            3,
            PageSize::Rows(10),
        );
        assert_eq!(ids(&listing), vec![3, 2, 1]);
        assert_eq!(listing.total, 23);

        let filtered = visible_rows(
            RowSource::Local,
            rows(23),
            &columns(),
            &SortState::by("name", SortDirection::Asc),
            "row 1",
            1,
            PageSize::Rows(10),
        );
        assert_eq!(filtered.total, 10);
        assert_eq!(ids(&filtered).first(), Some(&10));
    }
}
