use contracts::shared::ListQuery;

use super::sorting::SortState;

pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Rows(usize),
    /// One page holding every row.
    All,
}

impl PageSize {
    /// Concrete rows per page given the current total.
    pub fn resolve(self, total: usize) -> usize {
        match self {
            PageSize::Rows(n) => n.max(1),
            PageSize::All => total.max(1),
        }
    }

    pub fn option_value(self) -> String {
        match self {
            PageSize::Rows(n) => n.to_string(),
            PageSize::All => "all".to_string(),
        }
    }

    pub fn from_option_value(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(PageSize::All);
        }
        value.parse().ok().filter(|n| *n > 0).map(PageSize::Rows)
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// 1-based page kept inside `1..=page_count`.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

pub fn page_slice<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let page = clamp_page(page, rows.len(), page_size);
    let start = (page - 1) * page_size.max(1);
    let end = (start + page_size.max(1)).min(rows.len());
    rows.get(start..end).unwrap_or(&[])
}

/// 1-based `(first, last)` row numbers shown on `page`; `(0, 0)` when empty.
pub fn row_range(page: usize, page_size: usize, total: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    let page = clamp_page(page, total, page_size);
    let first = (page - 1) * page_size + 1;
    (first, (first + page_size - 1).min(total))
}

/// What a server-mode table asks its owner to load.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    pub sort: SortState,
    pub search: Option<String>,
}

impl PageRequest {
    pub fn first(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size,
            sort: SortState::default(),
            search: None,
        }
    }

    pub fn to_list_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            per_page: self.page_size,
            sort_by: self.sort.column.clone(),
            sort_dir: self.sort.column.as_ref().map(|_| self.sort.direction),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::SortDirection;

    #[test]
    fn twenty_three_rows_split_ten_ten_three() {
        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(page_count(rows.len(), 10), 3);
        assert_eq!(page_slice(&rows, 1, 10).len(), 10);
        assert_eq!(page_slice(&rows, 2, 10).len(), 10);
        assert_eq!(page_slice(&rows, 3, 10), &[21, 22, 23]);
    }

    #[test]
    fn out_of_range_page_clamps_to_last() {
        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(clamp_page(7, 23, 10), 3);
        assert_eq!(page_slice(&rows, 7, 10), &[21, 22, 23]);
        assert_eq!(clamp_page(0, 23, 10), 1);
    }

    #[test]
    fn show_all_yields_every_row_on_one_page() {
        let rows: Vec<u32> = (1..=23).collect();
        let size = PageSize::All.resolve(rows.len());
        assert_eq!(size, 23);
        assert_eq!(page_count(rows.len(), size), 1);
        assert_eq!(page_slice(&rows, 1, size).len(), 23);
        assert_eq!(PageSize::All.resolve(137), 137);
    }

    #[test]
    fn empty_table_still_has_one_page() {
        let rows: Vec<u32> = Vec::new();
        assert_eq!(page_count(0, 10), 1);
        assert!(page_slice(&rows, 1, 10).is_empty());
        assert_eq!(row_range(1, 10, 0), (0, 0));
        assert_eq!(PageSize::All.resolve(0), 1);
    }

    #[test]
    fn row_range_of_last_page() {
        assert_eq!(row_range(3, 10, 23), (21, 23));
        assert_eq!(row_range(1, 25, 23), (1, 23));
    }

    #[test]
    fn page_size_option_values() {
        assert_eq!(PageSize::from_option_value("all"), Some(PageSize::All));
        assert_eq!(PageSize::from_option_value("25"), Some(PageSize::Rows(25)));
        assert_eq!(PageSize::from_option_value("0"), None);
        assert_eq!(PageSize::Rows(50).option_value(), "50");
    }

    #[test]
    fn request_maps_to_list_query() {
        let request = PageRequest {
            page: 2,
            page_size: 25,
            sort: SortState::by("date", SortDirection::Desc),
            search: Some("  ".into()),
        };
        let query = request.to_list_query();
        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 25);
        assert_eq!(query.sort_by.as_deref(), Some("date"));
        assert_eq!(query.sort_dir, Some(SortDirection::Desc));
        assert_eq!(query.search, None);

        let unsorted = PageRequest::first(10).to_list_query();
        assert_eq!(unsorted.sort_dir, None);
    }
}
