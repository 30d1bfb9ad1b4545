//! PageFrame: standard root wrapper for every page rendered inside a tab.
//!
//! The root element gets `id="{tab key}--{category}"` and
//! `data-page-category`, so a page found in the DOM inspector leads straight
//! to its module directory.

use leptos::prelude::*;

/// Record list with table, filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single-record page (invoice editor or viewer).
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Read-only report over a date range.
pub const PAGE_CAT_REPORT: &str = "report";

pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_REPORT => "page page--report",
        _ => "page",
    }
}

#[component]
pub fn PageFrame(
    /// `{tab key}--{category}`, e.g. `"a006_item--list"`
    #[prop(into)]
    page_id: String,
    /// One of the `PAGE_CAT_*` constants.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=page_class(category) data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_uses_plain_page_class() {
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
        assert_eq!(page_class(PAGE_CAT_REPORT), "page page--report");
        assert_eq!(page_class("other"), "page");
    }
}
