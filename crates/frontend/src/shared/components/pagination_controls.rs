use crate::shared::data_table::pagination::{row_range, PageSize, PAGE_SIZE_OPTIONS};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pager under a list: first/prev/next/last buttons, "x–y of n" and the
/// page-size select including "show all".
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)] total_pages: Signal<usize>,

    #[prop(into)] total_count: Signal<usize>,

    #[prop(into)] page_size: Signal<PageSize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<PageSize>,
) -> impl IntoView {
    let i18n = use_i18n();
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_first
                title=move || i18n.t("pagination.first")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title=move || i18n.t("pagination.previous")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let total = total_count.get();
                    let size = page_size.get().resolve(total);
                    let (first, last) = row_range(current_page.get(), size, total);
                    let (first, last, total) =
                        (first.to_string(), last.to_string(), total.to_string());
                    i18n.t_with(
                        "pagination.range",
                        &[("from", &first), ("to", &last), ("total", &total)],
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title=move || i18n.t("pagination.next")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=at_last
                title=move || i18n.t("pagination.last")
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Some(size) = PageSize::from_option_value(&event_target_value(&ev)) {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().option_value()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        let option = PageSize::Rows(size);
                        view! {
                            <option
                                value=option.option_value()
                                selected=move || page_size.get() == option
                            >
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
                <option value="all" selected=move || page_size.get() == PageSize::All>
                    {move || i18n.t("pagination.all")}
                </option>
            </select>
        </div>
    }
}
