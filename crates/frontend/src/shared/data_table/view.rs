use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::column::Column;
use super::confirm::DeleteConfirmation;
use super::listing::visible_rows;
use super::pagination::{clamp_page, PageRequest, PageSize};
use super::record::TableRecord;
use super::sorting::{sort_class, sort_indicator, SortState};
use super::{RowActions, TableMode};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::dialogs::ConfirmDialog;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Quiet time after the last keystroke before a server table asks for rows.
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Generic list table.
///
/// In [`TableMode::Client`] `rows` is the whole result set and filtering,
/// sorting and slicing happen here. In [`TableMode::Server`] `rows` is the
/// current page as served, and every page, size, sort or search change is
/// reported through `on_change` (once on mount as well).
#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    #[prop(optional)] mode: Option<TableMode>,
    #[prop(optional)] actions: Option<RowActions<T>>,
    #[prop(optional, into)] loading: Signal<bool>,
    /// Show the text filter above the table.
    #[prop(optional)]
    searchable: bool,
    #[prop(optional)] initial_sort: Option<SortState>,
    #[prop(optional)] initial_page_size: Option<PageSize>,
) -> impl IntoView
where
    T: TableRecord,
{
    let i18n = use_i18n();
    let mode = mode.unwrap_or(TableMode::Client);
    let actions = actions.unwrap_or_default();
    let has_actions = !actions.is_empty();
    let column_count = columns.len() + usize::from(has_actions);

    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    let page = RwSignal::new(1usize);
    let page_size = RwSignal::new(
        initial_page_size.unwrap_or(PageSize::Rows(config().default_page_size)),
    );
    let sort = RwSignal::new(initial_sort.unwrap_or_default());
    let filter = RwSignal::new(String::new());
    let confirm = RwSignal::new(DeleteConfirmation::<T>::default());

    let listing = Signal::derive(move || {
        let source = mode.source();
        let sort = sort.get();
        let needle = filter.get();
        columns.with_value(|cols| {
            visible_rows(source, rows.get(), cols, &sort, &needle, page.get(), page_size.get())
        })
    });

    let total = Signal::derive(move || listing.with(|l| l.total));
    let resolved_size = Signal::derive(move || listing.with(|l| l.page_size));
    let total_pages = Signal::derive(move || listing.with(|l| l.page_count));
    let current_page = Signal::derive(move || listing.with(|l| l.page));

    let emit = move || {
        if let TableMode::Server { on_change, total } = mode {
            let request = PageRequest {
                page: page.get_untracked(),
                page_size: page_size.get_untracked().resolve(total.get_untracked()),
                sort: sort.get_untracked(),
                search: Some(filter.get_untracked()).filter(|s| !s.trim().is_empty()),
            };
            on_change.run(request);
        }
    };

    Effect::new(move |prev: Option<()>| {
        if prev.is_none() {
            emit();
        }
    });

    let on_page_change = Callback::new(move |p: usize| {
        page.set(clamp_page(
            p,
            total.get_untracked(),
            resolved_size.get_untracked(),
        ));
        emit();
    });

    let on_page_size_change = Callback::new(move |size: PageSize| {
        page_size.set(size);
        page.set(1);
        emit();
    });

    let on_sort = move |key: &'static str| {
        sort.update(|s| *s = s.toggled(key));
        page.set(1);
        emit();
    };

    let on_filter = move |value: String| {
        filter.set(value.clone());
        page.set(1);
        if !mode.is_server() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // A later keystroke owns the request.
            if filter.try_get_untracked().as_deref() == Some(value.as_str()) {
                emit();
            }
        });
    };

    let header = move || {
        columns.with_value(|cols| {
            cols.iter()
                .map(|col| {
                    let key = col.key;
                    let label_key = col.label_key;
                    let align = col.align.class();
                    if col.sortable {
                        view! {
                            <th
                                class=format!("table__header-cell table__header-cell--sortable {align}")
                                on:click=move |_| on_sort(key)
                            >
                                {move || i18n.t(label_key)}
                                <span class=move || sort.with(|s| sort_class(s, key))>
                                    {move || sort.with(|s| sort_indicator(s, key))}
                                </span>
                            </th>
                        }
                        .into_any()
                    } else {
                        view! {
                            <th class=format!("table__header-cell {align}")>
                                {move || i18n.t(label_key)}
                            </th>
                        }
                        .into_any()
                    }
                })
                .collect_view()
        })
    };

    let action_cell = move |row: T| {
        actions.with_value(|a| {
            let view_btn = a.on_view.map(|cb| {
                let row = row.clone();
                view! {
                    <button
                        class="button button--icon"
                        title=move || i18n.t("common.view")
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cb.run(row.clone());
                        }
                    >
                        {icon("eye")}
                    </button>
                }
            });
            let edit_btn = a.on_edit.map(|cb| {
                let row = row.clone();
                view! {
                    <button
                        class="button button--icon"
                        title=move || i18n.t("common.edit")
                        on:click=move |ev| {
                            ev.stop_propagation();
                            cb.run(row.clone());
                        }
                    >
                        {icon("edit")}
                    </button>
                }
            });
            let custom = a
                .custom
                .iter()
                .filter(|action| action.visible.as_ref().is_none_or(|visible| visible(&row)))
                .map(|action| {
                    let row = row.clone();
                    let cb = action.on_click;
                    let label_key = action.label_key;
                    view! {
                        <button
                            class="button button--icon"
                            title=move || i18n.t(label_key)
                            on:click=move |ev| {
                                ev.stop_propagation();
                                cb.run(row.clone());
                            }
                        >
                            {icon(action.icon)}
                        </button>
                    }
                })
                .collect_view();
            let delete_btn = a.on_delete.map(|_| {
                let row = row.clone();
                view! {
                    <button
                        class="button button--icon button--danger"
                        title=move || i18n.t("common.delete")
                        on:click=move |ev| {
                            ev.stop_propagation();
                            let row = row.clone();
                            confirm.update(|c| c.request(row));
                        }
                    >
                        {icon("trash")}
                    </button>
                }
            });
            view! {
                <td class="table__cell table__cell--actions">
                    <div class="table__actions">{view_btn}{edit_btn}{custom}{delete_btn}</div>
                </td>
            }
        })
    };

    let body = move || {
        let page_rows = listing.with(|l| l.rows.clone());
        if page_rows.is_empty() {
            return view! {
                <tr class="table__row table__row--empty">
                    <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                        {move || i18n.t("table.empty")}
                    </td>
                </tr>
            }
            .into_any();
        }
        page_rows
            .into_iter()
            .map(|row| {
                let open = actions.with_value(|a| a.on_edit.or(a.on_view));
                let dbl_row = row.clone();
                let cells = columns.with_value(|cols| {
                    cols.iter()
                        .map(|col| {
                            view! {
                                <td class=format!("table__cell {}", col.align.class())>
                                    {col.view_cell(&row)}
                                </td>
                            }
                        })
                        .collect_view()
                });
                let actions_view = has_actions.then(|| action_cell(row.clone()));
                view! {
                    <tr
                        class="table__row"
                        on:dblclick=move |_| {
                            if let Some(cb) = open {
                                cb.run(dbl_row.clone());
                            }
                        }
                    >
                        {cells}
                        {actions_view}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let confirm_delete = Callback::new(move |_| {
        let row = confirm.try_update(|c| c.confirm()).flatten();
        if let (Some(row), Some(on_delete)) = (row, actions.with_value(|a| a.on_delete)) {
            on_delete.run(row);
        }
    });
    let cancel_delete = Callback::new(move |_| confirm.update(|c| c.cancel()));

    view! {
        <div class="data-table">
            {searchable.then(|| view! {
                <div class="data-table__toolbar">
                    <input
                        type="search"
                        class="form__input data-table__search"
                        placeholder=move || i18n.t("table.search")
                        prop:value=move || filter.get()
                        on:input=move |ev| on_filter(event_target_value(&ev))
                    />
                </div>
            })}
            <div class="table-wrapper">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header}
                            {has_actions.then(|| view! {
                                <th class="table__header-cell table__header-cell--actions">
                                    {move || i18n.t("table.actions")}
                                </th>
                            })}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
                <Show when=move || loading.get()>
                    <div class="table__loading">
                        <Spinner />
                    </div>
                </Show>
            </div>
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total
                page_size=Signal::derive(move || page_size.get())
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />
            <Show when=move || confirm.with(|c| c.is_open())>
                {move || {
                    let label = confirm
                        .with(|c| c.pending().map(TableRecord::record_label))
                        .unwrap_or_default();
                    view! {
                        <ModalFrame on_close=cancel_delete modal_style="max-width: 440px;">
                            <ConfirmDialog
                                message=i18n.t_with("table.confirm_delete", &[("name", &label)])
                                on_confirm=confirm_delete
                                on_cancel=cancel_delete
                                confirm_key="common.delete"
                            />
                        </ModalFrame>
                    }
                }}
            </Show>
        </div>
    }
}
