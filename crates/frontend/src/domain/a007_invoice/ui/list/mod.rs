use contracts::domain::a007_invoice::aggregate::{Invoice, InvoiceListQuery};
use contracts::domain::a007_invoice::InvoiceType;
use contracts::shared::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a007_invoice::ui::details::delete_invoice;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::{invoice_details_key, invoice_new_key};
use crate::shared::api::client::{get_page, with_query};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{CellValue, Column, DataTable, PageRequest, RowActions, TableMode};
use crate::shared::dialogs::use_dialogs;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_cache::{use_query_cache, QueryHandle};

const INVOICES_PATH: &str = "/invoices";
/// Cache key prefix shared by every invoice page query.
const INVOICES_KEY: &str = "invoices";

/// Cache key of one page request; identical requests share a fetch.
pub fn page_key(query: &InvoiceListQuery) -> String {
    with_query(INVOICES_KEY, query).unwrap_or_else(|_| INVOICES_KEY.to_string())
}

fn columns() -> Vec<Column<Invoice>> {
    vec![
        Column::new("number", "invoice.number", |i: &Invoice| {
            CellValue::opt_text(i.number.as_deref())
        }),
        Column::new("date", "invoice.date", |i: &Invoice| CellValue::Date(i.date)),
        Column::new("type", "invoice.type", |i: &Invoice| {
            CellValue::text(i.invoice_type.path_segment())
        })
        .centered()
        .render(|i: &Invoice| view! { <Badge label_key=i.invoice_type.label_key() /> }.into_any()),
        Column::new("inventory", "invoice.inventory", |i: &Invoice| {
            CellValue::opt_text(i.inventory_name.as_deref())
        }),
        Column::new("counterparty", "invoice.counterparty", |i: &Invoice| {
            CellValue::opt_text(i.counterparty())
        })
        .unsortable(),
        Column::new("total", "invoice.total", |i: &Invoice| CellValue::Money(i.total_amount()))
            .align_end(),
    ]
}

#[component]
pub fn InvoiceList() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let type_filter = RwSignal::new(None::<InvoiceType>);
    let page: RwSignal<Option<QueryHandle<Paginated<Invoice>>>> = RwSignal::new(None);

    let rows = Signal::derive(move || {
        page.get()
            .and_then(|h| h.with_data(|p| p.map(|p| p.data.clone())))
            .unwrap_or_default()
    });
    let total = Signal::derive(move || {
        page.get()
            .and_then(|h| h.with_data(|p| p.map(Paginated::total)))
            .unwrap_or(0)
    });
    let loading = Signal::derive(move || page.get().map(|h| h.is_loading()).unwrap_or(false));

    // Only the page on screen stays watched; earlier pages are dropped by the
    // next invalidation.
    let watched = StoredValue::new(None::<String>);
    on_cleanup(move || {
        if let Some(key) = watched.try_update_value(Option::take).flatten() {
            cache.release(&key);
        }
    });

    let on_change = Callback::new(move |request: PageRequest| {
        let query = InvoiceListQuery::new(type_filter.get_untracked(), request.to_list_query());
        let key = page_key(&query);
        log::debug!("invoice page requested: {key}");
        let handle = cache.query(key.clone(), move || {
            let query = query.clone();
            async move { get_page::<_, Invoice>(INVOICES_PATH, &query).await }
        });
        if let Some(previous) = watched.try_update_value(|w| w.replace(key)).flatten() {
            cache.release(&previous);
        }
        page.set(Some(handle));
    });

    let open_invoice = Callback::new(move |invoice: Invoice| {
        let key = invoice_details_key(invoice.id);
        ctx.open_tab(&key, &key);
    });

    let remove = Callback::new(move |invoice: Invoice| {
        spawn_local(async move {
            match delete_invoice(invoice.id).await {
                Ok(()) => {
                    log::info!("deleted invoice {}", invoice.id);
                    cache.invalidate(INVOICES_KEY);
                }
                Err(e) => dialogs.api_error(&e),
            }
        });
    });

    let new_invoice = move |_| {
        let invoice_type = type_filter.get_untracked().unwrap_or_default();
        let key = invoice_new_key(invoice_type);
        ctx.open_tab(&key, &key);
    };

    let type_tab = move |invoice_type: Option<InvoiceType>, label_key: &'static str| {
        view! {
            <Button
                size=ButtonSize::Small
                appearance=Signal::derive(move || {
                    if type_filter.get() == invoice_type {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                })
                on_click=move |_| type_filter.set(invoice_type)
            >
                {move || i18n.t(label_key)}
            </Button>
        }
    };

    view! {
        <PageFrame page_id="a007_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title=Signal::derive(move || i18n.t("menu.invoices"))>
                <Button appearance=ButtonAppearance::Primary on_click=new_invoice>
                    {icon("plus")}
                    {move || i18n.t("common.new")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| cache.invalidate(INVOICES_KEY)
                >
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
            </PageHeader>
            <div class="type-tabs">
                {type_tab(None, "invoice.all_types")}
                {InvoiceType::ALL
                    .into_iter()
                    .map(|t| type_tab(Some(t), t.label_key()))
                    .collect_view()}
            </div>
            // A new type starts over from page one with fresh table state.
            {move || {
                type_filter.track();
                let actions = RowActions::new().view(open_invoice).delete(remove);
                let mode = TableMode::Server { total, on_change };
                view! {
                    <DataTable
                        rows=rows
                        columns=columns()
                        mode=mode
                        actions=actions
                        loading=loading
                        searchable=true
                    />
                }
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::ListQuery;

    #[test]
    fn page_key_distinguishes_types_and_pages() {
        let purchases = InvoiceListQuery::new(Some(InvoiceType::Purchase), ListQuery::default());
        let second = InvoiceListQuery::new(
            Some(InvoiceType::Purchase),
            ListQuery {
                page: 2,
                ..ListQuery::default()
            },
        );
        assert_eq!(page_key(&purchases), "invoices?type=purchase&page=1&per_page=10");
        assert_ne!(page_key(&purchases), page_key(&second));
        assert!(page_key(&second).starts_with(INVOICES_KEY));
    }
}
