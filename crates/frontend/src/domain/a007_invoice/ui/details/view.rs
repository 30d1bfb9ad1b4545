//! Invoice Details - View Component

use contracts::domain::a007_invoice::aggregate::{Invoice, InvoiceDetail};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::model::fetch_invoice;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_labels::invoice_details_key;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::totals_bar::TotalsBar;
use crate::shared::components::ui::Badge;
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::{format_date, format_money, format_quantity};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};

fn header_value(label_key: &'static str, value: Option<String>) -> impl IntoView {
    let i18n = use_i18n();
    value.map(|v| {
        view! {
            <div class="invoice-header__field">
                <span class="invoice-header__label">{move || i18n.t(label_key)}</span>
                <span class="invoice-header__value">{v}</span>
            </div>
        }
    })
}

fn line_row(index: usize, line: InvoiceDetail, with_price: bool) -> impl IntoView {
    let item = line
        .item_name
        .clone()
        .unwrap_or_else(|| format!("#{}", line.item_id));
    let unit = line
        .unit_name
        .clone()
        .unwrap_or_else(|| format!("#{}", line.unit_id));
    view! {
        <tr>
            <td class="grid__index">{index + 1}</td>
            <td>{item}</td>
            <td>{unit}</td>
            <td class="grid__number">{format_quantity(line.quantity)}</td>
            {with_price
                .then(|| {
                    view! {
                        <td class="grid__number">{format_money(line.price)}</td>
                        <td class="grid__number">{format_money(line.line_total())}</td>
                    }
                })}
        </tr>
    }
}

fn invoice_body(invoice: Invoice) -> impl IntoView {
    let t = invoice.invoice_type;
    let with_price = t.has_price();
    let total = invoice.total_amount();
    let line_count = invoice.details.len();
    let totals = Signal::derive(move || {
        let mut items = vec![("invoice.line_count_label", line_count.to_string())];
        if with_price {
            items.push(("invoice.total", format_money(total)));
        }
        items
    });
    let i18n = use_i18n();

    view! {
        <div class="invoice-header">
            <Badge label_key=t.label_key() />
            {header_value("invoice.number", invoice.number.clone())}
            {header_value("invoice.date", Some(format_date(invoice.date)))}
            {header_value(
                if t.has_destination() { "invoice.from_inventory" } else { "invoice.inventory" },
                invoice.inventory_name.clone(),
            )}
            {header_value("invoice.to_inventory", invoice.to_inventory_name.clone())}
            {header_value("invoice.supplier", invoice.supplier_name.clone())}
            {header_value("invoice.customer", invoice.customer_name.clone())}
            {header_value("invoice.currency", invoice.currency_code.clone())}
            {header_value("invoice.notes", invoice.notes.clone())}
        </div>
        <table class="grid grid--readonly">
            <thead>
                <tr>
                    <th class="grid__index">"#"</th>
                    <th>{move || i18n.t("invoice.item")}</th>
                    <th>{move || i18n.t("invoice.unit")}</th>
                    <th class="grid__number">{move || i18n.t("common.quantity")}</th>
                    {with_price
                        .then(|| {
                            view! {
                                <th class="grid__number">{move || i18n.t("invoice.price")}</th>
                                <th class="grid__number">{move || i18n.t("invoice.line_total")}</th>
                            }
                        })}
                </tr>
            </thead>
            <tbody>
                {invoice
                    .details
                    .into_iter()
                    .enumerate()
                    .map(|(i, line)| line_row(i, line, with_price))
                    .collect_view()}
            </tbody>
        </table>
        <TotalsBar items=totals />
    }
}

/// Stored invoice shown in its own tab.
#[component]
pub fn InvoiceView(id: i64) -> impl IntoView {
    let i18n = use_i18n();
    let dialogs = use_dialogs();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let invoice = RwSignal::new(None::<Invoice>);
    let loading = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        spawn_local(async move {
            match fetch_invoice(id).await {
                Ok(loaded) => invoice.set(Some(loaded)),
                Err(e) => dialogs.api_error(&e),
            }
            loading.set(false);
        });
    };
    load();

    let title = Signal::derive(move || {
        let number = invoice
            .with(|i| i.as_ref().and_then(|i| i.number.clone()))
            .unwrap_or_else(|| id.to_string());
        i18n.t_with("tabs.invoice_details", &[("id", &number)])
    });

    view! {
        <PageFrame page_id=format!("a007_invoice--details-{id}") category=PAGE_CAT_DETAIL>
            <PageHeader title=title>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    {icon("refresh")}
                    {move || i18n.t("common.refresh")}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| ctx.close_tab(&invoice_details_key(id))
                >
                    {icon("x")}
                    {move || i18n.t("common.close")}
                </Button>
            </PageHeader>
            {move || {
                if loading.get() && invoice.with(Option::is_none) {
                    return view! { <Spinner /> }.into_any();
                }
                match invoice.get() {
                    Some(inv) => invoice_body(inv).into_any(),
                    None => view! { <div class="empty-state">{i18n.t("invoice.not_found")}</div> }
                        .into_any(),
                }
            }}
        </PageFrame>
    }
}
