use contracts::domain::a003_supplier::aggregate::Supplier;
use contracts::domain::a007_invoice::InvoiceType;
use contracts::reports::r101_supplier_transactions::{
    net_total, SupplierTransaction, SupplierTransactionsQuery,
};
use contracts::reports::ReportPeriod;
use contracts::shared::SortDirection;
use leptos::prelude::*;
use thaw::*;

use crate::reports::report_run::ReportRun;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::form_field::FormField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::totals_bar::TotalsBar;
use crate::shared::components::ui::{Badge, BadgeVariant};
use crate::shared::data_table::{CellValue, Column, DataTable, SortState};
use crate::shared::date_utils::today;
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_money;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use crate::shared::query_cache::use_query_cache;

const REPORT_PATH: &str = "/report/supplier-transactions";

fn type_variant(invoice_type: InvoiceType) -> BadgeVariant {
    match invoice_type {
        InvoiceType::Return => BadgeVariant::Warning,
        _ => BadgeVariant::Neutral,
    }
}

fn columns() -> Vec<Column<SupplierTransaction>> {
    vec![
        Column::new("date", "report.date", |t: &SupplierTransaction| CellValue::Date(t.date)),
        Column::new("supplier", "report.supplier", |t: &SupplierTransaction| {
            CellValue::text(t.supplier_name.clone())
        }),
        Column::new("type", "report.operation", |t: &SupplierTransaction| {
            CellValue::text(t.invoice_type.path_segment())
        })
        .centered()
        .render(|t: &SupplierTransaction| {
            view! { <Badge variant=type_variant(t.invoice_type) label_key=t.invoice_type.label_key() /> }
                .into_any()
        }),
        Column::new("number", "invoice.number", |t: &SupplierTransaction| {
            CellValue::opt_text(t.invoice_number.as_deref())
        }),
        Column::new("amount", "report.amount", |t: &SupplierTransaction| {
            CellValue::Money(t.signed_amount())
        })
        .align_end(),
        Column::new("balance", "report.balance", |t: &SupplierTransaction| {
            CellValue::opt_money(t.balance)
        })
        .align_end(),
    ]
}

fn totals(rows: &[SupplierTransaction]) -> Vec<(&'static str, String)> {
    vec![
        ("report.row_count", rows.len().to_string()),
        ("report.net_total", format_money(net_total(rows))),
    ]
}

/// Purchases and returns per supplier over a period.
#[component]
pub fn SupplierTransactionsReport() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let report = ReportRun::<SupplierTransaction>::new();
    let period = RwSignal::new(ReportPeriod::month_to_date(today()));
    let supplier_id = RwSignal::new(None::<i64>);
    let suppliers = options_of(use_resource_list::<Supplier>(cache), |_| true);

    let run = move |_| {
        let p = period.get_untracked();
        let query = SupplierTransactionsQuery {
            from: p.from,
            to: p.to,
            supplier_id: supplier_id.get_untracked(),
        };
        report.run(REPORT_PATH, query, p.validate(), dialogs);
    };

    let summary = Signal::derive(move || report.rows.with(|rows| totals(rows)));

    view! {
        <PageFrame page_id="r101_supplier_transactions--report" category=PAGE_CAT_REPORT>
            <PageHeader title=Signal::derive(move || i18n.t("menu.supplier_transactions"))>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=report.loading()
                    on_click=run
                >
                    {icon("play")}
                    {move || i18n.t("report.run")}
                </Button>
            </PageHeader>
            <div class="report-filters">
                <FormField label_key="report.period" required=true error=report.form.error("to")>
                    <DateRangePicker value=period />
                </FormField>
                <FormField label_key="report.supplier">
                    <EntitySelect
                        options=suppliers
                        value=supplier_id
                        placeholder_key="report.all_suppliers"
                    />
                </FormField>
            </div>
            <DataTable
                rows=report.rows
                columns=columns()
                loading=report.loading()
                searchable=true
                initial_sort=SortState::by("date", SortDirection::Asc)
            />
            <Show when=move || report.ran.get()>
                <TotalsBar items=summary />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_net_returns_and_count_rows() {
        let rows: Vec<SupplierTransaction> = serde_json::from_str(
            r#"[
                {"id":1,"date":"2024-01-03","supplier_id":2,"supplier_name":"Acme","type":"purchase","amount":1000.0},
                {"id":2,"date":"2024-01-09","supplier_id":2,"supplier_name":"Acme","type":"return","amount":250.5}
            ]"#,
        )
        .unwrap();
        let items = totals(&rows);
        assert_eq!(items[0], ("report.row_count", "2".to_string()));
        assert_eq!(items[1], ("report.net_total", format_money(749.5)));
    }
}
