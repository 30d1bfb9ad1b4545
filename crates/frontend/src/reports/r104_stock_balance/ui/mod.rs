use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_inventory::aggregate::Inventory;
use contracts::reports::r104_stock_balance::{total_value, StockBalanceQuery, StockBalanceRow};
use contracts::shared::{SortDirection, ValidationErrors};
use leptos::prelude::*;
use thaw::*;

use crate::reports::report_run::ReportRun;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::form_field::FormField;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::totals_bar::TotalsBar;
use crate::shared::data_table::{CellValue, Column, DataTable, SortState};
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_money;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use crate::shared::query_cache::use_query_cache;

const REPORT_PATH: &str = "/report/stock-balance";

fn columns() -> Vec<Column<StockBalanceRow>> {
    vec![
        Column::new("code", "report.code", |r: &StockBalanceRow| {
            CellValue::opt_text(r.item_code.as_deref())
        }),
        Column::new("item", "report.item", |r: &StockBalanceRow| {
            CellValue::text(r.item_name.clone())
        }),
        Column::new("inventory", "report.inventory", |r: &StockBalanceRow| {
            CellValue::opt_text(r.inventory_name.as_deref())
        }),
        Column::new("unit", "report.unit", |r: &StockBalanceRow| {
            CellValue::opt_text(r.unit_name.as_deref())
        }),
        Column::new("quantity", "common.quantity", |r: &StockBalanceRow| {
            CellValue::Number(r.quantity)
        })
        .align_end(),
        Column::new("unit_cost", "report.unit_cost", |r: &StockBalanceRow| {
            CellValue::Money(r.unit_cost)
        })
        .align_end(),
        Column::new("value", "report.value", |r: &StockBalanceRow| CellValue::Money(r.value()))
            .align_end(),
    ]
}

fn totals(rows: &[StockBalanceRow]) -> Vec<(&'static str, String)> {
    let negative = rows.iter().filter(|r| r.quantity < 0.0).count();
    let mut items = vec![
        ("report.row_count", rows.len().to_string()),
        ("report.total_value", format_money(total_value(rows))),
    ];
    if negative > 0 {
        items.push(("report.negative_lines", negative.to_string()));
    }
    items
}

/// Current stock per item and store, valued at unit cost. No period: the
/// balance is always as of now.
#[component]
pub fn StockBalanceReport() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let report = ReportRun::<StockBalanceRow>::new();
    let inventory_id = RwSignal::new(None::<i64>);
    let category_id = RwSignal::new(None::<i64>);
    let inventories = options_of(use_resource_list::<Inventory>(cache), |_| true);
    let categories = options_of(use_resource_list::<Category>(cache), |_| true);

    let run = move || {
        let query = StockBalanceQuery {
            inventory_id: inventory_id.get_untracked(),
            category_id: category_id.get_untracked(),
        };
        report.run(REPORT_PATH, query, Ok::<(), ValidationErrors>(()), dialogs);
    };
    // Nothing to pick before the first run, so it starts right away.
    run();

    let summary = Signal::derive(move || report.rows.with(|rows| totals(rows)));

    view! {
        <PageFrame page_id="r104_stock_balance--report" category=PAGE_CAT_REPORT>
            <PageHeader title=Signal::derive(move || i18n.t("menu.stock_balance"))>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=report.loading()
                    on_click=move |_| run()
                >
                    {icon("play")}
                    {move || i18n.t("report.run")}
                </Button>
            </PageHeader>
            <div class="report-filters">
                <FormField label_key="report.inventory">
                    <EntitySelect
                        options=inventories
                        value=inventory_id
                        placeholder_key="report.all_inventories"
                    />
                </FormField>
                <FormField label_key="report.category">
                    <EntitySelect
                        options=categories
                        value=category_id
                        placeholder_key="report.all_categories"
                    />
                </FormField>
            </div>
            <DataTable
                rows=report.rows
                columns=columns()
                loading=report.loading()
                searchable=true
                initial_sort=SortState::by("item", SortDirection::Asc)
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

    fn row(quantity: f64, unit_cost: f64) -> StockBalanceRow {
        StockBalanceRow {
            item_id: 1,
            item_code: None,
            item_name: "Sugar".into(),
            inventory_name: None,
            unit_name: None,
            quantity,
            unit_cost,
        }
    }

    #[test]
    fn negative_stock_is_called_out() {
        let clean = totals(&[row(2.0, 3.0)]);
        assert_eq!(clean.len(), 2);
        assert_eq!(clean[1], ("report.total_value", format_money(6.0)));

        let short = totals(&[row(2.0, 3.0), row(-1.0, 3.0)]);
        assert_eq!(short.len(), 3);
        assert_eq!(short[2].1, "1");
    }
}
