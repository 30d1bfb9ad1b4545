use contracts::domain::a002_inventory::aggregate::Inventory;
use contracts::domain::a006_item::aggregate::Item;
use contracts::reports::r103_item_movements::{movement_totals, ItemMovement, ItemMovementsQuery};
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
use crate::shared::components::ui::Badge;
use crate::shared::data_table::{CellValue, Column, DataTable, SortState};
use crate::shared::date_utils::today;
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::format_quantity;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use crate::shared::query_cache::use_query_cache;

const REPORT_PATH: &str = "/report/item-movements";

fn columns() -> Vec<Column<ItemMovement>> {
    vec![
        Column::new("date", "report.date", |m: &ItemMovement| CellValue::Date(m.date)),
        Column::new("item", "report.item", |m: &ItemMovement| CellValue::text(m.item_name.clone())),
        Column::new("inventory", "report.inventory", |m: &ItemMovement| {
            CellValue::opt_text(m.inventory_name.as_deref())
        }),
        Column::new("type", "report.operation", |m: &ItemMovement| {
            CellValue::text(m.invoice_type.path_segment())
        })
        .centered()
        .render(|m: &ItemMovement| view! { <Badge label_key=m.invoice_type.label_key() /> }.into_any()),
        Column::new("in", "report.quantity_in", |m: &ItemMovement| {
            CellValue::Number(m.quantity_in)
        })
        .align_end(),
        Column::new("out", "report.quantity_out", |m: &ItemMovement| {
            CellValue::Number(m.quantity_out)
        })
        .align_end(),
        Column::new("balance", "report.balance", |m: &ItemMovement| {
            CellValue::opt_number(m.balance)
        })
        .align_end(),
    ]
}

fn totals(rows: &[ItemMovement]) -> Vec<(&'static str, String)> {
    let (quantity_in, quantity_out) = movement_totals(rows);
    vec![
        ("report.row_count", rows.len().to_string()),
        ("report.quantity_in", format_quantity(quantity_in)),
        ("report.quantity_out", format_quantity(quantity_out)),
        ("report.net_quantity", format_quantity(quantity_in - quantity_out)),
    ]
}

/// Every stock movement over a period, by item and store.
#[component]
pub fn ItemMovementsReport() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let report = ReportRun::<ItemMovement>::new();
    let period = RwSignal::new(ReportPeriod::month_to_date(today()));
    let item_id = RwSignal::new(None::<i64>);
    let inventory_id = RwSignal::new(None::<i64>);
    let items = options_of(use_resource_list::<Item>(cache), |_| true);
    let inventories = options_of(use_resource_list::<Inventory>(cache), |_| true);

    let run = move |_| {
        let p = period.get_untracked();
        let query = ItemMovementsQuery {
            from: p.from,
            to: p.to,
            item_id: item_id.get_untracked(),
            inventory_id: inventory_id.get_untracked(),
        };
        report.run(REPORT_PATH, query, p.validate(), dialogs);
    };

    let summary = Signal::derive(move || report.rows.with(|rows| totals(rows)));

    view! {
        <PageFrame page_id="r103_item_movements--report" category=PAGE_CAT_REPORT>
            <PageHeader title=Signal::derive(move || i18n.t("menu.item_movements"))>
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
                <FormField label_key="report.item">
                    <EntitySelect options=items value=item_id placeholder_key="report.all_items" />
                </FormField>
                <FormField label_key="report.inventory">
                    <EntitySelect
                        options=inventories
                        value=inventory_id
                        placeholder_key="report.all_inventories"
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
    fn totals_include_net_movement() {
        let rows: Vec<ItemMovement> = serde_json::from_str(
            r#"[
                {"id":1,"date":"2024-05-02","item_id":7,"item_name":"Flour","type":"purchase","quantity_in":10.0},
                {"id":2,"date":"2024-05-03","item_id":7,"item_name":"Flour","type":"waste","quantity_out":2.5}
            ]"#,
        )
        .unwrap();
        let items = totals(&rows);
        assert_eq!(items[1].1, "10");
        assert_eq!(items[3], ("report.net_quantity", "7.5".to_string()));
    }
}
