use contracts::domain::a001_category::aggregate::Category;
use contracts::reports::r102_cost_analysis::{total_cost, CostAnalysisQuery, CostAnalysisRow};
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
use crate::shared::data_table::{CellValue, Column, DataTable, SortState};
use crate::shared::date_utils::today;
use crate::shared::dialogs::use_dialogs;
use crate::shared::format::{format_money, format_percent};
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::list_utils::{options_of, use_resource_list};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_REPORT};
use crate::shared::query_cache::use_query_cache;

const REPORT_PATH: &str = "/report/cost-analysis";

/// `grand_total` is read when a cell renders, after the rows it sums landed.
fn columns(grand_total: Signal<f64>) -> Vec<Column<CostAnalysisRow>> {
    vec![
        Column::new("item", "report.item", |r: &CostAnalysisRow| {
            CellValue::text(r.item_name.clone())
        }),
        Column::new("category", "report.category", |r: &CostAnalysisRow| {
            CellValue::opt_text(r.category_name.as_deref())
        }),
        Column::new("unit", "report.unit", |r: &CostAnalysisRow| {
            CellValue::opt_text(r.unit_name.as_deref())
        }),
        Column::new("quantity", "common.quantity", |r: &CostAnalysisRow| {
            CellValue::Number(r.quantity)
        })
        .align_end(),
        Column::new("unit_cost", "report.unit_cost", |r: &CostAnalysisRow| {
            CellValue::Money(r.unit_cost)
        })
        .align_end(),
        Column::new("total_cost", "report.total_cost", |r: &CostAnalysisRow| {
            CellValue::Money(r.total_cost)
        })
        .align_end(),
        Column::new("share", "report.share", move |r: &CostAnalysisRow| {
            CellValue::Number(r.share_of(grand_total.get_untracked()))
        })
        .align_end()
        .render(move |r: &CostAnalysisRow| {
            let share = r.share_of(grand_total.get_untracked());
            view! {
                <span class="share-cell">
                    <span class="share-cell__bar" style=format!("width: {share:.0}%")></span>
                    <span class="share-cell__value">{format_percent(share)}</span>
                </span>
            }
            .into_any()
        }),
    ]
}

fn totals(rows: &[CostAnalysisRow]) -> Vec<(&'static str, String)> {
    vec![
        ("report.row_count", rows.len().to_string()),
        ("report.total_cost", format_money(total_cost(rows))),
    ]
}

/// Consumption cost per item over a period, with each item's share.
#[component]
pub fn CostAnalysisReport() -> impl IntoView {
    let i18n = use_i18n();
    let cache = use_query_cache();
    let dialogs = use_dialogs();
    let report = ReportRun::<CostAnalysisRow>::new();
    let period = RwSignal::new(ReportPeriod::month_to_date(today()));
    let category_id = RwSignal::new(None::<i64>);
    let categories = options_of(use_resource_list::<Category>(cache), |_| true);

    let run = move |_| {
        let p = period.get_untracked();
        let query = CostAnalysisQuery {
            from: p.from,
            to: p.to,
            category_id: category_id.get_untracked(),
        };
        report.run(REPORT_PATH, query, p.validate(), dialogs);
    };

    let grand_total = Signal::derive(move || report.rows.with(|rows| total_cost(rows)));
    let summary = Signal::derive(move || report.rows.with(|rows| totals(rows)));

    view! {
        <PageFrame page_id="r102_cost_analysis--report" category=PAGE_CAT_REPORT>
            <PageHeader title=Signal::derive(move || i18n.t("menu.cost_analysis"))>
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
                columns=columns(grand_total)
                loading=report.loading()
                searchable=true
                initial_sort=SortState::by("total_cost", SortDirection::Desc)
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

    fn row(item_id: i64, quantity: f64, unit_cost: f64) -> CostAnalysisRow {
        CostAnalysisRow {
            item_id,
            item_name: format!("item {item_id}"),
            category_name: None,
            unit_name: None,
            quantity,
            unit_cost,
            total_cost: quantity * unit_cost,
        }
    }

    #[test]
    fn totals_sum_cost_over_rows() {
        let rows = vec![row(1, 2.0, 10.0), row(2, 1.0, 5.0)];
        let items = totals(&rows);
        assert_eq!(items[0].1, "2");
        assert_eq!(items[1], ("report.total_cost", format_money(25.0)));
        assert_eq!(rows[1].share_of(25.0), 20.0);
    }
}
