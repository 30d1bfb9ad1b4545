//! Tab content registry: the one place that maps a tab key to its view.

use leptos::prelude::*;

use super::tab_labels::{parse_tab_key, TabTarget};
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_inventory::ui::list::InventoryList;
use crate::domain::a003_supplier::ui::list::SupplierList;
use crate::domain::a004_unit::ui::list::UnitList;
use crate::domain::a005_currency::ui::list::CurrencyList;
use crate::domain::a006_item::ui::list::ItemList;
use crate::domain::a007_invoice::ui::details::InvoiceView;
use crate::domain::a007_invoice::ui::editor::InvoiceEditor;
use crate::domain::a007_invoice::ui::list::InvoiceList;
use crate::domain::a008_inventory_count::ui::list::InventoryCountList;
use crate::reports::r101_supplier_transactions::ui::SupplierTransactionsReport;
use crate::reports::r102_cost_analysis::ui::CostAnalysisReport;
use crate::reports::r103_item_movements::ui::ItemMovementsReport;
use crate::reports::r104_stock_balance::ui::StockBalanceReport;
use crate::shared::i18n::use_i18n;

/// Renders the content of the tab `key`; unknown keys get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Resources
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_inventory" => view! { <InventoryList /> }.into_any(),
        "a003_supplier" => view! { <SupplierList /> }.into_any(),
        "a004_unit" => view! { <UnitList /> }.into_any(),
        "a005_currency" => view! { <CurrencyList /> }.into_any(),
        "a006_item" => view! { <ItemList /> }.into_any(),
        "a007_invoice" => view! { <InvoiceList /> }.into_any(),
        "a008_inventory_count" => view! { <InventoryCountList /> }.into_any(),

        // Reports
        "r101_supplier_transactions" => view! { <SupplierTransactionsReport /> }.into_any(),
        "r102_cost_analysis" => view! { <CostAnalysisReport /> }.into_any(),
        "r103_item_movements" => view! { <ItemMovementsReport /> }.into_any(),
        "r104_stock_balance" => view! { <StockBalanceReport /> }.into_any(),

        // Invoice editor and viewer tabs carry their argument in the key
        _ => match parse_tab_key(key) {
            TabTarget::NewInvoice(invoice_type) => {
                view! { <InvoiceEditor invoice_type=invoice_type /> }.into_any()
            }
            TabTarget::InvoiceDetails(id) => view! { <InvoiceView id=id /> }.into_any(),
            TabTarget::Page(_) | TabTarget::Unknown => {
                log::warn!("no view registered for tab '{key}'");
                let i18n = use_i18n();
                view! { <div class="placeholder">{move || i18n.t("tabs.unknown")}</div> }
                    .into_any()
            }
        },
    }
}
