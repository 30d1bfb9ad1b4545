//! Tab labels: the one place that maps a tab key to its title.

use contracts::domain::a007_invoice::InvoiceType;

use crate::shared::i18n::I18nContext;

pub const INVOICE_NEW_PREFIX: &str = "a007_invoice_new_";
pub const INVOICE_DETAILS_PREFIX: &str = "a007_invoice_details_";

/// Translation key of a list/report tab.
pub fn tab_label_for_key(key: &str) -> Option<&'static str> {
    let label = match key {
        "a001_category" => "menu.categories",
        "a002_inventory" => "menu.inventories",
        "a003_supplier" => "menu.suppliers",
        "a004_unit" => "menu.units",
        "a005_currency" => "menu.currencies",
        "a006_item" => "menu.items",
        "a007_invoice" => "menu.invoices",
        "a008_inventory_count" => "menu.inventory_counts",
        "r101_supplier_transactions" => "menu.supplier_transactions",
        "r102_cost_analysis" => "menu.cost_analysis",
        "r103_item_movements" => "menu.item_movements",
        "r104_stock_balance" => "menu.stock_balance",
        _ => return None,
    };
    Some(label)
}

/// What a tab key opens, parsed from the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabTarget {
    Page(&'static str),
    NewInvoice(InvoiceType),
    InvoiceDetails(i64),
    Unknown,
}

pub fn parse_tab_key(key: &str) -> TabTarget {
    if let Some(label) = tab_label_for_key(key) {
        return TabTarget::Page(label);
    }
    if let Some(ty) = key
        .strip_prefix(INVOICE_NEW_PREFIX)
        .and_then(InvoiceType::from_segment)
    {
        return TabTarget::NewInvoice(ty);
    }
    if let Some(id) = key
        .strip_prefix(INVOICE_DETAILS_PREFIX)
        .and_then(|id| id.parse().ok())
    {
        return TabTarget::InvoiceDetails(id);
    }
    TabTarget::Unknown
}

pub fn invoice_new_key(invoice_type: InvoiceType) -> String {
    format!("{INVOICE_NEW_PREFIX}{}", invoice_type.path_segment())
}

pub fn invoice_details_key(id: i64) -> String {
    format!("{INVOICE_DETAILS_PREFIX}{id}")
}

/// Title shown on the tab strip; reactive on language.
pub fn tab_title(key: &str, fallback: &str, i18n: &I18nContext) -> String {
    match parse_tab_key(key) {
        TabTarget::Page(label) => i18n.t(label),
        TabTarget::NewInvoice(ty) => {
            let kind = i18n.t(ty.label_key());
            i18n.t_with("tabs.new_invoice", &[("type", &kind)])
        }
        TabTarget::InvoiceDetails(id) => {
            i18n.t_with("tabs.invoice_details", &[("id", &id.to_string())])
        }
        TabTarget::Unknown => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_page_and_invoice_keys() {
        assert_eq!(
            parse_tab_key("a006_item"),
            TabTarget::Page("menu.items")
        );
        assert_eq!(
            parse_tab_key(&invoice_new_key(InvoiceType::Transfer)),
            TabTarget::NewInvoice(InvoiceType::Transfer)
        );
        assert_eq!(
            parse_tab_key(&invoice_details_key(42)),
            TabTarget::InvoiceDetails(42)
        );
        assert_eq!(parse_tab_key("a007_invoice_new_gift"), TabTarget::Unknown);
        assert_eq!(parse_tab_key("a007_invoice_details_x"), TabTarget::Unknown);
    }
}
