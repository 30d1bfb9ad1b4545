//! Built-in English strings, used when a catalog lacks a key or has not
//! loaded yet.

use std::collections::HashMap;

use once_cell::sync::Lazy;

const ENGLISH: &[(&str, &str)] = &[
    ("app.title", "Storekeeper"),
    ("auth.email", "Email"),
    ("auth.guest", "Guest"),
    ("auth.logout", "Sign out"),
    ("auth.password", "Password"),
    ("auth.sign_in", "Sign in"),
    ("auth.signing_in", "Signing in..."),

    ("common.cancel", "Cancel"),
    ("common.close", "Close"),
    ("common.confirm", "Confirm"),
    ("common.date", "Date"),
    ("common.delete", "Delete"),
    ("common.description", "Description"),
    ("common.edit", "Edit"),
    ("common.name", "Name"),
    ("common.new", "New"),
    ("common.notes", "Notes"),
    ("common.ok", "OK"),
    ("common.quantity", "Quantity"),
    ("common.refresh", "Refresh"),
    ("common.save", "Save"),
    ("common.saving", "Saving..."),
    ("common.select", "Select..."),
    ("common.view", "View"),

    ("dialog.confirm_title", "Please confirm"),
    ("dialog.error_title", "Something went wrong"),

    ("header.language", "Language"),
    ("header.theme", "Toggle theme"),
    ("header.toggle_sidebar", "Toggle navigation"),

    ("menu.group.references", "References"),
    ("menu.group.stock", "Stock"),
    ("menu.group.reports", "Reports"),
    ("menu.categories", "Categories"),
    ("menu.inventories", "Inventories"),
    ("menu.suppliers", "Suppliers"),
    ("menu.units", "Units"),
    ("menu.currencies", "Currencies"),
    ("menu.items", "Items"),
    ("menu.invoices", "Invoices"),
    ("menu.inventory_counts", "Inventory counts"),
    ("menu.supplier_transactions", "Supplier transactions"),
    ("menu.cost_analysis", "Cost analysis"),
    ("menu.item_movements", "Item movements"),
    ("menu.stock_balance", "Stock balance"),

    ("tabs.empty", "Open a page from the menu to get started."),
    ("tabs.invoice_details", "Invoice {id}"),
    ("tabs.new_invoice", "New {type} invoice"),
    ("tabs.unknown", "This page does not exist."),

    ("table.actions", "Actions"),
    ("table.confirm_delete", "Delete {name}?"),
    ("table.empty", "No records"),
    ("table.search", "Search..."),
    ("pagination.all", "All"),
    ("pagination.first", "First page"),
    ("pagination.last", "Last page"),
    ("pagination.next", "Next page"),
    ("pagination.previous", "Previous page"),
    ("pagination.range", "{from}-{to} of {total}"),
    ("grid.add_row", "Add row"),
    ("period.this_month", "This month"),
    ("period.previous_month", "Previous month"),

    ("category.new", "New category"),
    ("category.edit", "Edit category"),
    ("category.name", "Name"),
    ("category.parent", "Parent category"),
    ("category.no_parent", "No parent"),

    ("inventory.new", "New inventory"),
    ("inventory.edit", "Edit inventory"),
    ("inventory.name", "Name"),
    ("inventory.location", "Location"),
    ("inventory.is_active", "Active"),
    ("inventory.active", "Active"),
    ("inventory.inactive", "Inactive"),

    ("supplier.new", "New supplier"),
    ("supplier.edit", "Edit supplier"),
    ("supplier.name", "Name"),
    ("supplier.phone", "Phone"),
    ("supplier.email", "Email"),
    ("supplier.address", "Address"),
    ("supplier.tax_number", "Tax number"),

    ("unit.new", "New unit"),
    ("unit.edit", "Edit unit"),
    ("unit.name", "Name"),
    ("unit.symbol", "Symbol"),

    ("currency.new", "New currency"),
    ("currency.edit", "Edit currency"),
    ("currency.code", "Code"),
    ("currency.name", "Name"),
    ("currency.symbol", "Symbol"),
    ("currency.exchange_rate", "Exchange rate"),
    ("currency.is_default", "Default currency"),
    ("currency.default", "Default"),
    ("currency.make_default", "Make default"),

    ("item.new", "New item"),
    ("item.edit", "Edit item"),
    ("item.code", "Code"),
    ("item.name", "Name"),
    ("item.type", "Type"),
    ("item.all_types", "All types"),
    ("item.type.raw", "Raw"),
    ("item.type.produced", "Produced"),
    ("item.type.serviceable", "Serviceable"),
    ("item.category", "Category"),
    ("item.price", "Price"),
    ("item.cost", "Cost"),
    ("item.units", "Units"),
    ("item.unit", "Unit"),
    ("item.conversion_factor", "Conversion factor"),
    ("item.primary", "Primary"),
    ("item.default", "Default"),
    ("item.unit_price", "Unit price"),
    ("item.ingredients", "Ingredients"),
    ("item.ingredient", "Ingredient"),
    ("item.unit_cost", "Unit cost"),
    ("item.total_cost", "Total cost"),
    ("item.calculate", "Calculate"),

    ("invoice.number", "Number"),
    ("invoice.date", "Date"),
    ("invoice.type", "Type"),
    ("invoice.all_types", "All"),
    ("invoice.type.purchase", "Purchase"),
    ("invoice.type.sell", "Sell"),
    ("invoice.type.transfer", "Transfer"),
    ("invoice.type.waste", "Waste"),
    ("invoice.type.consumption", "Consumption"),
    ("invoice.type.manufacturing", "Manufacturing"),
    ("invoice.type.return", "Return"),
    ("invoice.type.goods", "Goods"),
    ("invoice.inventory", "Inventory"),
    ("invoice.from_inventory", "From inventory"),
    ("invoice.to_inventory", "To inventory"),
    ("invoice.supplier", "Supplier"),
    ("invoice.customer", "Customer"),
    ("invoice.counterparty", "Counterparty"),
    ("invoice.currency", "Currency"),
    ("invoice.notes", "Notes"),
    ("invoice.lines", "Lines"),
    ("invoice.item", "Item"),
    ("invoice.unit", "Unit"),
    ("invoice.price", "Price"),
    ("invoice.line_total", "Line total"),
    ("invoice.total", "Total"),
    ("invoice.line_count", "{count} lines"),
    ("invoice.line_count_label", "Lines"),
    ("invoice.not_found", "Invoice not found."),

    ("count.new", "New inventory count"),
    ("count.edit", "Edit inventory count"),
    ("count.date", "Date"),
    ("count.inventory", "Inventory"),
    ("count.status", "Status"),
    ("count.status.draft", "Draft"),
    ("count.status.completed", "Completed"),
    ("count.status.adjusted", "Adjusted"),
    ("count.notes", "Notes"),
    ("count.lines", "Lines"),
    ("count.differences", "Differences"),
    ("count.sheet", "Count sheet"),
    ("count.only_differences", "Only differences"),
    ("count.reload_stock", "Reload stock"),
    ("count.item", "Item"),
    ("count.unit", "Unit"),
    ("count.expected", "Expected"),
    ("count.counted", "Counted"),
    ("count.difference", "Difference"),
    ("count.difference_summary", "{count} lines differ from the books"),
    ("count.adjust", "Apply adjustment"),
    ("count.adjust_confirm", "Adjust stock for {count} lines? This cannot be undone."),

    ("report.run", "Run"),
    ("report.period", "Period"),
    ("report.date", "Date"),
    ("report.supplier", "Supplier"),
    ("report.all_suppliers", "All suppliers"),
    ("report.category", "Category"),
    ("report.all_categories", "All categories"),
    ("report.item", "Item"),
    ("report.all_items", "All items"),
    ("report.inventory", "Inventory"),
    ("report.all_inventories", "All inventories"),
    ("report.operation", "Operation"),
    ("report.amount", "Amount"),
    ("report.balance", "Balance"),
    ("report.code", "Code"),
    ("report.unit", "Unit"),
    ("report.unit_cost", "Unit cost"),
    ("report.total_cost", "Total cost"),
    ("report.share", "Share"),
    ("report.quantity_in", "In"),
    ("report.quantity_out", "Out"),
    ("report.net_quantity", "Net"),
    ("report.value", "Value"),
    ("report.row_count", "Rows"),
    ("report.net_total", "Net total"),
    ("report.total_value", "Total value"),
    ("report.negative_lines", "Negative lines"),

    ("validation.required", "This field is required"),
    ("validation.invalid_email", "Enter a valid email address"),
    ("validation.positive", "Must be greater than zero"),
    ("validation.non_negative", "Must not be negative"),
    ("validation.date_range", "The end date is before the start date"),
    ("validation.self_parent", "A category cannot be its own parent"),
    ("validation.item.no_units", "Add at least one unit"),
    ("validation.item.one_primary_unit", "Mark exactly one unit as primary"),
    ("validation.item.one_default_unit", "Mark exactly one unit as default"),
    ("validation.item.primary_factor", "The primary unit's factor must be 1"),
    ("validation.item.duplicate_unit", "Each unit may appear once"),
    ("validation.item.no_ingredients", "A produced item needs at least one ingredient"),
    ("validation.item.self_ingredient", "An item cannot be its own ingredient"),
    ("validation.invoice.no_lines", "Add at least one complete line"),
    ("validation.invoice.same_inventory", "Source and destination must differ"),
    ("validation.count.no_lines", "The count sheet is empty"),
];

static CATALOG: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENGLISH.iter().copied().collect());

pub fn english(key: &str) -> Option<&'static str> {
    CATALOG.get(key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        assert_eq!(CATALOG.len(), ENGLISH.len());
    }

    #[test]
    fn placeholders_survive_lookup() {
        assert_eq!(english("tabs.invoice_details"), Some("Invoice {id}"));
        assert_eq!(english("missing.key"), None);
    }
}
