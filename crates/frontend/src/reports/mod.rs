//! Read-only reports: a filter bar, a Run button, a client-side table and
//! totals underneath.

pub mod r101_supplier_transactions;
pub mod r102_cost_analysis;
pub mod r103_item_movements;
pub mod r104_stock_balance;
pub mod report_run;
