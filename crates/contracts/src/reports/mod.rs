//! Read-only operational reports served under `/report/*`.

pub mod period;
pub mod r101_supplier_transactions;
pub mod r102_cost_analysis;
pub mod r103_item_movements;
pub mod r104_stock_balance;

pub use period::ReportPeriod;
