//! Invoice Details UI Module
//!
//! Stored invoices are immutable; this is a read-only view.
//!
//! Structure:
//! - model.rs: show / delete endpoints
//! - view.rs: Main component InvoiceView

mod model;
mod view;

pub use model::{delete_invoice, fetch_invoice};
pub use view::InvoiceView;
