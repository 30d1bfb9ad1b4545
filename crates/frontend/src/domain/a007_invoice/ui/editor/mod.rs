//! Invoice Editor UI Module
//!
//! Structure:
//! - model.rs: `POST /invoice/store/{type}`
//! - view_model.rs: InvoiceEditorVm, grid line rows, totals
//! - lines_grid.rs: keyboard line grid with item/unit/price cascades
//! - view.rs: Main component InvoiceEditor

mod lines_grid;
mod model;
mod view;
mod view_model;

pub use view::InvoiceEditor;
pub use view_model::{InvoiceEditorVm, InvoiceLine};
