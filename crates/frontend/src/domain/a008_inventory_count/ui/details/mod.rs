//! Inventory Count Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: count, stock sheet and adjustment endpoints
//! - view_model.rs: InventoryCountDetailsVm, count sheet lines
//! - view.rs: Main component InventoryCountDetails

mod model;
mod view;
mod view_model;

pub use model::adjust_count;
pub use view::InventoryCountDetails;
