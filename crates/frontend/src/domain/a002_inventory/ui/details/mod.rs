//! Inventory Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: InventoryDetailsVm with RwSignals
//! - view.rs: Main component InventoryDetails

mod model;
mod view;
mod view_model;

pub use view::InventoryDetails;
pub use view_model::InventoryDetailsVm;
