//! Supplier Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: SupplierDetailsVm with RwSignals
//! - view.rs: Main component SupplierDetails

mod model;
mod view;
mod view_model;

pub use view::SupplierDetails;
pub use view_model::SupplierDetailsVm;
