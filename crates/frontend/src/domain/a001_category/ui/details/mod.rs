//! Category Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: CategoryDetailsVm with RwSignals
//! - view.rs: Main component CategoryDetails

mod model;
mod view;
mod view_model;

pub use view::CategoryDetails;
pub use view_model::CategoryDetailsVm;
