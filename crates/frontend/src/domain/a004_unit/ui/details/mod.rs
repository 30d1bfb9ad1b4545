//! Unit Details UI Module (MVVM Standard)
//!
//! - model.rs: API functions
//! - view_model.rs: UnitDetailsVm
//! - view.rs: UnitDetails

mod model;
mod view;
mod view_model;

pub use view::UnitDetails;
pub use view_model::UnitDetailsVm;
