//! Item Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions (item, server-side ingredient pricing)
//! - view_model.rs: ItemDetailsVm, unit and ingredient grid rows
//! - view.rs: Main component ItemDetails
//! - units_grid.rs / ingredients_grid.rs: the two keyboard grids

mod ingredients_grid;
mod model;
mod units_grid;
mod view;
mod view_model;

pub use view::ItemDetails;
pub use view_model::ItemDetailsVm;
