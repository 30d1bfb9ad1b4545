//! Currency Details UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions
//! - view_model.rs: CurrencyDetailsVm with RwSignals
//! - view.rs: Main component CurrencyDetails

mod model;
mod view;
mod view_model;

pub use model::make_default;
pub use view::CurrencyDetails;
pub use view_model::CurrencyDetailsVm;
