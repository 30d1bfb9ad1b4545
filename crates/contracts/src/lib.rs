//! Wire contracts shared between the storekeeper front-end and the REST backend.
//!
//! Every resource the UI reads or writes is described here as a serde DTO,
//! together with the client-side validation rules that run before submission.

pub mod domain;
pub mod reports;
pub mod shared;
pub mod system;
