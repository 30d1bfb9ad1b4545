pub mod client;
pub mod error;
pub mod resource;

pub use error::ApiError;
