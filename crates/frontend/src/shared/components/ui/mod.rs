pub mod badge;
pub mod checkbox;

pub use badge::{Badge, BadgeVariant};
pub use checkbox::Checkbox;
