pub mod aggregate;
pub mod pricing;
