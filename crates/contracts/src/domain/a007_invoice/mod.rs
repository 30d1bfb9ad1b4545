pub mod aggregate;
pub mod invoice_type;

pub use invoice_type::InvoiceType;
