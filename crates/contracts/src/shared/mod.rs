pub mod envelope;
pub mod query;
pub mod validation;

pub use envelope::{ApiEnvelope, ErrorBody, PageMeta, Paginated, PaginationInfo};
pub use query::{ListQuery, SortDirection};
pub use validation::{ValidationErrors, MSG_REQUIRED};
