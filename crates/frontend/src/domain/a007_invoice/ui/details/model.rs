//! Invoice Details - Model Layer

use contracts::domain::a007_invoice::aggregate::Invoice;

use crate::shared::api::client::{delete, get_data};
use crate::shared::api::ApiError;

pub async fn fetch_invoice(id: i64) -> Result<Invoice, ApiError> {
    get_data(&format!("/invoices/{id}")).await
}

pub async fn delete_invoice(id: i64) -> Result<(), ApiError> {
    delete(&format!("/invoices/{id}")).await
}
