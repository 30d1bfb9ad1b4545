//! Invoice Editor - Model Layer

use contracts::domain::a007_invoice::aggregate::{Invoice, InvoiceDto};

use crate::shared::api::client::post_data;
use crate::shared::api::ApiError;

/// Stores a new invoice through its type's endpoint.
pub async fn store_invoice(dto: &InvoiceDto) -> Result<Invoice, ApiError> {
    let path = format!("/invoice/store/{}", dto.invoice_type.path_segment());
    post_data(&path, dto).await
}
