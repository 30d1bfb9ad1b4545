//! Supplier Details - Model Layer

use contracts::domain::a003_supplier::aggregate::Supplier;

use crate::shared::api::resource::fetch_one;
use crate::shared::api::ApiError;

pub async fn fetch_supplier(id: i64) -> Result<Supplier, ApiError> {
    fetch_one::<Supplier>(id).await
}
