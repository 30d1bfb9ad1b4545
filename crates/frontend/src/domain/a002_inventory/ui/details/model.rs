//! Inventory Details - Model Layer

use contracts::domain::a002_inventory::aggregate::Inventory;

use crate::shared::api::resource::fetch_one;
use crate::shared::api::ApiError;

pub async fn fetch_inventory(id: i64) -> Result<Inventory, ApiError> {
    fetch_one::<Inventory>(id).await
}
