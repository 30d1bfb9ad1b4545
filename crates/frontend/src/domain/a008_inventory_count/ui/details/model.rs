//! Inventory Count Details - Model Layer

use contracts::domain::a008_inventory_count::aggregate::{InventoryCount, StockLine};

use crate::shared::api::client::{get_data, post_unit};
use crate::shared::api::resource::fetch_one;
use crate::shared::api::ApiError;

pub async fn fetch_count(id: i64) -> Result<InventoryCount, ApiError> {
    fetch_one::<InventoryCount>(id).await
}

/// Book quantities of every item held in `inventory_id`.
pub async fn fetch_stock(inventory_id: i64) -> Result<Vec<StockLine>, ApiError> {
    get_data(&format!("/inventories/{inventory_id}/stock")).await
}

/// Posts the count's differences back to stock.
pub async fn adjust_count(id: i64) -> Result<(), ApiError> {
    post_unit(&format!("/inventory-counts/{id}/adjust"), &()).await
}
