//! Item Details - Model Layer

use contracts::domain::a006_item::aggregate::Item;
use contracts::domain::a006_item::pricing::{PricingRequest, PricingResponse};

use crate::shared::api::client::post_data;
use crate::shared::api::resource::fetch_one;
use crate::shared::api::ApiError;

pub async fn fetch_item(id: i64) -> Result<Item, ApiError> {
    fetch_one::<Item>(id).await
}

/// Authoritative ingredient costs computed by the backend.
pub async fn calculate_pricing(request: &PricingRequest) -> Result<PricingResponse, ApiError> {
    post_data("/items/calculate-pricing", request).await
}
