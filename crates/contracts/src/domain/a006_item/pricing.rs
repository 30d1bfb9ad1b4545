//! Wire types for item pricing: the cached price table and the backend's
//! ingredient cost calculation (`POST /items/calculate-pricing`).

use serde::{Deserialize, Serialize};

/// Base price of an item, expressed in its primary unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPrice {
    pub item_id: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingLine {
    pub item_id: i64,
    pub unit_id: i64,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub ingredients: Vec<PricingLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedIngredient {
    pub item_id: i64,
    pub unit_id: i64,
    pub quantity: f64,
    pub unit_cost: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResponse {
    pub ingredients: Vec<PricedIngredient>,
    pub total_cost: f64,
}

impl PricingResponse {
    pub fn cost_for(&self, item_id: i64, unit_id: i64) -> Option<&PricedIngredient> {
        self.ingredients
            .iter()
            .find(|p| p.item_id == item_id && p.unit_id == unit_id)
    }
}
