use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockBalanceQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockBalanceRow {
    pub item_id: i64,
    #[serde(default)]
    pub item_code: Option<String>,
    pub item_name: String,
    #[serde(default)]
    pub inventory_name: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub unit_cost: f64,
}

impl StockBalanceRow {
    pub fn value(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

pub fn total_value(rows: &[StockBalanceRow]) -> f64 {
    rows.iter().map(StockBalanceRow::value).sum()
}
