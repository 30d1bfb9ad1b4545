use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a007_invoice::InvoiceType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMovementsQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMovement {
    pub id: i64,
    pub date: NaiveDate,
    pub item_id: i64,
    pub item_name: String,
    #[serde(default)]
    pub inventory_name: Option<String>,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    #[serde(default)]
    pub quantity_in: f64,
    #[serde(default)]
    pub quantity_out: f64,
    #[serde(default)]
    pub balance: Option<f64>,
}

impl ItemMovement {
    pub fn net_quantity(&self) -> f64 {
        self.quantity_in - self.quantity_out
    }
}

/// Summed `(in, out)` quantities.
pub fn movement_totals(rows: &[ItemMovement]) -> (f64, f64) {
    rows.iter()
        .fold((0.0, 0.0), |(i, o), r| (i + r.quantity_in, o + r.quantity_out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_split_in_and_out() {
        let rows: Vec<ItemMovement> = serde_json::from_str(
            r#"[
                {"id":1,"date":"2024-05-02","item_id":7,"item_name":"Flour","type":"purchase","quantity_in":25.0},
                {"id":2,"date":"2024-05-03","item_id":7,"item_name":"Flour","type":"consumption","quantity_out":4.5}
            ]"#,
        )
        .unwrap();
        assert_eq!(movement_totals(&rows), (25.0, 4.5));
        assert_eq!(rows[1].net_quantity(), -4.5);
    }
}
