use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a007_invoice::InvoiceType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierTransactionsQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierTransaction {
    pub id: i64,
    pub date: NaiveDate,
    pub supplier_id: i64,
    pub supplier_name: String,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    #[serde(default)]
    pub invoice_number: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub balance: Option<f64>,
}

impl SupplierTransaction {
    /// Returns reduce what is owed to the supplier.
    pub fn signed_amount(&self) -> f64 {
        match self.invoice_type {
            InvoiceType::Return => -self.amount,
            _ => self.amount,
        }
    }
}

pub fn net_total(rows: &[SupplierTransaction]) -> f64 {
    rows.iter().map(SupplierTransaction::signed_amount).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_are_netted_against_purchases() {
        let rows: Vec<SupplierTransaction> = serde_json::from_str(
            r#"[
                {"id":1,"date":"2024-01-03","supplier_id":2,"supplier_name":"Acme","type":"purchase","amount":150.0},
                {"id":2,"date":"2024-01-09","supplier_id":2,"supplier_name":"Acme","type":"return","amount":40.0}
            ]"#,
        )
        .unwrap();
        assert_eq!(net_total(&rows), 110.0);
    }
}
