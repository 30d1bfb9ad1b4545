use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::InvoiceType;
use crate::shared::validation::{line_field, MSG_NON_NEGATIVE, MSG_POSITIVE, MSG_REQUIRED};
use crate::shared::{ListQuery, SortDirection, ValidationErrors};

pub const MSG_NO_LINES: &str = "validation.invoice.no_lines";
pub const MSG_SAME_INVENTORY: &str = "validation.invoice.same_inventory";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDetail {
    pub item_id: i64,
    #[serde(default)]
    pub item_name: Option<String>,
    pub unit_id: i64,
    #[serde(default)]
    pub unit_name: Option<String>,
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub total: Option<f64>,
}

impl InvoiceDetail {
    pub fn line_total(&self) -> f64 {
        self.total.unwrap_or(self.quantity * self.price)
    }
}

/// Invoice as listed/shown by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    #[serde(default)]
    pub number: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub inventory_id: Option<i64>,
    #[serde(default)]
    pub inventory_name: Option<String>,
    #[serde(default)]
    pub to_inventory_id: Option<i64>,
    #[serde(default)]
    pub to_inventory_name: Option<String>,
    #[serde(default)]
    pub supplier_id: Option<i64>,
    #[serde(default)]
    pub supplier_name: Option<String>,
    #[serde(default)]
    pub currency_id: Option<i64>,
    #[serde(default)]
    pub currency_code: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub details: Vec<InvoiceDetail>,
    #[serde(default)]
    pub total: Option<f64>,
}

impl Invoice {
    pub fn total_amount(&self) -> f64 {
        self.total
            .unwrap_or_else(|| self.details.iter().map(InvoiceDetail::line_total).sum())
    }

    /// Counterparty shown in lists: supplier, customer or destination store.
    pub fn counterparty(&self) -> Option<&str> {
        self.supplier_name
            .as_deref()
            .or(self.customer_name.as_deref())
            .or(self.to_inventory_name.as_deref())
    }
}

/// Body of `POST /invoice/store/{type}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDto {
    #[serde(rename = "type")]
    pub invoice_type: InvoiceType,
    pub date: NaiveDate,
    pub inventory_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_inventory_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub details: Vec<InvoiceDetail>,
}

impl InvoiceDto {
    pub fn new(invoice_type: InvoiceType, date: NaiveDate) -> Self {
        Self {
            invoice_type,
            date,
            inventory_id: None,
            to_inventory_id: None,
            supplier_id: None,
            currency_id: None,
            customer_name: None,
            notes: None,
            details: Vec::new(),
        }
    }

    pub fn total(&self) -> f64 {
        self.details.iter().map(|d| d.quantity * d.price).sum()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require("inventory_id", &self.inventory_id);

        if self.invoice_type.requires_supplier() {
            errors.require("supplier_id", &self.supplier_id);
        }
        if self.invoice_type.has_destination() {
            errors.require("to_inventory_id", &self.to_inventory_id);
            if self.to_inventory_id.is_some() && self.to_inventory_id == self.inventory_id {
                errors.add("to_inventory_id", MSG_SAME_INVENTORY);
            }
        }

        if self.details.is_empty() {
            errors.add("details", MSG_NO_LINES);
        }
        for (index, line) in self.details.iter().enumerate() {
            if line.item_id <= 0 {
                errors.add(line_field("details", index, "item_id"), MSG_REQUIRED);
            }
            if line.unit_id <= 0 {
                errors.add(line_field("details", index, "unit_id"), MSG_REQUIRED);
            }
            if !(line.quantity > 0.0) {
                errors.add(line_field("details", index, "quantity"), MSG_POSITIVE);
            }
            if self.invoice_type.has_price() && line.price < 0.0 {
                errors.add(line_field("details", index, "price"), MSG_NON_NEGATIVE);
            }
        }
        errors.into_result()
    }
}

/// Query string of `GET /invoices`: a list query narrowed to one type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceListQuery {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub invoice_type: Option<InvoiceType>,
    pub page: usize,
    pub per_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl InvoiceListQuery {
    pub fn new(invoice_type: Option<InvoiceType>, list: ListQuery) -> Self {
        Self {
            invoice_type,
            page: list.page,
            per_page: list.per_page,
            sort_by: list.sort_by,
            sort_dir: list.sort_dir,
            search: list.search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn line(item_id: i64, quantity: f64, price: f64) -> InvoiceDetail {
        InvoiceDetail {
            item_id,
            item_name: None,
            unit_id: 1,
            unit_name: None,
            quantity,
            price,
            total: None,
        }
    }

    #[test]
    fn purchase_requires_supplier_and_lines() {
        let mut dto = InvoiceDto::new(InvoiceType::Purchase, date());
        dto.inventory_id = Some(1);
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("supplier_id"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("details"), Some(MSG_NO_LINES));

        dto.supplier_id = Some(3);
        dto.details.push(line(7, 2.0, 4.5));
        assert!(dto.validate().is_ok());
        assert_eq!(dto.total(), 9.0);
    }

    #[test]
    fn transfer_needs_distinct_destination() {
        let mut dto = InvoiceDto::new(InvoiceType::Transfer, date());
        dto.inventory_id = Some(1);
        dto.to_inventory_id = Some(1);
        dto.details.push(line(7, 1.0, 0.0));
        assert_eq!(
            dto.validate().unwrap_err().get("to_inventory_id"),
            Some(MSG_SAME_INVENTORY)
        );
    }

    #[test]
    fn line_errors_are_keyed_by_index() {
        let mut dto = InvoiceDto::new(InvoiceType::Sell, date());
        dto.inventory_id = Some(1);
        dto.details.push(line(7, 1.0, 2.0));
        dto.details.push(line(0, 0.0, -1.0));
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.get("details.1.item_id"), Some(MSG_REQUIRED));
        assert_eq!(errors.get("details.1.quantity"), Some(MSG_POSITIVE));
        assert_eq!(errors.get("details.1.price"), Some(MSG_NON_NEGATIVE));
        assert!(errors.get("details.0.item_id").is_none());
    }

    #[test]
    fn list_query_names_the_type_field() {
        let query = InvoiceListQuery::new(Some(InvoiceType::Return), ListQuery::default());
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["type"], "return");
        assert_eq!(json["page"], 1);
        assert!(json.get("sort_by").is_none());

        let all = InvoiceListQuery::new(None, ListQuery::default());
        assert!(serde_json::to_value(&all).unwrap().get("type").is_none());
    }

    #[test]
    fn store_body_uses_type_field_and_iso_date() {
        let dto = InvoiceDto::new(InvoiceType::Waste, date());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "waste");
        assert_eq!(json["date"], "2024-05-02");
        assert!(json.get("supplier_id").is_none());
    }
}
