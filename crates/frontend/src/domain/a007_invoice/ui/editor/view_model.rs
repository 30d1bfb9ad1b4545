//! Invoice Editor - ViewModel

use chrono::NaiveDate;
use contracts::domain::a007_invoice::aggregate::{InvoiceDetail, InvoiceDto};
use contracts::domain::a007_invoice::InvoiceType;
use contracts::domain::non_blank;
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;
use crate::shared::format::{format_number_with_decimals, parse_decimal};
use crate::shared::row_grid::pricing::{grand_total, line_total};
use crate::shared::row_grid::{GridHandle, GridNavigator, LineGrid};

/// Cell order of a line, which is also the keyboard order. Types without a
/// price column skip the price cell.
pub fn line_fields(invoice_type: InvoiceType) -> Vec<&'static str> {
    if invoice_type.has_price() {
        vec!["item_id", "unit_id", "quantity", "price"]
    } else {
        vec!["item_id", "unit_id", "quantity"]
    }
}

/// Price cell text for a derived unit price; empty when none is known.
pub fn price_text(price: Option<f64>) -> String {
    price
        .map(|p| format_number_with_decimals(p, 4))
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceLine {
    pub item_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub quantity: String,
    pub price: String,
}

impl InvoiceLine {
    pub fn is_blank(&self) -> bool {
        self.item_id.is_none() && self.quantity.trim().is_empty() && self.price.trim().is_empty()
    }

    /// Switches the unit. A derived price replaces the cell; without one the
    /// typed price stays.
    pub fn set_unit(&mut self, unit_id: Option<i64>, derived_price: Option<f64>) {
        self.unit_id = unit_id;
        if derived_price.is_some() {
            self.price = price_text(derived_price);
        }
    }

    pub fn quantity_value(&self) -> f64 {
        parse_decimal(&self.quantity).unwrap_or(0.0)
    }

    pub fn price_value(&self) -> f64 {
        parse_decimal(&self.price).unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        line_total(self.quantity_value(), self.price_value())
    }

    /// Unreadable prices become -1 so validation flags them instead of
    /// silently storing 0.
    pub fn to_detail(&self, with_price: bool) -> InvoiceDetail {
        let price = if !with_price || self.price.trim().is_empty() {
            0.0
        } else {
            parse_decimal(&self.price).unwrap_or(-1.0)
        };
        InvoiceDetail {
            item_id: self.item_id.unwrap_or(0),
            item_name: None,
            unit_id: self.unit_id.unwrap_or(0),
            unit_name: None,
            quantity: self.quantity_value(),
            price,
            total: None,
        }
    }
}

/// Σ quantity × price over `lines`.
pub fn invoice_total<'a>(lines: impl IntoIterator<Item = &'a InvoiceLine>) -> f64 {
    grand_total(
        lines
            .into_iter()
            .map(|l| (l.quantity_value(), l.price_value())),
    )
}

#[derive(Clone, Copy)]
pub struct InvoiceEditorVm {
    pub invoice_type: InvoiceType,
    pub date: RwSignal<NaiveDate>,
    pub inventory_id: RwSignal<Option<i64>>,
    pub to_inventory_id: RwSignal<Option<i64>>,
    pub supplier_id: RwSignal<Option<i64>>,
    pub currency_id: RwSignal<Option<i64>>,
    pub customer_name: RwSignal<String>,
    pub notes: RwSignal<String>,
    pub lines: GridHandle<InvoiceLine>,
    pub status: FormStatus,
}

impl InvoiceEditorVm {
    pub fn new(invoice_type: InvoiceType, date: NaiveDate) -> Self {
        let navigator = GridNavigator::new(
            format!("invoice-{}", invoice_type.path_segment()),
            line_fields(invoice_type),
        );
        Self {
            invoice_type,
            date: RwSignal::new(date),
            inventory_id: RwSignal::new(None),
            to_inventory_id: RwSignal::new(None),
            supplier_id: RwSignal::new(None),
            currency_id: RwSignal::new(None),
            customer_name: RwSignal::new(String::new()),
            notes: RwSignal::new(String::new()),
            lines: GridHandle::new(LineGrid::new(), navigator),
            status: FormStatus::new(),
        }
    }

    /// Running total; tracked.
    pub fn total(&self) -> f64 {
        self.lines.lines.with(|g| invoice_total(g.rows()))
    }

    pub fn line_count(&self) -> usize {
        self.lines.lines.with(|g| g.rows().filter(|l| !l.is_blank()).count())
    }

    pub fn build_dto(&self) -> InvoiceDto {
        let t = self.invoice_type;
        let mut dto = InvoiceDto::new(t, self.date.get_untracked());
        dto.inventory_id = self.inventory_id.get_untracked();
        if t.has_destination() {
            dto.to_inventory_id = self.to_inventory_id.get_untracked();
        }
        if t.requires_supplier() {
            dto.supplier_id = self.supplier_id.get_untracked();
        }
        if t.has_price() {
            dto.currency_id = self.currency_id.get_untracked();
        }
        if t.has_customer() {
            dto.customer_name = non_blank(&self.customer_name.get_untracked());
        }
        dto.notes = non_blank(&self.notes.get_untracked());
        dto.details = self
            .lines
            .filled_rows(InvoiceLine::is_blank)
            .iter()
            .map(|l| l.to_detail(t.has_price()))
            .collect();
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: i64, quantity: &str, price: &str) -> InvoiceLine {
        InvoiceLine {
            item_id: Some(item_id),
            unit_id: Some(1),
            quantity: quantity.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn price_cell_only_for_priced_types() {
        assert_eq!(line_fields(InvoiceType::Purchase).len(), 4);
        assert_eq!(line_fields(InvoiceType::Transfer), vec!["item_id", "unit_id", "quantity"]);
    }

    #[test]
    fn unit_without_derived_price_keeps_typed_price() {
        let mut typed = line(3, "2", "17.5");
        typed.set_unit(Some(2), None);
        assert_eq!(typed.unit_id, Some(2));
        assert_eq!(typed.price, "17.5");

        typed.set_unit(Some(4), Some(12.0));
        assert_eq!(typed.unit_id, Some(4));
        assert_eq!(typed.price, "12.0000");
    }

    #[test]
    fn total_sums_quantity_times_price() {
        let lines = vec![line(1, "2", "4.5"), line(2, "3", "1"), InvoiceLine::default()];
        assert_eq!(invoice_total(&lines), 12.0);
        assert_eq!(lines[0].total(), 9.0);
    }

    #[test]
    fn unpriced_types_send_zero_price() {
        let detail = line(5, "1", "99").to_detail(false);
        assert_eq!(detail.price, 0.0);
        assert_eq!(detail.item_id, 5);
    }

    #[test]
    fn unreadable_price_is_flagged_as_negative() {
        assert_eq!(line(5, "1", "abc").to_detail(true).price, -1.0);
        assert_eq!(line(5, "1", "").to_detail(true).price, 0.0);
    }

    #[test]
    fn blank_line_detection() {
        assert!(InvoiceLine::default().is_blank());
        assert!(!line(1, "", "").is_blank());
    }
}
