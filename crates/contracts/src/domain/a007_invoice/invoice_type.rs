use serde::{Deserialize, Serialize};

/// Kind of stock document. Each kind is stored through its own endpoint,
/// `POST /invoice/store/{path_segment}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceType {
    #[default]
    Purchase,
    Sell,
    Transfer,
    Waste,
    Consumption,
    Manufacturing,
    Return,
    Goods,
}

impl InvoiceType {
    pub const ALL: [InvoiceType; 8] = [
        InvoiceType::Purchase,
        InvoiceType::Sell,
        InvoiceType::Transfer,
        InvoiceType::Waste,
        InvoiceType::Consumption,
        InvoiceType::Manufacturing,
        InvoiceType::Return,
        InvoiceType::Goods,
    ];

    pub fn path_segment(&self) -> &'static str {
        match self {
            InvoiceType::Purchase => "purchase",
            InvoiceType::Sell => "sell",
            InvoiceType::Transfer => "transfer",
            InvoiceType::Waste => "waste",
            InvoiceType::Consumption => "consumption",
            InvoiceType::Manufacturing => "manufacturing",
            InvoiceType::Return => "return",
            InvoiceType::Goods => "goods",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.path_segment() == segment)
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            InvoiceType::Purchase => "invoice.type.purchase",
            InvoiceType::Sell => "invoice.type.sell",
            InvoiceType::Transfer => "invoice.type.transfer",
            InvoiceType::Waste => "invoice.type.waste",
            InvoiceType::Consumption => "invoice.type.consumption",
            InvoiceType::Manufacturing => "invoice.type.manufacturing",
            InvoiceType::Return => "invoice.type.return",
            InvoiceType::Goods => "invoice.type.goods",
        }
    }

    pub fn requires_supplier(&self) -> bool {
        matches!(self, InvoiceType::Purchase | InvoiceType::Return)
    }

    pub fn has_destination(&self) -> bool {
        matches!(self, InvoiceType::Transfer)
    }

    pub fn has_customer(&self) -> bool {
        matches!(self, InvoiceType::Sell)
    }

    /// Whether lines carry a user-entered price. Stock movements without a
    /// counterparty are valued by the backend at cost.
    pub fn has_price(&self) -> bool {
        matches!(
            self,
            InvoiceType::Purchase | InvoiceType::Sell | InvoiceType::Return | InvoiceType::Goods
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_round_trip_for_every_type() {
        for t in InvoiceType::ALL {
            assert_eq!(InvoiceType::from_segment(t.path_segment()), Some(t));
        }
        assert_eq!(InvoiceType::from_segment("refund"), None);
    }

    #[test]
    fn header_requirements_follow_type() {
        assert!(InvoiceType::Purchase.requires_supplier());
        assert!(InvoiceType::Return.requires_supplier());
        assert!(!InvoiceType::Sell.requires_supplier());
        assert!(InvoiceType::Transfer.has_destination());
        assert!(!InvoiceType::Transfer.has_price());
        assert!(InvoiceType::Goods.has_price());
    }
}
