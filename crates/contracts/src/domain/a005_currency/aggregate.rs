use serde::{Deserialize, Serialize};

use crate::domain::common::{ApiResource, ResourceDto};
use crate::shared::validation::MSG_POSITIVE;
use crate::shared::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default = "unit_rate")]
    pub exchange_rate: f64,
    #[serde(default)]
    pub is_default: bool,
}

fn unit_rate() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub symbol: Option<String>,
    pub exchange_rate: f64,
    pub is_default: bool,
}

impl Default for CurrencyDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            symbol: None,
            exchange_rate: 1.0,
            is_default: false,
        }
    }
}

impl ApiResource for Currency {
    const COLLECTION: &'static str = "currencies";
    type Dto = CurrencyDto;

    fn id(&self) -> i64 {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }

    fn to_dto(&self) -> CurrencyDto {
        CurrencyDto {
            id: Some(self.id),
            code: self.code.clone(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            exchange_rate: self.exchange_rate,
            is_default: self.is_default,
        }
    }
}

impl ResourceDto for CurrencyDto {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("code", &self.code);
        errors.require_text("name", &self.name);
        if !(self.exchange_rate > 0.0) {
            errors.add("exchange_rate", MSG_POSITIVE);
        }
        errors.into_result()
    }
}

/// The currency invoices default to: the flagged one, else the first.
pub fn default_currency(currencies: &[Currency]) -> Option<&Currency> {
    currencies
        .iter()
        .find(|c| c.is_default)
        .or_else(|| currencies.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn currency(id: i64, code: &str, is_default: bool) -> Currency {
        Currency {
            id,
            code: code.into(),
            name: code.into(),
            symbol: None,
            exchange_rate: 1.0,
            is_default,
        }
    }

    #[test]
    fn default_currency_prefers_flag() {
        let list = vec![currency(1, "USD", false), currency(2, "SAR", true)];
        assert_eq!(default_currency(&list).map(|c| c.id), Some(2));
        assert_eq!(default_currency(&list[..1]).map(|c| c.id), Some(1));
        assert!(default_currency(&[]).is_none());
    }

    #[test]
    fn exchange_rate_must_be_positive() {
        let dto = CurrencyDto {
            code: "EUR".into(),
            name: "Euro".into(),
            exchange_rate: 0.0,
            ..CurrencyDto::default()
        };
        assert_eq!(
            dto.validate().unwrap_err().get("exchange_rate"),
            Some(MSG_POSITIVE)
        );
    }
}
