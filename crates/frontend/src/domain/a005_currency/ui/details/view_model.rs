//! Currency Details - ViewModel

use contracts::domain::a005_currency::aggregate::{Currency, CurrencyDto};
use contracts::domain::non_blank;
use leptos::prelude::*;

use crate::shared::form_utils::FormStatus;
use crate::shared::format::parse_decimal;

#[derive(Clone, Copy)]
pub struct CurrencyDetailsVm {
    pub id: RwSignal<Option<i64>>,
    pub code: RwSignal<String>,
    pub name: RwSignal<String>,
    pub symbol: RwSignal<String>,
    /// Raw text of the rate input.
    pub exchange_rate: RwSignal<String>,
    pub is_default: RwSignal<bool>,
    pub status: FormStatus,
}

impl CurrencyDetailsVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            code: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            symbol: RwSignal::new(String::new()),
            exchange_rate: RwSignal::new("1".to_string()),
            is_default: RwSignal::new(false),
            status: FormStatus::new(),
        }
    }

    pub fn load(&self, currency: Currency) {
        self.id.set(Some(currency.id));
        self.code.set(currency.code);
        self.name.set(currency.name);
        self.symbol.set(currency.symbol.unwrap_or_default());
        self.exchange_rate.set(currency.exchange_rate.to_string());
        self.is_default.set(currency.is_default);
    }

    /// An unreadable rate is sent as 0 so validation flags it.
    pub fn build_save_dto(&self) -> CurrencyDto {
        CurrencyDto {
            id: self.id.get_untracked(),
            code: self.code.get_untracked().trim().to_uppercase(),
            name: self.name.get_untracked().trim().to_string(),
            symbol: non_blank(&self.symbol.get_untracked()),
            exchange_rate: parse_decimal(&self.exchange_rate.get_untracked()).unwrap_or(0.0),
            is_default: self.is_default.get_untracked(),
        }
    }
}

impl Default for CurrencyDetailsVm {
    fn default() -> Self {
        Self::new()
    }
}
