//! Currency Details - Model Layer

use contracts::domain::a005_currency::aggregate::Currency;
use contracts::domain::ApiResource;

use crate::shared::api::resource::{fetch_one, save};
use crate::shared::api::ApiError;

pub async fn fetch_currency(id: i64) -> Result<Currency, ApiError> {
    fetch_one::<Currency>(id).await
}

/// Flags `currency` as the default; the backend clears the previous one.
pub async fn make_default(currency: &Currency) -> Result<Currency, ApiError> {
    let mut dto = currency.to_dto();
    dto.is_default = true;
    save::<Currency>(&dto).await
}
