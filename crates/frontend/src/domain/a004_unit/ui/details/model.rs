use contracts::domain::a004_unit::aggregate::Unit;

use crate::shared::api::resource::fetch_one;
use crate::shared::api::ApiError;

pub async fn fetch_unit(id: i64) -> Result<Unit, ApiError> {
    fetch_one::<Unit>(id).await
}
