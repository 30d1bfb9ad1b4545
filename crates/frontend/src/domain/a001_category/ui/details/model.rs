//! Category Details - Model Layer

use contracts::domain::a001_category::aggregate::Category;

use crate::shared::api::resource::fetch_one;
use crate::shared::api::ApiError;

pub async fn fetch_category(id: i64) -> Result<Category, ApiError> {
    fetch_one::<Category>(id).await
}
