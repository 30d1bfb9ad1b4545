//! CRUD calls shared by every `/{collection}` resource.

use contracts::domain::{ApiResource, ResourceDto};

use super::client;
use super::error::ApiError;

pub fn collection_path<R: ApiResource>() -> String {
    format!("/{}", R::COLLECTION)
}

pub fn member_path<R: ApiResource>(id: i64) -> String {
    format!("/{}/{}", R::COLLECTION, id)
}

/// Cache key of the full list of a resource; also the invalidation prefix.
pub fn list_key<R: ApiResource>() -> String {
    R::COLLECTION.to_string()
}

pub async fn fetch_all<R: ApiResource>() -> Result<Vec<R>, ApiError> {
    client::get_data(&collection_path::<R>()).await
}

pub async fn fetch_one<R: ApiResource>(id: i64) -> Result<R, ApiError> {
    client::get_data(&member_path::<R>(id)).await
}

/// Creates or updates depending on whether the form carries an id.
pub async fn save<R: ApiResource>(dto: &R::Dto) -> Result<R, ApiError> {
    match dto.id() {
        Some(id) => client::put_data(&member_path::<R>(id), dto).await,
        None => client::post_data(&collection_path::<R>(), dto).await,
    }
}

pub async fn remove<R: ApiResource>(id: i64) -> Result<(), ApiError> {
    client::delete(&member_path::<R>(id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::Category;
    use contracts::domain::a008_inventory_count::aggregate::InventoryCount;

    #[test]
    fn paths_follow_collection_name() {
        assert_eq!(collection_path::<Category>(), "/categories");
        assert_eq!(member_path::<InventoryCount>(12), "/inventory-counts/12");
        assert_eq!(list_key::<Category>(), "categories");
    }
}
