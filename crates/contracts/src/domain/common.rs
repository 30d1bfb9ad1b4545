use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::ValidationErrors;

/// A backend-managed collection reachable under `/{COLLECTION}`.
///
/// `Self` is the read model returned by the backend, `Dto` is the form body
/// sent on create (`POST /{COLLECTION}`) and update (`PUT /{COLLECTION}/{id}`).
pub trait ApiResource: Clone + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
    type Dto: ResourceDto + Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static;

    fn id(&self) -> i64;

    /// Human label used in pickers and confirmation prompts.
    fn display_name(&self) -> String;

    fn to_dto(&self) -> Self::Dto;
}

/// Form body of an [`ApiResource`].
pub trait ResourceDto {
    fn id(&self) -> Option<i64>;

    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_edit_mode(&self) -> bool {
        self.id().is_some()
    }
}

/// Optional text: blank input is sent as `null`.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank("  Main store "), Some("Main store".to_string()));
        assert_eq!(non_blank("   "), None);
    }
}
