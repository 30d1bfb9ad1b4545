use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Success envelopes
// ============================================================================

/// Every backend response wraps its payload in `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `{ pagination: { total, current_page } }` style metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub total: usize,
    #[serde(default = "first_page")]
    pub current_page: usize,
    #[serde(default)]
    pub per_page: Option<usize>,
}

/// `{ meta: { total } }` style metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub total: usize,
    #[serde(default)]
    pub current_page: Option<usize>,
}

fn first_page() -> usize {
    1
}

/// A page of rows. Paginated endpoints disagree on where the total lives,
/// so both envelope styles are accepted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
}

impl<T> Paginated<T> {
    /// Total number of rows across all pages.
    ///
    /// Prefers `pagination.total`, then `meta.total`, then the rows on hand.
    pub fn total(&self) -> usize {
        self.pagination
            .as_ref()
            .map(|p| p.total)
            .or_else(|| self.meta.as_ref().map(|m| m.total))
            .unwrap_or(self.data.len())
    }

    /// 1-based page the backend actually served.
    pub fn current_page(&self) -> usize {
        self.pagination
            .as_ref()
            .map(|p| p.current_page)
            .or_else(|| self.meta.as_ref().and_then(|m| m.current_page))
            .unwrap_or(1)
    }
}

// ============================================================================
// Error body
// ============================================================================

/// Error payload: `{ message, errors: { field: [msg, ...] } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ErrorBody {
    /// The message worth showing to the user: the explicit one, else the
    /// first field error.
    pub fn user_message(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                self.errors
                    .values()
                    .flat_map(|msgs| msgs.iter())
                    .next()
                    .cloned()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn total_prefers_pagination_block() {
        let page: Paginated<Row> = serde_json::from_str(
            r#"{"data":[{"id":1},{"id":2}],"pagination":{"total":40,"current_page":3}}"#,
        )
        .unwrap();
        assert_eq!(page.total(), 40);
        assert_eq!(page.current_page(), 3);
        assert_eq!(page.data[1].id, 2);
    }

    #[test]
    fn total_falls_back_to_meta_then_rows() {
        let meta: Paginated<Row> =
            serde_json::from_str(r#"{"data":[{"id":1}],"meta":{"total":17}}"#).unwrap();
        assert_eq!(meta.total(), 17);
        assert_eq!(meta.current_page(), 1);

        let bare: Paginated<Row> = serde_json::from_str(r#"{"data":[{"id":1},{"id":5}]}"#).unwrap();
        assert_eq!(bare.total(), 2);
    }

    #[test]
    fn error_body_uses_first_field_error_when_message_blank() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"message":" ","errors":{"name":["The name field is required."]}}"#,
        )
        .unwrap();
        assert_eq!(
            body.user_message().as_deref(),
            Some("The name field is required.")
        );

        let empty = ErrorBody::default();
        assert!(empty.user_message().is_none());
    }
}
