use std::collections::BTreeMap;

use contracts::shared::ErrorBody;

/// Failure of a backend call, already phrased for the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    #[error("{message}")]
    Validation {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classifies a non-2xx response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        match status {
            401 => ApiError::Unauthorized,
            422 => ApiError::Validation {
                message: parsed
                    .user_message()
                    .unwrap_or_else(|| "The given data was invalid.".to_string()),
                fields: parsed.errors,
            },
            _ => ApiError::Server {
                status,
                message: parsed
                    .user_message()
                    .unwrap_or_else(|| format!("Request failed with status {status}")),
            },
        }
    }

    /// First server-side message for a form field, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Validation { fields, .. } => fields
                .get(field)
                .and_then(|messages| messages.first())
                .map(String::as_str),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprocessable_entity_keeps_field_errors() {
        let err = ApiError::from_response(
            422,
            r#"{"message":"The code has already been taken.","errors":{"code":["The code has already been taken."]}}"#,
        );
        assert_eq!(err.to_string(), "The code has already been taken.");
        assert_eq!(err.field_error("code"), Some("The code has already been taken."));
        assert_eq!(err.field_error("name"), None);
    }

    #[test]
    fn unauthorized_ignores_body() {
        let err = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn server_error_without_json_gets_generic_message() {
        let err = ApiError::from_response(500, "<html>oops</html>");
        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: "Request failed with status 500".to_string()
            }
        );
    }

    #[test]
    fn server_error_surfaces_backend_message() {
        let err = ApiError::from_response(409, r#"{"message":"Insufficient stock for Flour"}"#);
        assert_eq!(err.to_string(), "Insufficient stock for Flour");
    }
}
