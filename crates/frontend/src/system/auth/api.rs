use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::client::{post_data, post_unit};
use crate::shared::api::ApiError;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    post_data("/login", &request).await
}

/// Revoke the current token on the backend
pub async fn logout() -> Result<(), ApiError> {
    post_unit("/logout", &serde_json::json!({})).await
}
