use contracts::system::auth::UserInfo;

use crate::shared::local_storage;

const TOKEN_KEY: &str = "auth_token";
const USER_KEY: &str = "auth_user";

/// Save token and user after a successful login
pub fn save_session(token: &str, user: &UserInfo) {
    local_storage::set_item(TOKEN_KEY, token);
    local_storage::set_json(USER_KEY, user);
}

/// Bearer token for API requests
pub fn get_token() -> Option<String> {
    local_storage::get_item(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn get_user() -> Option<UserInfo> {
    local_storage::get_json(USER_KEY)
}

/// Clear everything the session stored
pub fn clear_session() {
    local_storage::remove_item(TOKEN_KEY);
    local_storage::remove_item(USER_KEY);
}
