use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::api::client::set_unauthorized_handler;
use crate::shared::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    /// Session persisted by a previous visit, if any.
    pub fn restore() -> Self {
        match storage::get_token() {
            Some(token) => Self {
                token: Some(token),
                user: storage::get_user(),
            },
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::restore());

    // An expired or revoked token ends the session wherever it is noticed.
    set_unauthorized_handler(move || {
        log::warn!("session rejected by backend, signing out");
        storage::clear_session();
        set_auth_state.set(AuthState::default());
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let response = api::login(email, password).await?;
    storage::save_session(&response.token, &response.user);
    log::info!("signed in as {}", response.user.email);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user: Some(response.user),
    });
    Ok(())
}

/// Helper: Perform logout. The backend call is best effort; the local
/// session is cleared regardless.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Err(e) = api::logout().await {
        log::warn!("logout request failed: {e}");
    }
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_needs_a_token() {
        let state = AuthState {
            token: Some("t".into()),
            user: None,
        };
        assert!(state.is_authenticated());
        assert!(!AuthState::default().is_authenticated());
    }
}
