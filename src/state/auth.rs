//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the session gate, route guards and the home header. The status is
//! tri-state so the app can show a loading screen until the stored credential
//! has been checked against the server.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiClient;
use crate::net::types::User;

/// Outcome of verifying the stored credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Verification has not finished yet.
    #[default]
    Unknown,
    Authenticated,
    Anonymous,
}

/// Authentication state tracking the session status and current user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.status != AuthStatus::Unknown
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    /// Mark the session as signed in after a successful login.
    pub fn sign_in(&mut self) {
        self.status = AuthStatus::Authenticated;
    }

    /// Forget the session and the cached user.
    pub fn sign_out(&mut self) {
        self.status = AuthStatus::Anonymous;
        self.user = None;
    }
}

/// Verify the stored credential against `GET /auth/check`.
///
/// No stored token resolves to anonymous without a request. A failed check
/// removes the token.
pub async fn resolve_session(api: &ApiClient) -> AuthStatus {
    if !api.session().has_token() {
        return AuthStatus::Anonymous;
    }
    match api.check_auth().await {
        Ok(()) => AuthStatus::Authenticated,
        Err(e) => {
            log::info!("stored session rejected: {}", e.reason());
            api.session().clear();
            AuthStatus::Anonymous
        }
    }
}

/// Text shown in the header avatar: the last two characters of the username.
#[must_use]
pub fn avatar_text(username: Option<&str>) -> String {
    match username.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => {
            let chars: Vec<char> = name.chars().collect();
            chars[chars.len().saturating_sub(2)..].iter().collect()
        }
        None => "用户".to_owned(),
    }
}
