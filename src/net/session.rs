//! Bearer-credential session with injectable storage and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client consults the session for the token on every authorized call
//! and asks it to expire the login when any response comes back 401. Browser
//! builds persist the token in `localStorage` and navigate via
//! `window.location`; native builds and tests use the in-memory collaborators.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Route the user is sent to when the session ends.
pub const LOGIN_PATH: &str = "/login";

/// Notice logged when the server rejects the stored credential.
pub const SESSION_EXPIRED_MESSAGE: &str = "登录已过期，请重新登录";

/// Persistent home of the bearer credential.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// Performs top-level navigation outside the router.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Shared handle to the current login.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("has_token", &self.has_token()).finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    /// Session wired to the environment the crate was built for.
    #[must_use]
    pub fn for_environment() -> Self {
        #[cfg(feature = "csr")]
        {
            Self::new(Arc::new(LocalStorageTokenStore), Arc::new(LocationNavigator))
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::new(Arc::new(MemoryTokenStore::default()), Arc::new(RecordingNavigator::default()))
        }
    }

    /// Stored token, ignoring empty values.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    pub fn store_token(&self, token: &str) {
        self.store.set(token);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Drop the credential after the server rejected it and return to login.
    pub fn expire(&self) {
        self.store.clear();
        log::warn!("{SESSION_EXPIRED_MESSAGE}");
        self.navigator.navigate(LOGIN_PATH);
    }

    /// User-initiated logout.
    pub fn sign_out(&self) {
        self.store.clear();
        log::info!("signed out");
        self.navigator.navigate(LOGIN_PATH);
    }
}

/// Token store backed by `window.localStorage`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        let Some(storage) = local_storage() else {
            return;
        };
        if storage.set_item(TOKEN_KEY, token).is_err() {
            log::warn!("failed to persist session token");
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Navigator that performs a full page load via `window.location`.
///
/// Already being on `path` is a no-op, so a rejected login does not reload
/// the login page and wipe its error toast.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

#[cfg(feature = "csr")]
impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().is_ok_and(|current| current == path) {
            return;
        }
        let _ = location.set_href(path);
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Navigator that records requested paths instead of leaving the page.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Paths navigated to, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_owned());
    }
}
