//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Home, login and register pages apply the same redirect table once the
//! session gate has resolved, so the rules live here rather than per page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, AuthStatus};

pub const HOME_PATH: &str = "/";
pub use crate::net::session::LOGIN_PATH;
pub const REGISTER_PATH: &str = "/register";

/// Routes gated by the session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardedRoute {
    Home,
    Login,
    Register,
}

/// Where `route` should send the user for `status`, if anywhere.
///
/// Nothing redirects while the session is still being verified.
#[must_use]
pub fn redirect_target(route: GuardedRoute, status: AuthStatus) -> Option<&'static str> {
    match (route, status) {
        (_, AuthStatus::Unknown)
        | (GuardedRoute::Home, AuthStatus::Authenticated)
        | (GuardedRoute::Login | GuardedRoute::Register, AuthStatus::Anonymous) => None,
        (GuardedRoute::Home, AuthStatus::Anonymous) => Some(LOGIN_PATH),
        (GuardedRoute::Login | GuardedRoute::Register, AuthStatus::Authenticated) => Some(HOME_PATH),
    }
}

/// Whether `route` renders its own content for `status`.
#[must_use]
pub fn renders(route: GuardedRoute, status: AuthStatus) -> bool {
    status != AuthStatus::Unknown && redirect_target(route, status).is_none()
}

/// Redirect away from `route` whenever the session state says it is off-limits.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, route: GuardedRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let status = auth.with(|state| state.status);
        if let Some(target) = redirect_target(route, status) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
