use super::*;

#[test]
fn nothing_redirects_while_session_is_unknown() {
    for route in [GuardedRoute::Home, GuardedRoute::Login, GuardedRoute::Register] {
        assert_eq!(redirect_target(route, AuthStatus::Unknown), None);
        assert!(!renders(route, AuthStatus::Unknown));
    }
}

#[test]
fn anonymous_home_redirects_to_login() {
    assert_eq!(redirect_target(GuardedRoute::Home, AuthStatus::Anonymous), Some("/login"));
    assert!(!renders(GuardedRoute::Home, AuthStatus::Anonymous));
}

#[test]
fn authenticated_home_renders() {
    assert_eq!(redirect_target(GuardedRoute::Home, AuthStatus::Authenticated), None);
    assert!(renders(GuardedRoute::Home, AuthStatus::Authenticated));
}

#[test]
fn authenticated_login_and_register_redirect_home() {
    assert_eq!(redirect_target(GuardedRoute::Login, AuthStatus::Authenticated), Some("/"));
    assert_eq!(redirect_target(GuardedRoute::Register, AuthStatus::Authenticated), Some("/"));
}

#[test]
fn anonymous_login_and_register_render() {
    assert!(renders(GuardedRoute::Login, AuthStatus::Anonymous));
    assert!(renders(GuardedRoute::Register, AuthStatus::Anonymous));
}
