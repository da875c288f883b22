//! Login page with username + password auth.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the bearer token through the session service and
//! flips the shared auth state; the route guard then keeps the user away from
//! this page until they sign out.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast::Notifier;
use crate::net::api::ApiClient;
use crate::net::types::Credentials;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardedRoute, REGISTER_PATH, install_route_guard};
use crate::util::task;

pub const USERNAME_REQUIRED: &str = "请输入用户名";
pub const PASSWORD_REQUIRED: &str = "请输入密码";
pub const LOGIN_SUCCESS: &str = "登录成功";

/// Check the form before `POST /auth/login`.
///
/// The username is trimmed; the password is sent as typed.
///
/// # Errors
///
/// Returns the inline message for the first missing field.
pub fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(USERNAME_REQUIRED);
    }
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = expect_context::<Notifier>();
    install_route_guard(auth, GuardedRoute::Login, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(Some(message));
                return;
            }
        };
        info.set(None);
        busy.set(true);

        let api = api.clone();
        task::spawn(async move {
            let result = api.login(&credentials).await;
            busy.set(false);
            match result {
                Ok(response) => {
                    api.session().store_token(&response.access_token);
                    notifier.success(LOGIN_SUCCESS);
                    // The route guard navigates home on this transition.
                    auth.update(AuthState::sign_in);
                }
                Err(e) => {
                    log::info!("login rejected: {}", e.reason());
                    notifier.error(e.to_string());
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"登录"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        placeholder="用户名"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="密码"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || info.get().is_some()>
                        <p class="form-error">{move || info.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "登录中..." } else { "登录" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "还没有账号？"
                    <A href=REGISTER_PATH>"立即注册"</A>
                </p>
            </div>
        </div>
    }
}
