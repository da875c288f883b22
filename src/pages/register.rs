//! Registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::toast::Notifier;
use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::auth::AuthState;
use crate::util::auth::{GuardedRoute, LOGIN_PATH, install_route_guard};
use crate::util::task;

pub const USERNAME_REQUIRED: &str = "请输入用户名";
pub const USERNAME_TOO_SHORT: &str = "用户名至少3个字符";
pub const PASSWORD_REQUIRED: &str = "请输入密码";
pub const PASSWORD_TOO_SHORT: &str = "密码至少6个字符";
pub const REGISTER_SUCCESS: &str = "注册成功，请登录";

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Check the form before `POST /auth/register`.
///
/// Lengths count characters, not bytes. A blank invite code is omitted from
/// the request.
///
/// # Errors
///
/// Returns the inline message for the first failing rule.
pub fn validate_register_input(username: &str, password: &str, invite_code: &str) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(USERNAME_REQUIRED);
    }
    if username.chars().count() < MIN_USERNAME_CHARS {
        return Err(USERNAME_TOO_SHORT);
    }
    if password.is_empty() {
        return Err(PASSWORD_REQUIRED);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    let invite_code = Some(invite_code.trim()).filter(|code| !code.is_empty()).map(str::to_owned);
    Ok(RegisterRequest { username: username.to_owned(), password: password.to_owned(), invite_code })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifier = expect_context::<Notifier>();
    let navigate = use_navigate();
    install_route_guard(auth, GuardedRoute::Register, navigate.clone());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let invite_code = RwSignal::new(String::new());
    let info = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&username.get(), &password.get(), &invite_code.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(Some(message));
                return;
            }
        };
        info.set(None);
        busy.set(true);

        let api = api.clone();
        let navigate = navigate.clone();
        task::spawn(async move {
            let result = api.register(&request).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    notifier.success(REGISTER_SUCCESS);
                    navigate(LOGIN_PATH, NavigateOptions::default());
                }
                Err(e) => notifier.error(e.to_string()),
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"注册"</h1>
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
                        autocomplete="new-password"
                        placeholder="密码"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="邀请码（可选）"
                        prop:value=move || invite_code.get()
                        on:input=move |ev| invite_code.set(event_target_value(&ev))
                    />
                    <Show when=move || info.get().is_some()>
                        <p class="form-error">{move || info.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "注册中..." } else { "注册" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "已有账号？"
                    <A href=LOGIN_PATH>"立即登录"</A>
                </p>
            </div>
        </div>
    }
}
