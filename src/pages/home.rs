//! Workshop home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. Owns the page chrome (side menu, header,
//! status tag, step bar) and mounts the work-status provider so status
//! polling only runs while a signed-in user is looking at the workshop.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::components::stages::StageOutlet;
use crate::components::work_provider::WorkProvider;
use crate::components::work_steps::WorkSteps;
use crate::net::api::ApiClient;
use crate::state::auth::{AuthState, avatar_text};
use crate::state::work::WorkContext;
use crate::util::auth::{GuardedRoute, install_route_guard, renders};
use crate::util::poll::{self, PollSlot};

/// Side-menu entries as `(key, label)`.
const MENU_ITEMS: [(&str, &str); 2] = [("corpus-workshop", "语料工坊"), ("corpus-filter", "语料筛选")];

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    install_route_guard(auth, GuardedRoute::Home, use_navigate());

    // Current user, once per sign-in. Failure leaves the header anonymous.
    let signed_in = Memo::new(move |_| auth.with(AuthState::is_authenticated));
    let user_slot = PollSlot::default();
    let effect_slot = user_slot.clone();
    let user_api = api.clone();
    Effect::new(move || {
        effect_slot.sync(signed_in.get(), || {
            let api = user_api.clone();
            poll::once(async move { api.fetch_current_user().await }, move |result| match result {
                Ok(user) => auth.update(|state| state.user = Some(user)),
                Err(e) => log::warn!("current user unavailable: {}", e.reason()),
            })
        });
    });
    on_cleanup(move || user_slot.clear());

    let active_menu = RwSignal::new(MENU_ITEMS[0].0);
    let username = move || auth.with(|state| state.user.as_ref().map(|user| user.username.clone()).unwrap_or_default());
    let avatar = move || auth.with(|state| avatar_text(state.user.as_ref().map(|user| user.username.as_str())));

    let on_sign_out = move |_| {
        auth.update(AuthState::sign_out);
        api.session().sign_out();
    };

    view! {
        <Show when=move || auth.with(|state| renders(GuardedRoute::Home, state.status))>
            <div class="home-layout">
                <nav class="side-menu">
                    {MENU_ITEMS
                        .into_iter()
                        .map(|(key, label)| {
                            view! {
                                <button
                                    class="side-menu__item"
                                    class:side-menu__item--active=move || active_menu.get() == key
                                    on:click=move |_| active_menu.set(key)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="home-main">
                    <header class="home-header">
                        <span class="home-header__name">{username}</span>
                        <span class="home-header__avatar">{avatar}</span>
                        <button class="btn btn--link" on:click=on_sign_out.clone()>
                            "退出登录"
                        </button>
                    </header>
                    <main class="home-content">
                        <WorkProvider>
                            <Workbench />
                        </WorkProvider>
                    </main>
                </div>
            </div>
        </Show>
    }
}

/// Title, status tag, step bar and the active stage view.
#[component]
fn Workbench() -> impl IntoView {
    let work = expect_context::<WorkContext>();
    let loading = move || work.state.with(|state| state.loading);
    let tag_class = move || work.state.with(|state| state.tone().class());
    let tag_label = move || work.state.with(|state| state.label().to_owned());
    let current_step = Signal::derive(move || work.state.with(|state| state.step_index()));

    view! {
        <div class="workbench">
            <h2 class="workbench__title">"语料工坊"</h2>
            <div class="workbench__status">
                <span>"当前状态："</span>
                <Show when=move || !loading() fallback=|| view! { <Spinner /> }>
                    <span class=tag_class>{tag_label}</span>
                </Show>
            </div>
            <WorkSteps current=current_step />
            <div class="workbench__stage">
                <Show when=move || !loading() fallback=|| view! { <Spinner label="加载中..." /> }>
                    <StageOutlet />
                </Show>
            </div>
        </div>
    }
}
