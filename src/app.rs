//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::spinner::Spinner;
use crate::components::toast::{Notifier, Toasts};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::http::default_transport;
use crate::net::session::Session;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::{AuthState, resolve_session};
use crate::state::notice::NoticeState;
use crate::util::task;

/// Root application component.
///
/// Provides the shared client, auth and notice contexts, verifies any stored
/// session, and holds routing behind a full-page spinner until that check
/// resolves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::new(config.clone(), default_transport(), Session::for_environment());
    let auth = RwSignal::new(AuthState::default());
    let notifier = Notifier::new(RwSignal::new(NoticeState::default()), config.notice_lifetime);
    log::info!("workshop client using API at {}", config.api_base);

    provide_context(config);
    provide_context(api.clone());
    provide_context(auth);
    provide_context(notifier);

    task::spawn(async move {
        let status = resolve_session(&api).await;
        auth.update(|state| state.status = status);
    });

    view! {
        <Title text="语料工坊"/>
        <Toasts/>

        <Show
            when=move || auth.with(AuthState::is_resolved)
            fallback=|| view! { <Spinner full_page=true /> }
        >
            <Router>
                <Routes fallback=|| "页面不存在".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </Router>
        </Show>
    }
}
