//! Work-status provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Polls `GET /work/status` while mounted and publishes a [`WorkContext`] to
//! descendants. Stage views key their own polls off this status, and the idle
//! view calls `refresh` after starting a run so the page advances without
//! waiting for the next tick.

use leptos::prelude::*;

use crate::components::toast::Notifier;
use crate::config::ClientConfig;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::WorkStatusResponse;
use crate::state::work::{WorkContext, WorkState};
use crate::util::{poll, task};

#[component]
pub fn WorkProvider(children: Children) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    let notifier = expect_context::<Notifier>();
    let state = RwSignal::new(WorkState::default());

    let apply = move |result: Result<WorkStatusResponse, ApiError>| {
        let mut error = None;
        state.maybe_update(|current| {
            let outcome = current.apply(result);
            error = outcome.error;
            outcome.changed
        });
        if let Some(message) = error {
            log::warn!("work status poll failed: {message}");
            notifier.error(message);
        }
    };

    let poll_api = api.clone();
    let guard = poll::start(
        config.status_poll,
        move || {
            let api = poll_api.clone();
            async move { api.fetch_work_status().await }
        },
        apply,
    );

    // Manual refreshes share the poll's sequence so an older tick cannot
    // overwrite a fresher refresh result.
    let refresh_guard = guard.clone();
    let refresh = Callback::new(move |()| {
        let api = api.clone();
        if let Some(fetch) = poll::guarded(&refresh_guard, async move { api.fetch_work_status().await }, apply) {
            task::spawn(fetch);
        }
    });

    on_cleanup(move || guard.cancel());
    provide_context(WorkContext { state, refresh });

    children()
}
