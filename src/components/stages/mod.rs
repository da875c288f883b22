//! Per-stage views rendered under the step bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! `StageOutlet` picks exactly one view from the shared work status. Each view
//! owns its snapshot signal and polls its endpoint only while the shared
//! status equals its stage; switching stages or unmounting cancels the poll
//! and discards any in-flight response.

pub mod answering;
pub mod evaluating;
pub mod generating;
pub mod grading;
pub mod idle;
pub mod tuning;

use std::future::Future;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::spinner::Spinner;
use crate::config::ClientConfig;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::WorkStatus;
use crate::state::stage::{StageView, should_replace};
use crate::state::work::WorkContext;
use crate::util::poll::{self, PollSlot};

/// Renders the view for the current status, or a spinner before the first fetch.
#[component]
pub fn StageOutlet() -> impl IntoView {
    let work = expect_context::<WorkContext>();
    let view_kind = Memo::new(move |_| work.state.with(|state| state.status.map(StageView::for_status)));

    move || match view_kind.get() {
        None => view! { <Spinner label="加载中..." /> }.into_any(),
        Some(StageView::Idle) => view! { <idle::IdleStage /> }.into_any(),
        Some(StageView::Generating) => view! { <generating::GeneratingStage /> }.into_any(),
        Some(StageView::Answering) => view! { <answering::AnsweringStage /> }.into_any(),
        Some(StageView::Grading) => view! { <grading::GradingStage /> }.into_any(),
        Some(StageView::Tuning) => view! { <tuning::TuningStage /> }.into_any(),
        Some(StageView::Evaluating) => view! { <evaluating::EvaluatingStage /> }.into_any(),
    }
}

/// Title and caption shared by every stage view.
#[component]
pub fn StageHeader(view_kind: StageView) -> impl IntoView {
    view! {
        <div class="stage__header">
            <h3 class="stage__title">{view_kind.title()}</h3>
            <p class="stage__subtitle">{view_kind.subtitle()}</p>
        </div>
    }
}

/// True while the shared status equals `stage`.
pub fn use_stage_active(stage: WorkStatus) -> Memo<bool> {
    let work = expect_context::<WorkContext>();
    Memo::new(move |_| work.state.with(|state| state.status == Some(stage)))
}

/// Poll `fetch` every stage interval while `stage` is active.
///
/// Successful responses replace `snapshot` unless equal to it; failures are
/// logged and the previous snapshot stays on screen.
pub fn use_stage_poll<T, Fetch, Fut>(stage: WorkStatus, snapshot: RwSignal<Option<T>>, fetch: Fetch)
where
    T: PartialEq + Send + Sync + 'static,
    Fetch: Fn(ApiClient) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let api = expect_context::<ApiClient>();
    let config = expect_context::<ClientConfig>();
    let active = use_stage_active(stage);
    let slot = PollSlot::default();

    let effect_slot = slot.clone();
    Effect::new(move || {
        effect_slot.sync(active.get(), || {
            let api = api.clone();
            let fetch = fetch.clone();
            poll::start(config.stage_poll, move || fetch(api.clone()), move |result| {
                apply_snapshot(stage, snapshot, result);
            })
        });
    });

    on_cleanup(move || slot.clear());
}

fn apply_snapshot<T: PartialEq + Send + Sync + 'static>(
    stage: WorkStatus,
    snapshot: RwSignal<Option<T>>,
    result: Result<T, ApiError>,
) {
    match result {
        Ok(next) => snapshot.maybe_update(|current| {
            if should_replace(current.as_ref(), &next) {
                *current = Some(next);
                true
            } else {
                false
            }
        }),
        Err(e) => log::warn!("{stage} poll failed: {}", e.reason()),
    }
}
