//! Tuning stage: training progress as a ring and a bar.

use leptos::prelude::*;

use super::{StageHeader, use_stage_poll};
use crate::components::progress::{ProgressCircle, ProgressLine};
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::net::types::{TuningProgress, WorkStatus};
use crate::state::stage::StageView;

#[component]
pub fn TuningStage() -> impl IntoView {
    let snapshot = RwSignal::new(None::<TuningProgress>);
    use_stage_poll(WorkStatus::Tuning, snapshot, |api: ApiClient| async move {
        api.fetch_tuning_progress().await
    });

    let percent = Signal::derive(move || snapshot.with(|s| s.as_ref().map_or(0.0, |p| f64::from(p.progress))));
    let message = move || snapshot.with(|s| s.as_ref().map(|p| p.message.clone()).unwrap_or_default());

    view! {
        <section class="stage stage--tuning">
            <StageHeader view_kind=StageView::Tuning />
            <Show when=move || snapshot.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                <div class="stage__body stage__body--centered">
                    <ProgressCircle percent=percent />
                    <ProgressLine percent=percent />
                    <p class="stage__message">{message}</p>
                </div>
            </Show>
        </section>
    }
}
