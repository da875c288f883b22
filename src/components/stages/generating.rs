//! Question-generation stage: lists the questions produced so far.

use leptos::prelude::*;

use super::{StageHeader, use_stage_poll};
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::net::types::{QaPairs, WorkStatus};
use crate::state::stage::StageView;

#[component]
pub fn GeneratingStage() -> impl IntoView {
    let snapshot = RwSignal::new(None::<QaPairs>);
    use_stage_poll(WorkStatus::Generating, snapshot, |api: ApiClient| async move {
        api.fetch_current_qa_pairs().await
    });

    view! {
        <section class="stage stage--generating">
            <StageHeader view_kind=StageView::Generating />
            <Show when=move || snapshot.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                <ol class="qa-list">
                    {move || {
                        snapshot
                            .get()
                            .map(|pairs| pairs.qa_pairs)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|pair| {
                                view! {
                                    <li class="qa-card">
                                        <p class="qa-card__question">{pair.question}</p>
                                        <p class="qa-card__answer">{pair.answer}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
            </Show>
        </section>
    }
}
