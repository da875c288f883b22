//! Grading stage: candidate answers with their parsed scores.

use leptos::prelude::*;

use super::{StageHeader, use_stage_poll};
use crate::components::answer_card::ScoreCard;
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::net::types::{ScoreData, WorkStatus};
use crate::state::stage::StageView;

#[component]
pub fn GradingStage() -> impl IntoView {
    let snapshot = RwSignal::new(None::<ScoreData>);
    use_stage_poll(WorkStatus::Grading, snapshot, |api: ApiClient| async move {
        api.fetch_current_score().await
    });

    view! {
        <section class="stage stage--grading">
            <StageHeader view_kind=StageView::Grading />
            <Show when=move || snapshot.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                {move || {
                    snapshot
                        .get()
                        .map(|data| {
                            let cards = data
                                .answers
                                .answers()
                                .into_iter()
                                .zip(data.score_values())
                                .enumerate()
                                .map(|(index, (answer, score))| {
                                    view! { <ScoreCard index=index answer=answer.to_owned() score=score /> }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="stage__body">
                                    <p class="stage__question">{data.answers.question.clone()}</p>
                                    <div class="answer-grid">{cards}</div>
                                </div>
                            }
                        })
                }}
            </Show>
        </section>
    }
}
