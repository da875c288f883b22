//! Answering stage: the current question with its four candidate answers.

use leptos::prelude::*;

use super::{StageHeader, use_stage_poll};
use crate::components::answer_card::AnswerCard;
use crate::components::spinner::Spinner;
use crate::net::api::ApiClient;
use crate::net::types::{AnswerData, WorkStatus};
use crate::state::stage::StageView;

#[component]
pub fn AnsweringStage() -> impl IntoView {
    let snapshot = RwSignal::new(None::<AnswerData>);
    use_stage_poll(WorkStatus::Answering, snapshot, |api: ApiClient| async move {
        api.fetch_current_answer().await
    });

    view! {
        <section class="stage stage--answering">
            <StageHeader view_kind=StageView::Answering />
            <Show when=move || snapshot.with(Option::is_some) fallback=|| view! { <Spinner /> }>
                {move || {
                    snapshot
                        .get()
                        .map(|data| {
                            let cards = data
                                .answers()
                                .into_iter()
                                .enumerate()
                                .map(|(index, answer)| view! { <AnswerCard index=index answer=answer.to_owned() /> })
                                .collect::<Vec<_>>();
                            view! {
                                <div class="stage__body">
                                    <p class="stage__question">{data.question.clone()}</p>
                                    <div class="answer-grid">{cards}</div>
                                </div>
                            }
                        })
                }}
            </Show>
        </section>
    }
}
