//! Cards for candidate answers and their grades.

#[cfg(test)]
#[path = "answer_card_test.rs"]
mod answer_card_test;

use leptos::prelude::*;

use crate::components::progress::{ProgressLine, score_percent};

/// Heading of the candidate at `index` (zero-based).
#[must_use]
pub fn candidate_label(index: usize) -> String {
    format!("答案 {}", index + 1)
}

/// Score text shown next to the bar; unparseable scores read as 0.
#[must_use]
pub fn format_score(score: Option<f64>) -> String {
    let value = score.filter(|v| v.is_finite()).unwrap_or(0.0);
    if value.fract() == 0.0 { format!("{value:.0}") } else { format!("{value:.1}") }
}

#[component]
pub fn AnswerCard(index: usize, #[prop(into)] answer: String) -> impl IntoView {
    view! {
        <article class="answer-card">
            <h4 class="answer-card__title">{candidate_label(index)}</h4>
            <p class="answer-card__body">{answer}</p>
        </article>
    }
}

#[component]
pub fn ScoreCard(index: usize, #[prop(into)] answer: String, score: Option<f64>) -> impl IntoView {
    let percent = score_percent(score);

    view! {
        <article class="answer-card answer-card--scored">
            <header class="answer-card__header">
                <h4 class="answer-card__title">{candidate_label(index)}</h4>
                <span class="answer-card__score">{format_score(score)}</span>
            </header>
            <p class="answer-card__body">{answer}</p>
            <ProgressLine percent=Signal::derive(move || percent) />
        </article>
    }
}
