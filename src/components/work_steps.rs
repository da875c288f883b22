//! Six-step pipeline bar.

#[cfg(test)]
#[path = "work_steps_test.rs"]
mod work_steps_test;

use leptos::prelude::*;

use crate::net::types::WorkStatus;

/// Visual state of one step relative to the current stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Finished,
    Current,
    Waiting,
}

impl StepState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Finished => "work-steps__item work-steps__item--finished",
            Self::Current => "work-steps__item work-steps__item--current",
            Self::Waiting => "work-steps__item work-steps__item--waiting",
        }
    }
}

#[must_use]
pub fn step_state(index: usize, current: usize) -> StepState {
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepState::Finished,
        std::cmp::Ordering::Equal => StepState::Current,
        std::cmp::Ordering::Greater => StepState::Waiting,
    }
}

#[component]
pub fn WorkSteps(current: Signal<usize>) -> impl IntoView {
    view! {
        <ol class="work-steps">
            {WorkStatus::ALL
                .into_iter()
                .map(|status| {
                    let index = status.step_index();
                    view! {
                        <li class=move || step_state(index, current.get()).class()>
                            <span class="work-steps__index">{index + 1}</span>
                            <span class="work-steps__title">{status.step_title()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
