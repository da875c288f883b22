use super::*;

#[test]
fn steps_before_current_are_finished() {
    assert_eq!(step_state(0, 3), StepState::Finished);
    assert_eq!(step_state(2, 3), StepState::Finished);
}

#[test]
fn current_step_is_highlighted_once() {
    let current = WorkStatus::Grading.step_index();
    let highlighted: Vec<_> = WorkStatus::ALL
        .into_iter()
        .filter(|status| step_state(status.step_index(), current) == StepState::Current)
        .collect();
    assert_eq!(highlighted, vec![WorkStatus::Grading]);
}

#[test]
fn steps_after_current_are_waiting() {
    assert_eq!(step_state(5, 4), StepState::Waiting);
    assert_eq!(step_state(1, 0), StepState::Waiting);
}
