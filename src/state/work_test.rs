use super::*;

fn response(status: WorkStatus, name: &str) -> Result<WorkStatusResponse, ApiError> {
    Ok(WorkStatusResponse { status, status_name: name.to_owned() })
}

fn failure(message: &str) -> Result<WorkStatusResponse, ApiError> {
    Err(ApiError::Server { status: 500, message: message.to_owned() })
}

#[test]
fn default_state_is_loading_without_status() {
    let state = WorkState::default();
    assert!(state.loading);
    assert_eq!(state.status, None);
    assert_eq!(state.label(), UNKNOWN_STATUS_LABEL);
    assert_eq!(state.step_index(), 0);
    assert_eq!(state.tone(), StatusTone::Default);
}

#[test]
fn successful_fetch_replaces_status_and_ends_loading() {
    let mut state = WorkState::default();
    let outcome = state.apply(response(WorkStatus::Tuning, "模型微调中"));
    assert!(outcome.changed);
    assert_eq!(outcome.error, None);
    assert!(!state.loading);
    assert_eq!(state.status, Some(WorkStatus::Tuning));
    assert_eq!(state.label(), "模型微调中");
    assert_eq!(state.step_index(), 4);
    assert_eq!(state.tone(), StatusTone::Warning);
}

#[test]
fn identical_snapshot_reports_no_change() {
    let mut state = WorkState::default();
    state.apply(response(WorkStatus::Grading, "评分中"));
    let outcome = state.apply(response(WorkStatus::Grading, "评分中"));
    assert!(!outcome.changed);
}

#[test]
fn renamed_status_counts_as_change() {
    let mut state = WorkState::default();
    state.apply(response(WorkStatus::Grading, "评分中"));
    assert!(state.apply(response(WorkStatus::Grading, "正在评分")).changed);
}

#[test]
fn first_failure_ends_loading_and_reports_message() {
    let mut state = WorkState::default();
    let outcome = state.apply(failure("获取工作状态失败"));
    assert!(outcome.changed);
    assert_eq!(outcome.error.as_deref(), Some("获取工作状态失败"));
    assert!(!state.loading);
    assert_eq!(state.status, None);
}

#[test]
fn failure_keeps_previous_status() {
    let mut state = WorkState::default();
    state.apply(response(WorkStatus::Answering, "解答中"));
    let outcome = state.apply(failure("服务器错误"));
    assert!(!outcome.changed);
    assert_eq!(outcome.error.as_deref(), Some("服务器错误"));
    assert_eq!(state.status, Some(WorkStatus::Answering));
    assert_eq!(state.label(), "解答中");
}

#[test]
fn blank_status_name_falls_back_to_unknown_label() {
    let mut state = WorkState::default();
    state.apply(response(WorkStatus::Idle, "  "));
    assert_eq!(state.label(), UNKNOWN_STATUS_LABEL);
}
