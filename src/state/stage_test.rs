use std::collections::HashSet;

use super::*;
use crate::net::types::TuningProgress;

#[test]
fn every_status_selects_exactly_one_view() {
    let views: HashSet<StageView> = WorkStatus::ALL.into_iter().map(StageView::for_status).collect();
    assert_eq!(views.len(), WorkStatus::ALL.len());
    for status in WorkStatus::ALL {
        assert_eq!(StageView::for_status(status).stage(), status);
    }
}

#[test]
fn tuning_status_selects_tuning_view() {
    assert_eq!(StageView::for_status(WorkStatus::Tuning), StageView::Tuning);
    assert_eq!(StageView::Tuning.title(), "模型微调中");
}

#[test]
fn idle_and_evaluating_do_not_poll() {
    assert!(!StageView::Idle.polls());
    assert!(!StageView::Evaluating.polls());
    assert!(StageView::Generating.polls());
    assert!(StageView::Answering.polls());
    assert!(StageView::Grading.polls());
    assert!(StageView::Tuning.polls());
}

#[test]
fn evaluating_copy_is_static() {
    assert_eq!(StageView::Evaluating.title(), "测评进行中");
    assert_eq!(StageView::Evaluating.subtitle(), "正在评估优化效果...");
}

#[test]
fn first_snapshot_always_replaces() {
    let incoming = TuningProgress { progress: 10, message: "warming up".to_owned() };
    assert!(should_replace(None, &incoming));
}

#[test]
fn equal_snapshot_is_skipped() {
    let current = TuningProgress { progress: 75, message: "epoch 3".to_owned() };
    let incoming = current.clone();
    assert!(!should_replace(Some(&current), &incoming));
}

#[test]
fn different_snapshot_replaces() {
    let current = TuningProgress { progress: 75, message: "epoch 3".to_owned() };
    let incoming = TuningProgress { progress: 80, message: "epoch 3".to_owned() };
    assert!(should_replace(Some(&current), &incoming));
}
