use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeLevel::Success, "登录成功");
    let second = state.push(NoticeLevel::Error, "获取工作状态失败");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].text, "登录成功");
    assert_eq!(state.items[1].level, NoticeLevel::Error);
}

#[test]
fn dismiss_removes_only_matching_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeLevel::Error, "same");
    let second = state.push(NoticeLevel::Error, "same");
    assert!(state.dismiss(first));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_twice_is_harmless() {
    let mut state = NoticeState::default();
    let id = state.push(NoticeLevel::Info, "hello");
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.items.is_empty());
}

#[test]
fn overflow_drops_oldest() {
    let mut state = NoticeState::default();
    for i in 0..(MAX_VISIBLE + 2) {
        state.push(NoticeLevel::Info, format!("n{i}"));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].text, "n2");
    assert_eq!(state.items.last().map(|n| n.text.as_str()), Some("n6"));
}

#[test]
fn level_classes_are_distinct() {
    assert_eq!(NoticeLevel::Success.class(), "toast toast--success");
    assert_eq!(NoticeLevel::Error.class(), "toast toast--error");
    assert_eq!(NoticeLevel::Info.class(), "toast toast--info");
}
