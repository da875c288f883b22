use super::*;

fn paths(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[test]
fn empty_selection_is_rejected() {
    assert_eq!(validate_selection(""), Err(SELECT_FILE_PROMPT));
    assert_eq!(validate_selection("   "), Err(SELECT_FILE_PROMPT));
}

#[test]
fn selection_is_trimmed() {
    assert_eq!(validate_selection(" data/corpus.txt "), Ok("data/corpus.txt".to_owned()));
}

#[test]
fn reconcile_keeps_offered_selection() {
    let offered = paths(&["a.txt", "b.txt"]);
    assert_eq!(reconcile_selection("b.txt", &offered), "b.txt");
}

#[test]
fn reconcile_defaults_to_first_path() {
    let offered = paths(&["a.txt", "b.txt"]);
    assert_eq!(reconcile_selection("", &offered), "a.txt");
    assert_eq!(reconcile_selection("gone.txt", &offered), "a.txt");
}

#[test]
fn reconcile_with_no_paths_is_empty() {
    assert_eq!(reconcile_selection("a.txt", &[]), "");
}
