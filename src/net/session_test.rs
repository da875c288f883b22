use super::*;

fn session_with(store: &Arc<MemoryTokenStore>, nav: &Arc<RecordingNavigator>) -> Session {
    Session::new(store.clone(), nav.clone())
}

#[test]
fn token_is_none_without_stored_value() {
    let store = Arc::new(MemoryTokenStore::default());
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    assert_eq!(session.token(), None);
    assert!(!session.has_token());
}

#[test]
fn empty_token_is_treated_as_absent() {
    let store = Arc::new(MemoryTokenStore::with_token(""));
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    assert!(!session.has_token());
}

#[test]
fn store_token_round_trips_through_store() {
    let store = Arc::new(MemoryTokenStore::default());
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    session.store_token("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
    assert_eq!(session.token().as_deref(), Some("abc"));
}

#[test]
fn clear_removes_token_without_navigating() {
    let store = Arc::new(MemoryTokenStore::with_token("abc"));
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    session.clear();
    assert_eq!(store.get(), None);
    assert!(nav.visited().is_empty());
}

#[test]
fn expire_clears_token_and_navigates_to_login() {
    let store = Arc::new(MemoryTokenStore::with_token("abc"));
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    session.expire();
    assert_eq!(store.get(), None);
    assert_eq!(nav.visited(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn sign_out_clears_token_and_navigates_to_login() {
    let store = Arc::new(MemoryTokenStore::with_token("abc"));
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    session.sign_out();
    assert!(!session.has_token());
    assert_eq!(nav.visited(), vec![LOGIN_PATH.to_owned()]);
}

#[test]
fn clones_share_the_same_store() {
    let store = Arc::new(MemoryTokenStore::default());
    let nav = Arc::new(RecordingNavigator::default());
    let session = session_with(&store, &nav);
    let other = session.clone();
    other.store_token("shared");
    assert_eq!(session.token().as_deref(), Some("shared"));
}
