use super::*;

fn sample_session() -> Session {
    Session {
        token: "abc".to_owned(),
        user: User {
            id: "1".to_owned(),
            name: "Ana".to_owned(),
            avatar_url: Some(String::new()),
        },
    }
}

#[test]
fn handle_starts_unauthenticated_without_a_session() {
    let handle = SessionHandle::new(None);
    assert!(!handle.is_authenticated());
    assert_eq!(handle.user(), None);
    assert_eq!(handle.token(), None);
}

#[test]
fn handle_exposes_rehydrated_session() {
    let handle = SessionHandle::new(Some(sample_session()));
    assert!(handle.is_authenticated());
    assert_eq!(handle.user().map(|u| u.name), Some("Ana".to_owned()));
    assert_eq!(handle.token().as_deref(), Some("abc"));
}

#[test]
fn sign_out_resets_user_and_token() {
    let handle = SessionHandle::new(Some(sample_session()));
    handle.sign_out();
    assert!(!handle.is_authenticated());
    assert_eq!(handle.user(), None);
    assert_eq!(handle.token(), None);
}

#[test]
fn restore_on_host_starts_logged_out() {
    // Without a browser there is no durable storage to rehydrate from.
    let handle = SessionHandle::restore();
    assert!(!handle.is_authenticated());
}
