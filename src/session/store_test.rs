use super::*;

fn sample_user() -> User {
    User {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        avatar_url: Some(String::new()),
    }
}

#[test]
fn decode_round_trips_an_encoded_session() {
    let session = Session { token: "abc".to_owned(), user: sample_user() };
    let user_json = encode_user(&session.user).expect("user serializes");

    let loaded = decode_session(Some(session.token.clone()), Some(user_json));
    assert_eq!(loaded, Some(session));
}

#[test]
fn decode_absent_when_token_missing() {
    let user_json = encode_user(&sample_user());
    assert_eq!(decode_session(None, user_json), None);
}

#[test]
fn decode_absent_when_user_missing() {
    assert_eq!(decode_session(Some("abc".to_owned()), None), None);
}

#[test]
fn decode_absent_when_user_is_not_json() {
    let loaded = decode_session(Some("abc".to_owned()), Some("{not json".to_owned()));
    assert_eq!(loaded, None);
}

#[test]
fn decode_absent_when_user_shape_is_wrong() {
    let loaded = decode_session(Some("abc".to_owned()), Some(r#"{"id":"1"}"#.to_owned()));
    assert_eq!(loaded, None);
}

#[test]
fn decode_accepts_stored_profile_written_by_hand() {
    let raw = r#"{"id":"1","name":"Ana","avatar_url":""}"#;
    let loaded = decode_session(Some("abc".to_owned()), Some(raw.to_owned()))
        .expect("full entries decode");
    assert_eq!(loaded.token, "abc");
    assert_eq!(loaded.user.name, "Ana");
}
