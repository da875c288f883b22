use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(Credentials { username: "alice".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(validate_login_input("   ", "secret"), Err(USERNAME_REQUIRED));
    assert_eq!(validate_login_input("", ""), Err(USERNAME_REQUIRED));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("alice", ""), Err(PASSWORD_REQUIRED));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let credentials = validate_login_input("alice", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}
