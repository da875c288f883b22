use super::*;

#[test]
fn valid_input_builds_request_without_invite() {
    assert_eq!(
        validate_register_input(" alice ", "secret1", "   "),
        Ok(RegisterRequest { username: "alice".to_owned(), password: "secret1".to_owned(), invite_code: None })
    );
}

#[test]
fn invite_code_is_trimmed_and_kept() {
    let request = validate_register_input("alice", "secret1", " INV-42 ").unwrap();
    assert_eq!(request.invite_code.as_deref(), Some("INV-42"));
}

#[test]
fn username_rules() {
    assert_eq!(validate_register_input("", "secret1", ""), Err(USERNAME_REQUIRED));
    assert_eq!(validate_register_input("ab", "secret1", ""), Err(USERNAME_TOO_SHORT));
    assert!(validate_register_input("abc", "secret1", "").is_ok());
}

#[test]
fn username_length_counts_characters() {
    assert!(validate_register_input("张三丰", "secret1", "").is_ok());
    assert_eq!(validate_register_input("张三", "secret1", ""), Err(USERNAME_TOO_SHORT));
}

#[test]
fn password_rules() {
    assert_eq!(validate_register_input("alice", "", ""), Err(PASSWORD_REQUIRED));
    assert_eq!(validate_register_input("alice", "12345", ""), Err(PASSWORD_TOO_SHORT));
    assert!(validate_register_input("alice", "123456", "").is_ok());
}

#[test]
fn username_checked_before_password() {
    assert_eq!(validate_register_input("ab", "", ""), Err(USERNAME_TOO_SHORT));
}
