use super::*;

#[test]
fn validate_credentials_trims_and_accepts_valid_input() {
    assert_eq!(
        validate_credentials("  ana@example.com  ", "secret"),
        Ok(("ana@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    let errors = validate_credentials("   ", "secret").expect_err("missing email");
    assert_eq!(errors.get("email").map(String::as_str), Some("E-mail obrigatório"));
}

#[test]
fn validate_credentials_requires_email_shape() {
    let errors = validate_credentials("ana.example.com", "secret").expect_err("bad email");
    assert_eq!(errors.get("email").map(String::as_str), Some("Digite um e-mail válido"));
}

#[test]
fn validate_credentials_requires_password() {
    let errors = validate_credentials("ana@example.com", "").expect_err("missing password");
    assert_eq!(errors.get("password").map(String::as_str), Some("Senha obrigatória"));
}

#[test]
fn validate_credentials_reports_both_fields_at_once() {
    let errors = validate_credentials("", "").expect_err("both missing");
    assert_eq!(errors.len(), 2);
}

#[test]
fn from_param_reads_guard_redirect_state() {
    assert_eq!(from_param("?from=/dashboard"), Some("/dashboard".to_owned()));
    assert_eq!(from_param("from=/dashboard"), Some("/dashboard".to_owned()));
}

#[test]
fn from_param_absent_or_empty_is_none() {
    assert_eq!(from_param(""), None);
    assert_eq!(from_param("?other=1"), None);
    assert_eq!(from_param("?from="), None);
}

#[test]
fn post_login_target_returns_to_attempted_path() {
    assert_eq!(post_login_target(Some("/dashboard".to_owned())), "/dashboard");
}

#[test]
fn post_login_target_defaults_to_dashboard() {
    assert_eq!(post_login_target(None), "/dashboard");
    // Absolute URLs are not navigable in-app; fall back.
    assert_eq!(post_login_target(Some("https://evil.example".to_owned())), "/dashboard");
}
