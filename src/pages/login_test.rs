use super::*;

#[test]
fn credentials_trim_login_and_require_both_fields() {
    assert_eq!(
        credentials_from_input("  manager ", "secret"),
        Some(LoginRequest { login: "manager".to_owned(), password: "secret".to_owned() })
    );
    assert_eq!(credentials_from_input("   ", "secret"), None);
    assert_eq!(credentials_from_input("manager", ""), None);
}

#[test]
fn credentials_keep_password_whitespace() {
    let creds = credentials_from_input("manager", " pass ").unwrap();
    assert_eq!(creds.password, " pass ");
}

#[test]
fn post_login_target_uses_redirect_parameter() {
    assert_eq!(post_login_target("?redirect=%2Fstock%3FwarehouseId%3D2"), "/stock?warehouseId=2");
    assert_eq!(post_login_target("redirect=/suppliers"), "/suppliers");
}

#[test]
fn post_login_target_defaults_to_root() {
    assert_eq!(post_login_target(""), "/");
    assert_eq!(post_login_target("?page=2"), "/");
    assert_eq!(post_login_target("?redirect=/a&redirect=/b"), "/");
}
