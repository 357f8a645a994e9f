use super::*;

fn filled_signup() -> SignupCredentials {
    SignupCredentials {
        username: "pat".to_owned(),
        first_name: "Pattrick".to_owned(),
        last_name: "Loveson".to_owned(),
        birth_date: "2004-01-02".to_owned(),
        phone: "0863380481".to_owned(),
        email: "pat@example.com".to_owned(),
        password: "hunter2".to_owned(),
    }
}

// =============================================================================
// Wire shape
// =============================================================================

#[test]
fn signup_serializes_with_api_keys() {
    let value = serde_json::to_value(filled_signup()).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["username", "fname", "lname", "bod", "phone", "email", "password"]);
    assert_eq!(value["bod"], "2004-01-02");
    assert_eq!(value["fname"], "Pattrick");
}

#[test]
fn login_serializes_identifier_and_password() {
    let creds = LoginCredentials { identifier: "pat@example.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&creds).unwrap(),
        serde_json::json!({ "identifier": "pat@example.com", "password": "pw" })
    );
}

#[test]
fn signup_field_keys_match_serialized_keys() {
    let value = serde_json::to_value(filled_signup()).unwrap();
    for field in SignupField::ALL {
        assert_eq!(value[field.key()], filled_signup().get(field), "field {field:?}");
    }
}

#[test]
fn auth_mode_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&AuthMode::Signup).unwrap(), "\"signup\"");
    assert_eq!(serde_json::to_string(&AuthMode::Login).unwrap(), "\"login\"");
}

// =============================================================================
// Field updates
// =============================================================================

#[test]
fn signup_set_updates_single_field() {
    let mut creds = SignupCredentials::default();
    creds.set(SignupField::Phone, "555-0100");
    assert_eq!(creds.phone, "555-0100");
    assert_eq!(creds.get(SignupField::Phone), "555-0100");
    assert!(creds.username.is_empty());
}

#[test]
fn signup_missing_fields_in_form_order() {
    let mut creds = filled_signup();
    creds.email.clear();
    creds.first_name.clear();
    assert_eq!(creds.missing_fields(), vec![SignupField::FirstName, SignupField::Email]);
    assert!(!creds.is_complete());
    assert!(filled_signup().is_complete());
}

#[test]
fn empty_signup_is_missing_everything() {
    assert_eq!(SignupCredentials::default().missing_fields(), SignupField::ALL.to_vec());
}

#[test]
fn login_missing_fields() {
    let mut creds = LoginCredentials::default();
    assert_eq!(creds.missing_fields(), vec![LoginField::Identifier, LoginField::Password]);
    creds.set(LoginField::Identifier, "pat");
    assert_eq!(creds.missing_fields(), vec![LoginField::Password]);
    creds.set(LoginField::Password, "pw");
    assert!(creds.is_complete());
}

// =============================================================================
// Debug redaction
// =============================================================================

#[test]
fn debug_output_hides_passwords() {
    let signup = format!("{:?}", filled_signup());
    assert!(!signup.contains("hunter2"));
    assert!(signup.contains("pat@example.com"));

    let login = format!("{:?}", LoginCredentials { identifier: "pat".to_owned(), password: "s3cret".to_owned() });
    assert!(!login.contains("s3cret"));
    assert!(login.contains("<redacted>"));
}
