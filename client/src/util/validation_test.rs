use super::*;

fn valid_form() -> RegisterForm {
    RegisterForm {
        email: "ada@example.com".to_owned(),
        password: "hunter22".to_owned(),
        name: "Ada".to_owned(),
        user_type: "HOS".to_owned(),
    }
}

// =============================================================================
// validate_register_form
// =============================================================================

#[test]
fn accepts_known_good_form() {
    let registration = validate_register_form(&valid_form()).expect("valid form");
    assert_eq!(
        registration,
        Registration {
            email: "ada@example.com".to_owned(),
            password: "hunter22".to_owned(),
            name: "Ada".to_owned(),
            user_type: UserType::Hos,
        }
    );
}

#[test]
fn accepts_das_user_type() {
    let form = RegisterForm { user_type: "DAS".to_owned(), ..valid_form() };
    assert_eq!(validate_register_form(&form).map(|r| r.user_type), Ok(UserType::Das));
}

#[test]
fn trims_email_and_name_but_not_password() {
    let form = RegisterForm {
        email: "  ada@example.com ".to_owned(),
        name: " Ada ".to_owned(),
        password: " pass ".to_owned(),
        ..valid_form()
    };
    let registration = validate_register_form(&form).expect("valid form");
    assert_eq!(registration.email, "ada@example.com");
    assert_eq!(registration.name, "Ada");
    assert_eq!(registration.password, " pass ");
}

#[test]
fn default_form_rejects_every_text_field() {
    let errors = validate_register_form(&RegisterForm::default()).unwrap_err();
    let fields: Vec<Field> = errors.issues().iter().map(FieldError::field).collect();
    assert_eq!(fields, vec![Field::Email, Field::Password, Field::Name]);
}

#[test]
fn rejects_invalid_email() {
    let form = RegisterForm { email: "not-an-email".to_owned(), ..valid_form() };
    let errors = validate_register_form(&form).unwrap_err();
    assert_eq!(errors.issues(), &[FieldError::InvalidEmail]);
    assert_eq!(errors.to_string(), "Invalid e-mail address");
}

#[test]
fn password_length_bounds_are_inclusive() {
    for password in ["12345", "123456789012345678"] {
        let form = RegisterForm { password: password.to_owned(), ..valid_form() };
        assert!(validate_register_form(&form).is_ok(), "expected {password:?} to pass");
    }
}

#[test]
fn rejects_short_password() {
    let form = RegisterForm { password: "1234".to_owned(), ..valid_form() };
    let errors = validate_register_form(&form).unwrap_err();
    assert_eq!(errors.issues(), &[FieldError::TooShort { field: Field::Password, min: 5 }]);
    assert_eq!(errors.to_string(), "String must contain at least 5 character(s)");
}

#[test]
fn rejects_long_password() {
    let form = RegisterForm { password: "1234567890123456789".to_owned(), ..valid_form() };
    let errors = validate_register_form(&form).unwrap_err();
    assert_eq!(errors.for_field(Field::Password), Some(&FieldError::TooLong { field: Field::Password, max: 18 }));
}

#[test]
fn password_length_counts_utf16_units() {
    // Each emoji is two UTF-16 code units.
    let form = RegisterForm { password: "\u{1F355}\u{1F355}\u{1F355}".to_owned(), ..valid_form() };
    assert!(validate_register_form(&form).is_ok());

    let form = RegisterForm { password: "\u{1F355}\u{1F355}".to_owned(), ..valid_form() };
    assert!(validate_register_form(&form).is_err());
}

#[test]
fn rejects_single_character_name() {
    let form = RegisterForm { name: " A ".to_owned(), ..valid_form() };
    let errors = validate_register_form(&form).unwrap_err();
    assert_eq!(errors.issues(), &[FieldError::TooShort { field: Field::Name, min: 2 }]);
}

#[test]
fn rejects_unknown_user_type() {
    let form = RegisterForm { user_type: "hos".to_owned(), ..valid_form() };
    let errors = validate_register_form(&form).unwrap_err();
    assert_eq!(errors.issues(), &[FieldError::InvalidUserType { received: "hos".to_owned() }]);
    assert_eq!(errors.to_string(), "Invalid enum value. Expected 'HOS' | 'DAS', received 'hos'");
}

#[test]
fn multiple_issues_are_joined_in_field_order() {
    let form = RegisterForm {
        email: "bad".to_owned(),
        password: "1".to_owned(),
        name: "Ada".to_owned(),
        user_type: "XYZ".to_owned(),
    };
    let errors = validate_register_form(&form).unwrap_err();
    assert_eq!(
        errors.to_string(),
        "Invalid e-mail address; String must contain at least 5 character(s); \
         Invalid enum value. Expected 'HOS' | 'DAS', received 'XYZ'"
    );
}

// =============================================================================
// is_valid_email
// =============================================================================

#[test]
fn email_accepts_common_addresses() {
    for email in ["a@b.co", "first.last@example.com", "o'neil+food@mail.example.org", "x_y-z@sub-domain.io"] {
        assert!(is_valid_email(email), "expected {email:?} to be valid");
    }
}

#[test]
fn email_rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "@example.com",
        "user@",
        "user@localhost",
        "user@example.c",
        "user@example.c0m",
        ".user@example.com",
        "us..er@example.com",
        "user.@example.com",
        "user@-example.com",
        "user@exa mple.com",
        "user@@example.com",
        "us er@example.com",
    ] {
        assert!(!is_valid_email(email), "expected {email:?} to be invalid");
    }
}

// =============================================================================
// UserType
// =============================================================================

#[test]
fn user_type_serializes_as_upper_code() {
    assert_eq!(serde_json::to_string(&UserType::Das).unwrap(), "\"DAS\"");
    assert_eq!(serde_json::from_str::<UserType>("\"HOS\"").unwrap(), UserType::Hos);
}

#[test]
fn register_form_default_type_is_hos() {
    assert_eq!(RegisterForm::default().user_type, "HOS");
}

#[test]
fn register_form_uses_type_key_on_the_wire() {
    let value = serde_json::to_value(valid_form()).unwrap();
    assert_eq!(value["type"], "HOS");
    assert!(value.get("user_type").is_none());
}

// =============================================================================
// validate_login_form
// =============================================================================

#[test]
fn login_form_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_form(" a@b.com ", "secret"),
        Ok(("a@b.com".to_owned(), "secret".to_owned()))
    );
    assert_eq!(validate_login_form("   ", "secret"), Err("Enter both e-mail and password."));
    assert_eq!(validate_login_form("a@b.com", ""), Err("Enter both e-mail and password."));
}
