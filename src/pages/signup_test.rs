use super::*;

#[test]
fn validate_signup_input_trims_name_and_email() {
    assert_eq!(
        validate_signup_input("  Asha  ", "  asha@plant.example ", "hunter2"),
        Ok((
            "Asha".to_owned(),
            "asha@plant.example".to_owned(),
            "hunter2".to_owned()
        ))
    );
}

#[test]
fn validate_signup_input_requires_a_name() {
    assert_eq!(
        validate_signup_input("   ", "asha@plant.example", "hunter2"),
        Err("Enter your name.")
    );
}

#[test]
fn validate_signup_input_rejects_a_bare_email() {
    assert_eq!(
        validate_signup_input("Asha", "plant.example", "hunter2"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_signup_input_enforces_the_password_floor() {
    assert_eq!(
        validate_signup_input("Asha", "asha@plant.example", "12345"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_signup_input("Asha", "asha@plant.example", "123456").is_ok());
}
