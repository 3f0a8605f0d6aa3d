use super::*;

#[test]
fn endpoints_hang_off_the_api_base() {
    assert_eq!(endpoint("/auth/login"), "/api/auth/login");
    assert_eq!(endpoint("/auth/signup"), "/api/auth/signup");
    assert_eq!(endpoint("/auth/logout"), "/api/auth/logout");
    assert_eq!(endpoint("/auth/check-auth"), "/api/auth/check-auth");
}

#[test]
fn login_payload_carries_exactly_email_and_password() {
    let payload = login_payload("asha@plant.example", "hunter2");
    assert_eq!(
        payload,
        serde_json::json!({ "email": "asha@plant.example", "password": "hunter2" })
    );
}

#[test]
fn signup_payload_carries_name_email_password() {
    let payload = signup_payload("Asha", "asha@plant.example", "hunter2");
    assert_eq!(
        payload,
        serde_json::json!({
            "name": "Asha",
            "email": "asha@plant.example",
            "password": "hunter2"
        })
    );
}

#[test]
fn credential_message_prefers_server_text() {
    let err = AuthApiError::Rejected {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    };
    assert_eq!(err.credential_message("Login failed"), "Invalid credentials");
}

#[test]
fn credential_message_names_timeouts() {
    assert_eq!(
        AuthApiError::Timeout.credential_message("Login failed"),
        "Request timed out. Try again."
    );
}

#[test]
fn credential_message_falls_back_for_anonymous_failures() {
    let anonymous = [
        AuthApiError::Rejected {
            status: 500,
            message: None,
        },
        AuthApiError::Network("connection refused".to_owned()),
        AuthApiError::Decode("expected object".to_owned()),
        AuthApiError::Unavailable,
    ];
    for err in anonymous {
        assert_eq!(err.credential_message("Signup failed"), "Signup failed");
    }
}

#[test]
fn rejection_display_includes_status() {
    let err = AuthApiError::Rejected {
        status: 403,
        message: None,
    };
    assert_eq!(err.to_string(), "auth request rejected with status 403");
}
