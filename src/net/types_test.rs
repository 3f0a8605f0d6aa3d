use super::*;

fn parse_role(raw: &str) -> Role {
    serde_json::from_value(serde_json::json!(raw)).expect("role strings always parse")
}

// =============================================================
// Role wire mapping
// =============================================================

#[test]
fn role_parses_every_known_string() {
    let known = [
        ("admin", Role::Admin),
        ("npd", Role::Npd),
        ("purchase", Role::Purchase),
        ("sales", Role::Sales),
        ("stores", Role::Stores),
        ("planning", Role::Planning),
        ("production", Role::Production),
        ("quality", Role::Quality),
        ("engineer", Role::Engineer),
        ("material", Role::Material),
        ("user", Role::User),
    ];
    for (raw, expected) in known {
        assert_eq!(parse_role(raw), expected, "role string {raw}");
        assert_eq!(expected.as_str(), raw);
    }
}

#[test]
fn role_preserves_unknown_string_verbatim() {
    let role = parse_role("shopfloor-lead");
    assert_eq!(role, Role::Unknown("shopfloor-lead".to_owned()));
    assert_eq!(role.as_str(), "shopfloor-lead");

    let reserialized = serde_json::to_value(&role).expect("roles always serialize");
    assert_eq!(reserialized, serde_json::json!("shopfloor-lead"));
}

#[test]
fn role_is_case_sensitive_like_the_server() {
    assert_eq!(parse_role("Admin"), Role::Unknown("Admin".to_owned()));
}

#[test]
fn role_default_is_unrecognized() {
    assert_eq!(Role::default(), Role::Unknown(String::new()));
}

// =============================================================
// User parsing
// =============================================================

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-17",
        "name": "Asha",
        "email": "asha@plant.example",
        "role": "planning"
    }))
    .expect("minimal user parses");

    assert_eq!(user.role, Role::Planning);
    assert_eq!(user.phone, None);
    assert_eq!(user.company_name, None);
    assert_eq!(user.profile_image, None);
}

#[test]
fn user_maps_camel_case_profile_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "name": "Ben",
        "email": "ben@plant.example",
        "role": "stores",
        "companyName": "Plantdesk Ltd",
        "profileImage": "https://img.example/ben.png",
        "createdAt": "2024-11-02T08:00:00Z"
    }))
    .expect("profile user parses");

    assert_eq!(user.company_name.as_deref(), Some("Plantdesk Ltd"));
    assert_eq!(user.profile_image.as_deref(), Some("https://img.example/ben.png"));
    assert_eq!(user.created_at.as_deref(), Some("2024-11-02T08:00:00Z"));
}

#[test]
fn user_without_role_gets_the_unrecognized_default() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-3",
        "name": "Caro",
        "email": "caro@plant.example"
    }))
    .expect("roleless user still parses");

    assert_eq!(user.role, Role::Unknown(String::new()));
}

// =============================================================
// Auth envelope
// =============================================================

#[test]
fn envelope_parses_success_shape() {
    let envelope: AuthEnvelope = serde_json::from_value(serde_json::json!({
        "user": {
            "id": "u-9",
            "name": "Dev",
            "email": "dev@plant.example",
            "role": "quality"
        }
    }))
    .expect("success envelope parses");

    assert!(envelope.user.is_some());
    assert_eq!(envelope.message, None);
}

#[test]
fn envelope_parses_error_shape() {
    let envelope: AuthEnvelope =
        serde_json::from_value(serde_json::json!({ "message": "Invalid credentials" }))
            .expect("error envelope parses");

    assert_eq!(envelope.user, None);
    assert_eq!(envelope.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn envelope_parses_empty_no_session_shape() {
    let envelope: AuthEnvelope =
        serde_json::from_value(serde_json::json!({})).expect("empty envelope parses");

    assert_eq!(envelope, AuthEnvelope::default());
}
