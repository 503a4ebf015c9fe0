use super::*;

fn envelope(json: &str) -> AuthEnvelope {
    serde_json::from_str(json).unwrap()
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Seller).unwrap(), "\"seller\"");
    assert_eq!(serde_json::from_str::<Role>("\"buyer\"").unwrap(), Role::Buyer);
}

#[test]
fn role_defaults_to_buyer() {
    assert_eq!(Role::default(), Role::Buyer);
    assert_eq!(Role::Seller.to_string(), "seller");
}

// =============================================================
// AuthEnvelope::into_session
// =============================================================

#[test]
fn success_envelope_yields_session() {
    let session = envelope(
        r#"{"success":true,"data":{"id":"u1","name":"Ana","email":"a@x.com","role":"buyer"}}"#,
    )
    .into_session()
    .unwrap();
    assert_eq!(
        session,
        Session { id: "u1".to_owned(), name: "Ana".to_owned(), email: "a@x.com".to_owned(), role: Role::Buyer }
    );
}

#[test]
fn failure_envelope_carries_message() {
    let err = envelope(r#"{"success":false,"message":"Invalid credentials"}"#).into_session().unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: Some("Invalid credentials".to_owned()) });
}

#[test]
fn failure_envelope_without_message() {
    let err = envelope(r#"{"success":false}"#).into_session().unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: None });
}

#[test]
fn blank_message_is_treated_as_absent() {
    let err = envelope(r#"{"success":false,"message":"  "}"#).into_session().unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: None });
}

#[test]
fn success_without_data_is_malformed() {
    let err = envelope(r#"{"success":true}"#).into_session().unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn partial_session_is_malformed() {
    let err = envelope(r#"{"success":true,"data":{"id":"u1","name":"Ana"}}"#).into_session().unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn unknown_role_is_malformed() {
    let err = envelope(r#"{"success":true,"data":{"id":"u1","name":"Ana","email":"a@x.com","role":"admin"}}"#)
        .into_session()
        .unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn empty_id_is_malformed() {
    let err = envelope(r#"{"success":true,"data":{"id":"","name":"Ana","email":"a@x.com","role":"buyer"}}"#)
        .into_session()
        .unwrap_err();
    assert!(matches!(err, ApiError::Malformed(_)));
}

#[test]
fn blank_name_or_email_is_malformed() {
    for body in [
        r#"{"success":true,"data":{"id":"u1","name":"","email":"a@x.com","role":"buyer"}}"#,
        r#"{"success":true,"data":{"id":"u1","name":"Ana","email":"  ","role":"buyer"}}"#,
    ] {
        let err = envelope(body).into_session().unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)), "accepted {body}");
    }
}

#[test]
fn missing_success_flag_reads_as_rejection() {
    let err = envelope("{}").into_session().unwrap_err();
    assert_eq!(err, ApiError::Rejected { message: None });
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn register_request_serializes_role() {
    let req = RegisterRequest {
        name: "Ana".to_owned(),
        email: "a@x.com".to_owned(),
        password: "pw".to_owned(),
        role: Role::Seller,
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({"name":"Ana","email":"a@x.com","password":"pw","role":"seller"})
    );
}
