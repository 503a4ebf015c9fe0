use super::*;
use crate::net::types::Role;

// =============================================================
// decode_session_body
// =============================================================

#[test]
fn decode_success_body() {
    let body = r#"{"success":true,"data":{"id":"u1","name":"Ana","email":"a@x.com","role":"seller"}}"#;
    let session = decode_session_body(true, 200, body).unwrap();
    assert_eq!(session.id, "u1");
    assert_eq!(session.role, Role::Seller);
}

#[test]
fn decode_rejection_on_error_status_keeps_message() {
    let body = r#"{"success":false,"message":"Invalid credentials"}"#;
    assert_eq!(
        decode_session_body(false, 401, body),
        Err(ApiError::Rejected { message: Some("Invalid credentials".to_owned()) })
    );
}

#[test]
fn decode_unreadable_error_body_reports_status() {
    assert_eq!(decode_session_body(false, 502, "<html>Bad Gateway</html>"), Err(ApiError::Status(502)));
}

#[test]
fn decode_unreadable_ok_body_is_malformed() {
    assert!(matches!(decode_session_body(true, 200, "not json"), Err(ApiError::Malformed(_))));
}

// =============================================================
// HttpAuthApi outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_outside_browser() {
    let api = HttpAuthApi::default();
    assert_eq!(futures::executor::block_on(api.me()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(api.logout()), Err(ApiError::Unavailable));
}

#[test]
fn http_api_uses_given_endpoints() {
    let api = HttpAuthApi::new(AuthEndpoints::new("https://auth.example"));
    assert_eq!(api.endpoints().me, "https://auth.example/api/auth/me");
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Rejected { message: None }.to_string(), "request rejected: no message");
    assert_eq!(ApiError::Status(500).to_string(), "unexpected response status: 500");
}
