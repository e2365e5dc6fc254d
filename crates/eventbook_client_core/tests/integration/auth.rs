//! Login and register against the auth endpoints.

use eventbook_client_core::{ClientError, Role};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_helpers::start_api;

#[tokio::test]
async fn login_signs_the_session_in() {
    let (server, client) = start_api().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "root@example.com", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-abc",
            "user": {"id": 1, "name": "Root", "email": "root@example.com", "role": "admin"}
        })))
        .mount(&server)
        .await;

    let session = client.login(" root@example.com ", "secret").await.unwrap();
    assert_eq!(session.token, "jwt-abc");
    assert!(client.session().is_admin());
    assert!(client.session().shows_admin());

    client.logout().unwrap();
    assert!(!client.session().is_signed_in());
}

#[tokio::test]
async fn bad_credentials_leave_session_empty() {
    let (server, client) = start_api().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})))
        .mount(&server)
        .await;

    let err = client.login("a@example.com", "nope").await.unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 400, .. }));
    assert!(!client.session().is_signed_in());
}

#[tokio::test]
async fn register_with_and_without_session_reply() {
    let (server, client) = start_api().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "User registered"})))
        .mount(&server)
        .await;
    assert_eq!(client.register("Ann", "ann@example.com", "pw").await.unwrap(), None);
    assert!(!client.session().is_signed_in());

    let (server, client) = start_api().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .and(body_json(json!({"name": "Ann", "email": "ann@example.com", "password": "pw"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "token": "jwt-new",
            "user": {"name": "Ann", "email": "ann@example.com", "role": "user"}
        })))
        .mount(&server)
        .await;
    let session = client.register("Ann", "ann@example.com", "pw").await.unwrap().unwrap();
    assert_eq!(session.user.role, Role::User);
    assert!(client.session().shows_my_bookings());
}
