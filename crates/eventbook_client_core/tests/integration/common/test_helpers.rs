//! Shared helpers: a mock booking API and JSON fixtures.

use std::sync::Arc;

use eventbook_client_core::{ApiClient, ClientConfig, Role, Session, SessionContext, User};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Mock server plus a signed-out client pointed at `<server>/api`.
pub async fn start_api() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(format!("{}/api", server.uri()));
    let client = ApiClient::new(config, Arc::new(SessionContext::in_memory()));
    (server, client)
}

/// Like [`start_api`] but already signed in with [`TOKEN`].
pub async fn start_signed_in(role: Role) -> (MockServer, ApiClient) {
    let (server, client) = start_api().await;
    client
        .session()
        .sign_in(session(role))
        .expect("sign in");
    (server, client)
}

pub fn session(role: Role) -> Session {
    Session {
        token: TOKEN.to_string(),
        user: User {
            id: None,
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role,
        },
    }
}

pub fn event_json(id: i64, title: &str, location: &str, price: Value, seats: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "img": format!("https://cdn.example.com/{}.png", id),
        "price": price,
        "available_seats": seats,
        "location": location,
        "date": "2025-06-01T19:00:00.000Z"
    })
}

pub fn scenario_events() -> Value {
    json!([
        event_json(1, "Jazz Night", "Park", json!("30.00"), 120),
        event_json(2, "Tech Talk", "Hub", json!(0), 40)
    ])
}

/// Authorization header of every request the server saw, in order.
pub async fn auth_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(String::from)
        })
        .collect()
}
