//! Admin endpoints: all bookings, event create/update/delete.

use chrono::NaiveDate;
use eventbook_client_core::admin::{dashboard_stats, EventDraft, ImageUpload};
use eventbook_client_core::{ClientError, Event, EventId, Role};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_helpers::{event_json, start_signed_in};

fn draft() -> EventDraft {
    let event: Event = serde_json::from_value(event_json(3, "Open Air", "Beach", json!(15), 80)).unwrap();
    let mut draft = EventDraft::from_event(&event);
    draft.image = Some(ImageUpload {
        file_name: "poster.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: vec![137, 80, 78, 71],
    });
    draft
}

#[tokio::test]
async fn create_event_sends_multipart_fields() {
    let (server, client) = start_signed_in(Role::Admin).await;
    Mock::given(method("POST"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Event created"})))
        .expect(1)
        .mount(&server)
        .await;

    client.create_event(&draft()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
    let body = String::from_utf8_lossy(&requests[0].body);
    for field in ["title", "description", "date", "time", "location", "price", "available_seats", "img"] {
        assert!(body.contains(&format!("name=\"{}\"", field)), "missing field {}", field);
    }
    assert!(body.contains("Open Air"));
    assert!(body.contains("filename=\"poster.png\""));
}

#[tokio::test]
async fn invalid_draft_is_rejected_before_sending() {
    let (server, client) = start_signed_in(Role::Admin).await;
    let mut bad = draft();
    bad.title.clear();
    let err = client.create_event(&bad).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_and_delete_hit_the_event_path() {
    let (server, client) = start_signed_in(Role::Admin).await;
    Mock::given(method("PUT"))
        .and(path("/api/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Event updated"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/events/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Event deleted"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut update = draft();
    update.image = None;
    client.update_event(EventId(3), &update).await.unwrap();
    client.delete_event(EventId(3)).await.unwrap();

    // The edit form is prefilled from the event, time of day included.
    let requests = server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"time\"\r\n\r\n19:00"), "time not sent: {}", body);
    assert!(body.contains("2025-06-01"));
}

#[tokio::test]
async fn non_admin_gets_forbidden() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("GET"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"message": "Admin only"})))
        .mount(&server)
        .await;

    let err = client.fetch_all_bookings().await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(_)));
    // 403 does not invalidate the token.
    assert!(client.session().is_signed_in());
}

#[tokio::test]
async fn all_bookings_feed_dashboard_stats() {
    let (server, client) = start_signed_in(Role::Admin).await;
    Mock::given(method("GET"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ann", "email": "ann@example.com", "event_title": "Jazz Night",
             "quantity": 2, "total_amount": "60.00", "booking_date": "2025-05-01", "mobile": "9876543210"},
            {"id": 2, "name": "Bob", "email": "bob@example.com", "event_title": "Jazz Night",
             "quantity": 1, "total_amount": 30, "status": "cancelled"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            event_json(1, "Jazz Night", "Park", json!(30), 117)
        ])))
        .mount(&server)
        .await;

    let bookings = client.fetch_all_bookings().await.unwrap();
    let events = client.fetch_events().await.unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
    let stats = dashboard_stats(&events, &bookings, today);
    assert_eq!(stats.total_bookings, 2);
    assert_eq!(stats.cancelled_bookings, 1);
    assert_eq!(stats.confirmed_revenue, 60.0);
    assert_eq!(stats.upcoming_events, 1);
    assert_eq!(stats.customers, 2);
}
