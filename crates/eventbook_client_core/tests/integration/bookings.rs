//! Booking submission, my-bookings, cancellation and the stale-session rule.

use eventbook_client_core::booking::{BookingFailure, BookingFlow, BookingForm};
use eventbook_client_core::ticket::TicketPass;
use eventbook_client_core::{BookingId, BookingStatus, Event, Role};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_helpers::{event_json, start_api, start_signed_in, TOKEN};

fn jazz_night() -> Event {
    serde_json::from_value(event_json(1, "Jazz Night", "Park", json!(30), 120)).unwrap()
}

fn filled_form() -> BookingForm {
    let mut form = BookingForm::new(&jazz_night());
    form.mobile = "9876543210".to_string();
    form.set_quantity(2);
    form
}

#[tokio::test]
async fn confirmed_booking_reaches_confirmed_state() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(body_json(json!({"event_id": 1, "quantity": 2, "mobile": "9876543210"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Booking successful",
            "booking": {"id": 77, "quantity": 2, "total_amount": "60.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let form = filled_form();
    let mut flow = BookingFlow::default();
    let request = flow.submit(&form).unwrap().unwrap();
    assert!(flow.is_submitting());
    flow.complete(client.create_booking(&request).await);

    match flow {
        BookingFlow::Confirmed(c) => {
            assert_eq!(c.booking_id, BookingId(77));
            assert_eq!(c.total_amount, Some(60.0));
        }
        other => panic!("expected confirmation, got {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_booking_needs_authentication() {
    let (server, client) = start_api().await;
    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "No token"})))
        .mount(&server)
        .await;

    let mut flow = BookingFlow::default();
    let request = flow.submit(&filled_form()).unwrap().unwrap();
    flow.complete(client.create_booking(&request).await);
    assert_eq!(flow, BookingFlow::Failed(BookingFailure::NeedsAuthentication));
}

#[tokio::test]
async fn server_failure_is_generic() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("POST"))
        .and(path("/api/bookings"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut flow = BookingFlow::default();
    let request = flow.submit(&filled_form()).unwrap().unwrap();
    flow.complete(client.create_booking(&request).await);
    assert!(matches!(flow, BookingFlow::Failed(BookingFailure::Generic(_))));
    assert!(client.session().is_signed_in());
}

#[tokio::test]
async fn rejected_token_clears_the_session() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/my-bookings"))
        .respond_with(ResponseTemplate::new(401).set_body_string("jwt expired"))
        .mount(&server)
        .await;

    let err = client.fetch_my_bookings().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(!client.session().is_signed_in());
}

#[tokio::test]
async fn my_bookings_and_tickets() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("GET"))
        .and(path("/api/bookings/my-bookings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "booking_id": 5, "title": "Jazz Night", "event_date": "2025-06-01T00:00:00.000Z",
                "location": "Park", "img": null, "quantity": 2, "total_amount": "60.00",
                "status": "confirmed"
            },
            {
                "booking_id": 6, "title": "Tech Talk", "event_date": "2025-06-02",
                "location": "Hub", "quantity": 1, "total_amount": 0, "status": "cancelled"
            }
        ])))
        .mount(&server)
        .await;

    let bookings = client.fetch_my_bookings().await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[1].status(), BookingStatus::Cancelled);

    let tickets: Vec<TicketPass> = bookings.iter().filter_map(TicketPass::from_booking).collect();
    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets[0].download_file_name(), "ticket-5.png");
}

#[tokio::test]
async fn cancel_booking_uses_put() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("PUT"))
        .and(path("/api/bookings/cancel/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Booking cancelled"})))
        .expect(1)
        .mount(&server)
        .await;

    client.cancel_booking(BookingId(5)).await.unwrap();
}
