//! Event list fetch, facets over the fetched list, bearer header behaviour.

use std::sync::Arc;

use eventbook_client_core::catalog::Catalog;
use eventbook_client_core::{ApiClient, ClientConfig, ClientError, EventId, Role, SessionContext};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::test_helpers::{
    auth_headers, scenario_events, session, start_api, start_signed_in, TOKEN,
};

#[tokio::test]
async fn fetch_events_decodes_list_and_feeds_catalog() {
    let (server, client) = start_api().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scenario_events()))
        .mount(&server)
        .await;

    let events = client.fetch_events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].price, Some(30.0));
    assert!(events[1].is_free());

    let catalog = Catalog::new(events);
    assert_eq!(catalog.facets().locations, vec!["Hub".to_string(), "Park".to_string()]);
    assert_eq!(catalog.facets().max_price, 30.0);

    let mut filter = catalog.cleared_filter();
    filter.set_search_text("jazz");
    let visible = catalog.visible(&filter);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].title, "Jazz Night");
}

#[tokio::test]
async fn empty_list_is_not_an_error() {
    let (server, client) = start_api().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let catalog = Catalog::new(client.fetch_events().await.unwrap());
    assert!(catalog.is_empty());
    assert_eq!(catalog.facets().max_price, 1000.0);
}

#[tokio::test]
async fn bearer_header_only_when_signed_in() {
    let (server, client) = start_api().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scenario_events()))
        .mount(&server)
        .await;

    client.fetch_events().await.unwrap();
    client.session().sign_in(session(Role::User)).unwrap();
    client.fetch_events().await.unwrap();

    let headers = auth_headers(&server).await;
    assert_eq!(headers, vec![None, Some(format!("Bearer {}", TOKEN))]);
}

#[tokio::test]
async fn find_event_reports_missing_ids() {
    let (server, client) = start_signed_in(Role::User).await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(scenario_events()))
        .mount(&server)
        .await;

    let found = client.find_event(EventId(2)).await.unwrap();
    assert_eq!(found.title, "Tech Talk");
    let missing = client.find_event(EventId(99)).await.unwrap_err();
    assert!(matches!(missing, ClientError::NotFound(_)));
}

#[tokio::test]
async fn server_error_and_bad_body_map_to_distinct_errors() {
    let (server, client) = start_api().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;
    let err = client.fetch_events().await.unwrap_err();
    assert_eq!(err.status(), Some(500));

    let (server, client) = start_api().await;
    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    let err = client.fetch_events().await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on the discard port.
    let client = ApiClient::new(
        ClientConfig::new("http://127.0.0.1:9/api"),
        Arc::new(SessionContext::in_memory()),
    );
    let err = client.fetch_events().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
