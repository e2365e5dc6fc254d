//! HTTP client for the booking API (events, bookings, auth).

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::admin::EventDraft;
use crate::client_log;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::ids::{BookingId, EventId};
use crate::models::{
    BookingConfirmation, BookingRecord, BookingRequest, Event, LoginRequest, MyBooking,
    RegisterRequest, Session,
};
use crate::session::SessionContext;

/// Cheap to clone; clones share the HTTP connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    session: Arc<SessionContext>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Arc<SessionContext>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    /// Same session, different base URL.
    pub fn with_config(&self, config: ClientConfig) -> Self {
        Self {
            http: self.http.clone(),
            config,
            session: Arc::clone(&self.session),
        }
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, bool) {
        let url = self.config.endpoint(path);
        client_log!("[eventbook] request {} {}", method, url);
        let mut rb = self.http.request(method, url);
        let token = self.session.token();
        if let Some(t) = &token {
            rb = rb.header(AUTHORIZATION, format!("Bearer {}", t));
        }
        (rb, token.is_some())
    }

    /// Sends and returns the body text of a 2xx reply.
    async fn send(&self, rb: RequestBuilder, with_token: bool) -> Result<String> {
        let resp = rb.send().await.map_err(|e| {
            client_log!("[eventbook] request failed: {}", e);
            ClientError::from(e)
        })?;
        let status = resp.status();
        let text = resp.text().await?;
        if status.is_success() {
            return Ok(text);
        }
        client_log!("[eventbook] request error status={} body={}", status.as_u16(), text);
        let err = ClientError::from_status(status.as_u16(), text);
        if err.is_unauthorized() && with_token {
            // The stored token is no longer accepted.
            if let Err(e) = self.session.sign_out() {
                client_log!("[eventbook] session clear failed: {}", e);
            }
        }
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let (rb, with_token) = self.request(Method::GET, path);
        let text = self.send(rb, with_token).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// GET /events
    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.get_json("/events").await
    }

    /// Looks the event up in the full list; there is no single-event endpoint.
    pub async fn find_event(&self, id: EventId) -> Result<Event> {
        self.fetch_events()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("event {}", id)))
    }

    /// POST /auth/login -> { token, user }. Signs the session in.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let (rb, with_token) = self.request(Method::POST, "/auth/login");
        let text = self.send(rb.json(&body), with_token).await?;
        let session: Session = serde_json::from_str(&text)?;
        self.session.sign_in(session.clone())?;
        Ok(session)
    }

    /// POST /auth/register. Signs in when the server hands back a session.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<Option<Session>> {
        let body = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let (rb, with_token) = self.request(Method::POST, "/auth/register");
        let text = self.send(rb.json(&body), with_token).await?;
        // Some servers reply with a session, others with just a message.
        match serde_json::from_str::<Session>(&text) {
            Ok(session) => {
                self.session.sign_in(session.clone())?;
                Ok(Some(session))
            }
            Err(_) => Ok(None),
        }
    }

    pub fn logout(&self) -> Result<()> {
        self.session.sign_out()
    }

    /// GET /bookings (admin)
    pub async fn fetch_all_bookings(&self) -> Result<Vec<BookingRecord>> {
        self.get_json("/bookings").await
    }

    /// GET /bookings/my-bookings
    pub async fn fetch_my_bookings(&self) -> Result<Vec<MyBooking>> {
        self.get_json("/bookings/my-bookings").await
    }

    /// POST /bookings
    pub async fn create_booking(&self, request: &BookingRequest) -> Result<BookingConfirmation> {
        let (rb, with_token) = self.request(Method::POST, "/bookings");
        let text = self.send(rb.json(request), with_token).await?;
        let confirmation: BookingConfirmation = serde_json::from_str(&text)?;
        client_log!(
            "[eventbook] booking confirmed id={} event={}",
            confirmation.booking_id,
            request.event_id
        );
        Ok(confirmation)
    }

    /// PUT /bookings/cancel/{id}
    pub async fn cancel_booking(&self, id: BookingId) -> Result<()> {
        let (rb, with_token) = self.request(Method::PUT, &format!("/bookings/cancel/{}", id));
        self.send(rb, with_token).await?;
        client_log!("[eventbook] booking cancelled id={}", id);
        Ok(())
    }

    /// POST /events (multipart)
    pub async fn create_event(&self, draft: &EventDraft) -> Result<()> {
        let form = draft.to_multipart()?;
        let (rb, with_token) = self.request(Method::POST, "/events");
        self.send(rb.multipart(form), with_token).await?;
        Ok(())
    }

    /// PUT /events/{id} (multipart)
    pub async fn update_event(&self, id: EventId, draft: &EventDraft) -> Result<()> {
        let form = draft.to_multipart()?;
        let (rb, with_token) = self.request(Method::PUT, &format!("/events/{}", id));
        self.send(rb.multipart(form), with_token).await?;
        Ok(())
    }

    /// DELETE /events/{id}
    pub async fn delete_event(&self, id: EventId) -> Result<()> {
        let (rb, with_token) = self.request(Method::DELETE, &format!("/events/{}", id));
        self.send(rb, with_token).await?;
        Ok(())
    }
}
