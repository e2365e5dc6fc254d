//! Client core for the Eventbook storefront: wire models, the booking API
//! client, session persistence and the pure view logic (filters, booking
//! form, calendar, admin stats) the UI renders.

use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

pub mod admin;
pub mod api;
pub mod booking;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod log_bridge;
pub mod models;
pub mod session;
#[cfg(not(target_arch = "wasm32"))]
pub mod storage;
pub mod ticket;
mod wire;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use ids::{BookingId, EventId, UserId};
pub use log_bridge::drain_client_logs;
pub use models::{
    BookingConfirmation, BookingRecord, BookingRequest, BookingStatus, Event, MyBooking, Role,
    Session, User,
};
pub use session::{MemorySessionStore, SessionContext, SessionStore};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::SqliteSessionStore;

static CLIENT: Lazy<RwLock<Option<ApiClient>>> = Lazy::new(|| RwLock::new(None));

/// Call once at startup. Restores any saved session from `store`.
pub fn init(config: ClientConfig, store: Box<dyn SessionStore>) -> ApiClient {
    let session = Arc::new(SessionContext::new(store));
    let client = ApiClient::new(config, session);
    client_log!("[eventbook] client configured base_url={}", client.config().base_url);
    *CLIENT.write().unwrap_or_else(|p| p.into_inner()) = Some(client.clone());
    client
}

/// The client set up by [`init`].
pub fn client() -> Result<ApiClient> {
    CLIENT
        .read()
        .unwrap_or_else(|p| p.into_inner())
        .clone()
        .ok_or(ClientError::NotConfigured)
}

pub fn is_configured() -> bool {
    CLIENT.read().unwrap_or_else(|p| p.into_inner()).is_some()
}

/// Point the client at another backend, keeping the signed-in session.
pub fn reconfigure(base_url: &str) -> Result<ApiClient> {
    let config = ClientConfig::new(base_url);
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ClientError::Validation(
            "Backend URL must start with http:// or https://".to_string(),
        ));
    }
    let mut guard = CLIENT.write().unwrap_or_else(|p| p.into_inner());
    let current = guard.as_ref().ok_or(ClientError::NotConfigured)?;
    let next = current.with_config(config);
    client_log!("[eventbook] client configured base_url={}", next.config().base_url);
    *guard = Some(next.clone());
    Ok(next)
}
