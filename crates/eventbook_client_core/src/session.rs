//! Signed-in state shared by the API client and the UI.

use std::sync::{Mutex, RwLock};

use crate::client_log;
use crate::error::Result;
use crate::models::{Session, User};

/// Where the session survives restarts.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;
    fn save(&self, session: &Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Keeps the session for the lifetime of the process only (web builds, tests).
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.slot.lock().unwrap_or_else(|p| p.into_inner()).clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.slot.lock().unwrap_or_else(|p| p.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().unwrap_or_else(|p| p.into_inner()) = None;
        Ok(())
    }
}

/// Current session plus the store it is persisted to.
pub struct SessionContext {
    current: RwLock<Option<Session>>,
    store: Box<dyn SessionStore>,
}

impl SessionContext {
    /// Restores a previously saved session. A store that fails to load starts signed out.
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        let current = match store.load() {
            Ok(s) => s,
            Err(e) => {
                client_log!("[eventbook] session restore failed: {}", e);
                None
            }
        };
        if current.is_some() {
            client_log!("[eventbook] session restored");
        }
        Self {
            current: RwLock::new(current),
            store,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemorySessionStore::new()))
    }

    pub fn sign_in(&self, session: Session) -> Result<()> {
        self.store.save(&session)?;
        client_log!("[eventbook] session signed in as {}", session.user.email);
        *self.current.write().unwrap_or_else(|p| p.into_inner()) = Some(session);
        Ok(())
    }

    /// Clears the persisted copy first (one retry), then the in-memory one.
    /// The in-memory session is dropped even when the store keeps failing.
    pub fn sign_out(&self) -> Result<()> {
        let cleared = self.store.clear().or_else(|e| {
            client_log!("[eventbook] session clear failed, retrying: {}", e);
            self.store.clear()
        });
        *self.current.write().unwrap_or_else(|p| p.into_inner()) = None;
        client_log!("[eventbook] session signed out");
        cleared
    }

    pub fn session(&self) -> Option<Session> {
        self.current.read().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .as_ref()
            .map(|s| s.token.clone())
    }

    pub fn user(&self) -> Option<User> {
        self.current
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .as_ref()
            .map(|s| s.user.clone())
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.read().unwrap_or_else(|p| p.into_inner()).is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.is_admin())
    }

    /// "My bookings" is offered to any signed-in user.
    pub fn shows_my_bookings(&self) -> bool {
        self.is_signed_in()
    }

    pub fn shows_admin(&self) -> bool {
        self.is_admin()
    }
}
