//! Single integration test binary: all integration tests as modules.
//! Each test talks to its own wiremock server standing in for the booking API.
//!
//! Run: `cargo test -p eventbook_client_core`
//! Filter by module: `cargo test --test integration bookings::`

mod admin_events;
mod auth;
mod bookings;
mod common;
mod events;
mod session_store;
