//! Admin dashboard: event create/edit drafts and booking statistics.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime};
use reqwest::multipart::{Form, Part};

use crate::error::ClientError;
use crate::models::{BookingRecord, Event};

/// Largest accepted event image.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(ClientError::Validation("File size must be less than 5MB".to_string()));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(ClientError::Validation("File must be an image".to_string()));
        }
        Ok(())
    }
}

/// Contents of the admin create/edit event form.
#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub location: String,
    pub price: f64,
    pub available_seats: u32,
    /// `None` keeps the current image when editing.
    pub image: Option<ImageUpload>,
}

impl EventDraft {
    /// Pre-filled draft for editing an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date,
            time: event.time,
            location: event.location.clone(),
            price: event.effective_price(),
            available_seats: event.available_seats,
            image: None,
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::Validation("Title is required".to_string()));
        }
        if self.location.trim().is_empty() {
            return Err(ClientError::Validation("Location is required".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ClientError::Validation("Price must be zero or more".to_string()));
        }
        if let Some(image) = &self.image {
            image.validate()?;
        }
        Ok(())
    }

    /// Multipart body for `POST /events` and `PUT /events/{id}`.
    pub fn to_multipart(&self) -> Result<Form, ClientError> {
        self.validate()?;
        let mut form = Form::new()
            .text("title", self.title.trim().to_string())
            .text("description", self.description.clone())
            .text("date", self.date.format("%Y-%m-%d").to_string())
            .text(
                "time",
                self.time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            )
            .text("location", self.location.trim().to_string())
            .text("price", self.price.to_string())
            .text("available_seats", self.available_seats.to_string());
        if let Some(image) = &self.image {
            let part = Part::bytes(image.bytes.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.mime_type)
                .map_err(|e| ClientError::Validation(e.to_string()))?;
            form = form.part("img", part);
        }
        Ok(form)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_bookings: usize,
    pub cancelled_bookings: usize,
    /// Sum of `total_amount` over bookings that are not cancelled.
    pub confirmed_revenue: f64,
    /// Distinct customers by e-mail (case-insensitive).
    pub customers: usize,
}

pub fn dashboard_stats(events: &[Event], bookings: &[BookingRecord], today: NaiveDate) -> DashboardStats {
    let customers: HashSet<String> = bookings
        .iter()
        .filter(|b| !b.email.trim().is_empty())
        .map(|b| b.email.trim().to_lowercase())
        .collect();
    DashboardStats {
        total_events: events.len(),
        upcoming_events: events.iter().filter(|e| e.date >= today).count(),
        total_bookings: bookings.len(),
        cancelled_bookings: bookings.iter().filter(|b| b.is_cancelled()).count(),
        confirmed_revenue: bookings
            .iter()
            .filter(|b| !b.is_cancelled())
            .map(|b| b.total_amount)
            .sum(),
        customers: customers.len(),
    }
}

/// Next `limit` events from `today` on, soonest first.
pub fn upcoming_events(events: &[Event], today: NaiveDate, limit: usize) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|e| e.date >= today).collect();
    upcoming.sort_by_key(|e| e.date);
    upcoming.truncate(limit);
    upcoming
}
