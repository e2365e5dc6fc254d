//! Text-field state of the admin event form and its conversion to an [`EventDraft`].

use chrono::{NaiveDate, NaiveTime};
use eventbook_client_core::admin::{EventDraft, ImageUpload};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFormFields {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`.
    pub date: String,
    /// `HH:MM` or empty.
    pub time: String,
    pub location: String,
    pub price: String,
    pub available_seats: String,
}

impl EventFormFields {
    pub fn from_draft(draft: &EventDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            date: draft.date.format("%Y-%m-%d").to_string(),
            time: draft.time.map(|t| t.format("%H:%M").to_string()).unwrap_or_default(),
            location: draft.location.clone(),
            price: draft.price.to_string(),
            available_seats: draft.available_seats.to_string(),
        }
    }

    /// Parse the fields; the draft's own rules (required title, price >= 0,
    /// image limits) are checked too.
    pub fn to_draft(&self, image: Option<ImageUpload>) -> Result<EventDraft, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Pick a date for the event".to_string())?;
        let time = match self.time.trim() {
            "" => None,
            t => Some(
                NaiveTime::parse_from_str(t, "%H:%M")
                    .map_err(|_| "Time must look like 19:30".to_string())?,
            ),
        };
        let price = match self.price.trim() {
            "" => 0.0,
            p => p.parse::<f64>().map_err(|_| "Price must be a number".to_string())?,
        };
        let available_seats = self
            .available_seats
            .trim()
            .parse::<u32>()
            .map_err(|_| "Seats must be a whole number".to_string())?;
        let draft = EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            date,
            time,
            location: self.location.clone(),
            price,
            available_seats,
            image,
        };
        draft.validate().map_err(|e| e.to_string())?;
        Ok(draft)
    }
}
