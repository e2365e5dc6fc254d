//! Booking form rules and the submit/confirm/fail flow.

use std::ops::RangeInclusive;

use crate::error::ClientError;
use crate::ids::EventId;
use crate::models::{BookingConfirmation, BookingRequest, Event};

/// Hard cap on tickets per booking, independent of remaining seats.
pub const MAX_TICKETS_PER_BOOKING: u32 = 10;

const MIN_MOBILE_DIGITS: usize = 7;
const MAX_MOBILE_DIGITS: usize = 15;

/// Allowed quantities for an event, `None` when sold out.
pub fn quantity_bounds(available_seats: u32) -> Option<RangeInclusive<u32>> {
    let max = available_seats.min(MAX_TICKETS_PER_BOOKING);
    (max >= 1).then(|| 1..=max)
}

/// Clamp a requested quantity into [`quantity_bounds`].
pub fn clamp_quantity(requested: u32, available_seats: u32) -> Option<u32> {
    quantity_bounds(available_seats).map(|r| requested.clamp(*r.start(), *r.end()))
}

/// Accepts an optional leading `+`, digits, spaces and dashes; 7 to 15 digits.
pub fn validate_mobile(mobile: &str) -> Result<String, ClientError> {
    let trimmed = mobile.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return Err(ClientError::Validation(
            "Enter a mobile number using digits only".to_string(),
        ));
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    if !(MIN_MOBILE_DIGITS..=MAX_MOBILE_DIGITS).contains(&digits) {
        return Err(ClientError::Validation(format!(
            "Mobile number must have {} to {} digits",
            MIN_MOBILE_DIGITS, MAX_MOBILE_DIGITS
        )));
    }
    Ok(trimmed.to_string())
}

/// Two-field booking form for one event.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub event_id: EventId,
    pub unit_price: f64,
    pub available_seats: u32,
    pub mobile: String,
    quantity: u32,
}

impl BookingForm {
    pub fn new(event: &Event) -> Self {
        Self {
            event_id: event.id,
            unit_price: event.effective_price(),
            available_seats: event.available_seats,
            mobile: String::new(),
            quantity: 1,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_sold_out(&self) -> bool {
        quantity_bounds(self.available_seats).is_none()
    }

    pub fn max_quantity(&self) -> u32 {
        quantity_bounds(self.available_seats).map_or(0, |r| *r.end())
    }

    pub fn set_quantity(&mut self, requested: u32) {
        if let Some(q) = clamp_quantity(requested, self.available_seats) {
            self.quantity = q;
        }
    }

    pub fn increment(&mut self) {
        self.set_quantity(self.quantity.saturating_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_quantity(self.quantity.saturating_sub(1));
    }

    pub fn can_increment(&self) -> bool {
        self.quantity < self.max_quantity()
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sold_out() && validate_mobile(&self.mobile).is_ok()
    }

    pub fn to_request(&self) -> Result<BookingRequest, ClientError> {
        let quantity = clamp_quantity(self.quantity, self.available_seats)
            .ok_or_else(|| ClientError::Validation("Sold Out".to_string()))?;
        let mobile = validate_mobile(&self.mobile)?;
        Ok(BookingRequest {
            event_id: self.event_id,
            quantity,
            mobile,
        })
    }
}

/// Why a submission did not go through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BookingFailure {
    /// HTTP 401: the visitor has to sign in first.
    NeedsAuthentication,
    Generic(String),
}

impl BookingFailure {
    pub fn message(&self) -> &str {
        match self {
            BookingFailure::NeedsAuthentication => "Please sign in to book tickets.",
            BookingFailure::Generic(_) => "Booking failed. Please try again.",
        }
    }
}

impl From<&ClientError> for BookingFailure {
    fn from(e: &ClientError) -> Self {
        if e.is_unauthorized() {
            BookingFailure::NeedsAuthentication
        } else {
            BookingFailure::Generic(e.to_string())
        }
    }
}

/// One submission attempt. `Confirmed` and `Failed` are terminal for that attempt.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum BookingFlow {
    #[default]
    Editing,
    Submitting,
    Confirmed(BookingConfirmation),
    Failed(BookingFailure),
}

impl BookingFlow {
    /// Validate the form and move to `Submitting`. Returns the request to send,
    /// or `None` when a submission is already in flight or finished.
    pub fn submit(&mut self, form: &BookingForm) -> Result<Option<BookingRequest>, ClientError> {
        if !matches!(self, BookingFlow::Editing) {
            return Ok(None);
        }
        let request = form.to_request()?;
        *self = BookingFlow::Submitting;
        Ok(Some(request))
    }

    /// Record the server's answer. Ignored unless a submission is in flight.
    pub fn complete(&mut self, result: Result<BookingConfirmation, ClientError>) {
        if !matches!(self, BookingFlow::Submitting) {
            return;
        }
        *self = match result {
            Ok(confirmation) => BookingFlow::Confirmed(confirmation),
            Err(e) => BookingFlow::Failed(BookingFailure::from(&e)),
        };
    }

    /// Back to the form after a failure. There is no automatic retry.
    pub fn edit_again(&mut self) {
        if matches!(self, BookingFlow::Failed(_)) {
            *self = BookingFlow::Editing;
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, BookingFlow::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::BookingId;
    use chrono::NaiveDate;

    fn event(seats: u32, price: Option<f64>) -> Event {
        Event {
            id: EventId(7),
            title: "Jazz Night".to_string(),
            description: String::new(),
            image: None,
            price,
            location: "Park".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: None,
            available_seats: seats,
        }
    }

    fn confirmation(id: i64) -> BookingConfirmation {
        BookingConfirmation {
            booking_id: BookingId(id),
            quantity: Some(2),
            total_amount: Some(60.0),
            message: None,
        }
    }

    #[test]
    fn quantity_is_capped_by_seats_and_ten() {
        assert_eq!(quantity_bounds(3), Some(1..=3));
        assert_eq!(quantity_bounds(50), Some(1..=10));
        assert_eq!(quantity_bounds(0), None);
        assert_eq!(clamp_quantity(0, 5), Some(1));
        assert_eq!(clamp_quantity(12, 50), Some(10));
        assert_eq!(clamp_quantity(4, 3), Some(3));
        assert_eq!(clamp_quantity(1, 0), None);
    }

    #[test]
    fn form_steps_stay_in_bounds() {
        let mut form = BookingForm::new(&event(2, Some(30.0)));
        form.decrement();
        assert_eq!(form.quantity(), 1);
        assert!(!form.can_decrement());
        form.increment();
        form.increment();
        assert_eq!(form.quantity(), 2);
        assert!(!form.can_increment());
        assert_eq!(form.total(), 60.0);
        form.set_quantity(99);
        assert_eq!(form.quantity(), 2);
    }

    #[test]
    fn sold_out_disables_submission() {
        let mut form = BookingForm::new(&event(0, None));
        form.mobile = "9876543210".to_string();
        assert!(form.is_sold_out());
        assert!(!form.can_submit());
        assert_eq!(form.max_quantity(), 0);
        let mut flow = BookingFlow::default();
        assert!(flow.submit(&form).is_err());
        assert_eq!(flow, BookingFlow::Editing);
    }

    #[test]
    fn mobile_validation() {
        assert!(validate_mobile("+91 98765-43210").is_ok());
        assert!(validate_mobile("5551234").is_ok());
        assert!(validate_mobile("").is_err());
        assert!(validate_mobile("12345").is_err());
        assert!(validate_mobile("call me").is_err());
        assert!(validate_mobile("1234567890123456").is_err());
    }

    #[test]
    fn request_carries_event_quantity_and_mobile() {
        let mut form = BookingForm::new(&event(20, Some(15.0)));
        form.mobile = " 9876543210 ".to_string();
        form.set_quantity(3);
        let req = form.to_request().unwrap();
        assert_eq!(req.event_id, EventId(7));
        assert_eq!(req.quantity, 3);
        assert_eq!(req.mobile, "9876543210");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({"event_id": 7, "quantity": 3, "mobile": "9876543210"})
        );
    }

    #[test]
    fn flow_confirms_once() {
        let mut form = BookingForm::new(&event(20, Some(30.0)));
        form.mobile = "9876543210".to_string();
        let mut flow = BookingFlow::default();
        assert!(flow.submit(&form).unwrap().is_some());
        assert!(flow.is_submitting());
        assert!(flow.submit(&form).unwrap().is_none());
        flow.complete(Ok(confirmation(41)));
        assert_eq!(flow, BookingFlow::Confirmed(confirmation(41)));
        flow.complete(Err(ClientError::Network("late".into())));
        assert_eq!(flow, BookingFlow::Confirmed(confirmation(41)));
    }

    #[test]
    fn unauthorized_is_reported_apart_from_generic_failures() {
        let mut form = BookingForm::new(&event(20, Some(30.0)));
        form.mobile = "9876543210".to_string();

        let mut flow = BookingFlow::default();
        flow.submit(&form).unwrap();
        flow.complete(Err(ClientError::Unauthorized("no token".into())));
        assert_eq!(flow, BookingFlow::Failed(BookingFailure::NeedsAuthentication));

        let mut flow = BookingFlow::default();
        flow.submit(&form).unwrap();
        flow.complete(Err(ClientError::Http { status: 500, body: "oops".into() }));
        match &flow {
            BookingFlow::Failed(f @ BookingFailure::Generic(_)) => {
                assert_eq!(f.message(), "Booking failed. Please try again.")
            }
            other => panic!("unexpected {:?}", other),
        }

        flow.edit_again();
        assert_eq!(flow, BookingFlow::Editing);
    }
}
