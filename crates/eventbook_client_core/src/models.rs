//! Data models for events, bookings and users.
//! Field names follow the booking API's wire format (`img`, `available_seats`, ...).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ids::{BookingId, EventId, UserId};
use crate::wire;

/// A bookable event as listed by `GET /events`.
///
/// `price` is `None` for free events; a present price is never negative.
/// Absent and zero prices are treated the same everywhere (filtering, badges).
/// The API sends one `date` timestamp; its time of day lands in `time`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventWire")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    #[serde(rename = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(with = "wire::price")]
    pub price: Option<f64>,
    pub location: String,
    #[serde(with = "wire::calendar_date")]
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(with = "wire::count")]
    pub available_seats: u32,
}

#[derive(Deserialize)]
struct EventWire {
    id: EventId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "img", default)]
    image: Option<String>,
    #[serde(default, with = "wire::price")]
    price: Option<f64>,
    #[serde(default)]
    location: String,
    date: String,
    #[serde(default, with = "wire::count")]
    available_seats: u32,
}

impl TryFrom<EventWire> for Event {
    type Error = String;

    fn try_from(w: EventWire) -> Result<Self, Self::Error> {
        let (date, time) =
            wire::parse_date_time(&w.date).ok_or_else(|| format!("invalid date {:?}", w.date))?;
        Ok(Event {
            id: w.id,
            title: w.title,
            description: w.description,
            image: w.image,
            price: w.price,
            location: w.location,
            date,
            time,
            available_seats: w.available_seats,
        })
    }
}

impl Event {
    pub fn effective_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    pub fn is_free(&self) -> bool {
        self.effective_price() == 0.0
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Bearer token plus the profile it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /bookings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookingRequest {
    pub event_id: EventId,
    pub quantity: u32,
    pub mobile: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Confirmed,
    Pending,
    #[serde(alias = "canceled")]
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Unknown => "unknown",
        }
    }
}

/// Server reply to a booking. Only the id is guaranteed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "ConfirmationWire")]
pub struct BookingConfirmation {
    pub booking_id: BookingId,
    pub quantity: Option<u32>,
    pub total_amount: Option<f64>,
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct FlatConfirmation {
    #[serde(alias = "booking_id", alias = "bookingId")]
    id: BookingId,
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default, with = "wire::price")]
    total_amount: Option<f64>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ConfirmationWire {
    Nested {
        booking: FlatConfirmation,
        #[serde(default)]
        message: Option<String>,
    },
    Flat(FlatConfirmation),
}

impl From<ConfirmationWire> for BookingConfirmation {
    fn from(w: ConfirmationWire) -> Self {
        let (flat, outer_message) = match w {
            ConfirmationWire::Nested { booking, message } => (booking, message),
            ConfirmationWire::Flat(flat) => (flat, None),
        };
        BookingConfirmation {
            booking_id: flat.id,
            quantity: flat.quantity,
            total_amount: flat.total_amount,
            message: outer_message.or(flat.message),
        }
    }
}

/// Row of the admin booking list (`GET /bookings`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    #[serde(alias = "booking_id")]
    pub id: BookingId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub event_title: String,
    #[serde(default, with = "wire::count")]
    pub quantity: u32,
    #[serde(default, with = "wire::amount")]
    pub total_amount: f64,
    #[serde(default)]
    pub booking_date: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl BookingRecord {
    pub fn status(&self) -> BookingStatus {
        self.status.unwrap_or_default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status() == BookingStatus::Cancelled
    }
}

/// Row of the signed-in user's booking list (`GET /bookings/my-bookings`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MyBooking {
    #[serde(alias = "id")]
    pub booking_id: BookingId,
    #[serde(default)]
    pub title: String,
    #[serde(with = "wire::calendar_date")]
    pub event_date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "img", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, with = "wire::count")]
    pub quantity: u32,
    #[serde(default, with = "wire::amount")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl MyBooking {
    pub fn status(&self) -> BookingStatus {
        self.status.unwrap_or_default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.status() == BookingStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_decodes_wire_names() {
        let e: Event = serde_json::from_value(json!({
            "id": 1,
            "title": "Jazz Night",
            "description": "Live quartet",
            "img": "https://cdn.example.com/jazz.png",
            "price": "30.00",
            "available_seats": 120,
            "location": "Park",
            "date": "2025-06-01T19:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(e.id, EventId(1));
        assert_eq!(e.price, Some(30.0));
        assert_eq!(e.available_seats, 120);
        assert_eq!(e.date, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(e.time, NaiveTime::from_hms_opt(19, 0, 0));
        assert_eq!(e.image.as_deref(), Some("https://cdn.example.com/jazz.png"));
        assert!(!e.is_free());
    }

    #[test]
    fn absent_and_zero_price_are_both_free() {
        let free: Event = serde_json::from_value(json!({
            "id": 2, "title": "Meetup", "location": "Hub", "date": "2025-06-02"
        }))
        .unwrap();
        assert_eq!(free.price, None);
        assert_eq!(free.time, None);
        assert!(free.is_free());
        assert!(free.is_sold_out());

        let zero: Event = serde_json::from_value(json!({
            "id": 3, "title": "Talk", "price": 0, "location": "Hub", "date": "2025-06-02"
        }))
        .unwrap();
        assert_eq!(zero.effective_price(), free.effective_price());
        assert!(zero.is_free());
    }

    #[test]
    fn undecodable_date_is_an_error() {
        let bad = serde_json::from_value::<Event>(json!({"id": 4, "title": "Gig", "date": "soon"}));
        assert!(bad.is_err());
    }

    #[test]
    fn unknown_role_falls_back_to_user() {
        let u: User = serde_json::from_value(json!({"id": 5, "name": "Ann", "email": "a@x.io", "role": "organizer"})).unwrap();
        assert_eq!(u.role, Role::User);
        let admin: User = serde_json::from_value(json!({"name": "Root", "role": "admin"})).unwrap();
        assert!(admin.is_admin());
    }

    #[test]
    fn confirmation_accepts_flat_and_nested_shapes() {
        let flat: BookingConfirmation = serde_json::from_value(json!({"id": 9, "total_amount": 60.0})).unwrap();
        assert_eq!(flat.booking_id, BookingId(9));
        assert_eq!(flat.total_amount, Some(60.0));

        let aliased: BookingConfirmation = serde_json::from_value(json!({"booking_id": "10"})).unwrap();
        assert_eq!(aliased.booking_id, BookingId(10));

        let nested: BookingConfirmation = serde_json::from_value(json!({
            "message": "Booking successful",
            "booking": {"id": 11, "quantity": 2}
        }))
        .unwrap();
        assert_eq!(nested.booking_id, BookingId(11));
        assert_eq!(nested.quantity, Some(2));
        assert_eq!(nested.message.as_deref(), Some("Booking successful"));
    }

    #[test]
    fn booking_status_defaults_to_confirmed() {
        let b: MyBooking = serde_json::from_value(json!({
            "booking_id": 4, "title": "Jazz Night", "event_date": "2025-06-01",
            "location": "Park", "quantity": 2, "total_amount": "60"
        }))
        .unwrap();
        assert_eq!(b.status(), BookingStatus::Confirmed);
        assert_eq!(b.total_amount, 60.0);

        let r: BookingRecord = serde_json::from_value(json!({
            "id": 4, "name": "Ann", "email": "a@x.io", "event_title": "Jazz Night",
            "quantity": 2, "total_amount": 60, "status": "canceled"
        }))
        .unwrap();
        assert!(r.is_cancelled());

        let odd: BookingRecord = serde_json::from_value(json!({"id": 5, "status": "refunded"})).unwrap();
        assert_eq!(odd.status(), BookingStatus::Unknown);
    }
}
