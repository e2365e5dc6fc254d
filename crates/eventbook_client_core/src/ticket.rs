//! Ticket pass for a confirmed booking.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::ids::BookingId;
use crate::models::MyBooking;

#[derive(Serialize)]
struct QrPayload<'a> {
    id: BookingId,
    event: &'a str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TicketPass {
    pub booking_id: BookingId,
    pub event_name: String,
    pub quantity: u32,
    pub total_amount: f64,
}

impl TicketPass {
    /// Cancelled bookings have no ticket.
    pub fn from_booking(booking: &MyBooking) -> Option<Self> {
        if booking.is_cancelled() {
            return None;
        }
        Some(Self {
            booking_id: booking.booking_id,
            event_name: booking.title.clone(),
            quantity: booking.quantity,
            total_amount: booking.total_amount,
        })
    }

    /// JSON encoded into the QR code: `{"id":<booking id>,"event":<title>}`.
    pub fn qr_payload(&self) -> String {
        let payload = QrPayload {
            id: self.booking_id,
            event: &self.event_name,
        };
        // A struct of an integer and a &str always serializes.
        serde_json::to_string(&payload).unwrap_or_default()
    }

    /// Printable code shown under the QR.
    pub fn ticket_code(&self) -> String {
        STANDARD.encode(self.qr_payload())
    }

    pub fn download_file_name(&self) -> String {
        format!("ticket-{}.png", self.booking_id)
    }
}
