use dioxus::prelude::*;
use eventbook_client_core::ticket::TicketPass;
use eventbook_client_core::{BookingId, MyBooking};
use crate::app::{sync_session, use_api, use_session_user};
use crate::format::{money, short_date};
use crate::theme::{outline_button_style, primary_button_style, spacing, AppColors};
use crate::widgets::{ErrorMessage, GradientCard, Loading, TicketCard};

#[component]
pub fn MyBookingsScreen(is_dark: bool) -> Element {
    let api = use_api();
    let user = use_session_user();
    let mut bookings = use_resource(move || {
        let client = api();
        async move {
            let result = client.fetch_my_bookings().await;
            sync_session(api, user);
            result.map_err(|e| e.to_string())
        }
    });
    let mut ticket = use_signal(|| Option::<TicketPass>::None);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut cancelling = use_signal(|| Option::<BookingId>::None);

    let cancel = move |id: BookingId| {
        action_error.set(None);
        cancelling.set(Some(id));
        let client = api.peek().clone();
        spawn(async move {
            match client.cancel_booking(id).await {
                Ok(()) => bookings.restart(),
                Err(e) => action_error.set(Some(format!("Could not cancel booking: {}", e))),
            }
            cancelling.set(None);
            sync_session(api, user);
        });
    };

    let content = match bookings.cloned() {
        None => rsx! { Loading { is_dark, label: "Loading your bookings…".to_string() } },
        Some(Err(e)) => rsx! {
            ErrorMessage { is_dark, message: e, on_retry: move |_| bookings.restart() }
        },
        Some(Ok(list)) if list.is_empty() => rsx! {
            GradientCard { is_dark,
                p { style: "text-align: center; opacity: 0.8;", "You have no bookings yet." }
            }
        },
        Some(Ok(list)) => rsx! {
            for booking in list {
                BookingRow {
                    key: "{booking.booking_id}",
                    is_dark,
                    busy: cancelling() == Some(booking.booking_id),
                    booking: booking.clone(),
                    on_cancel: cancel,
                    on_show_ticket: move |pass| ticket.set(Some(pass)),
                }
            }
        },
    };

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING}; max-width: 900px; margin: 0 auto;",
            h1 { style: "margin: 0 0 16px;", "My bookings" }
            if let Some(e) = action_error() {
                p { style: "color: {AppColors::error(is_dark)};", "{e}" }
            }
            {content}
            if let Some(pass) = ticket() {
                TicketCard { is_dark, pass, on_close: move |_| ticket.set(None) }
            }
        }
    }
}

#[component]
fn BookingRow(
    is_dark: bool,
    busy: bool,
    booking: MyBooking,
    on_cancel: EventHandler<BookingId>,
    on_show_ticket: EventHandler<TicketPass>,
) -> Element {
    let status = booking.status();
    let status_color = if booking.is_cancelled() {
        AppColors::error(is_dark)
    } else {
        AppColors::success(is_dark)
    };
    let date = short_date(booking.event_date);
    let total = money(booking.total_amount);
    let pass = TicketPass::from_booking(&booking);
    let id = booking.booking_id;

    rsx! {
        GradientCard { is_dark,
            div { style: "display: flex; gap: 16px; align-items: center; flex-wrap: wrap;",
                if let Some(src) = booking.image.clone() {
                    img { src: "{src}", alt: "{booking.title}", style: "width: 96px; height: 64px; object-fit: cover; border-radius: 8px;" }
                }
                div { style: "flex: 1; min-width: 200px;",
                    h3 { style: "margin: 0 0 4px;", "{booking.title}" }
                    p { style: "margin: 0; opacity: 0.8; font-size: 0.9rem;", "📅 {date} · 📍 {booking.location}" }
                    p { style: "margin: 4px 0 0; font-size: 0.9rem;", "{booking.quantity} ticket(s) · {total}" }
                }
                span { style: "padding: 4px 10px; border-radius: 999px; border: 1px solid {status_color}; color: {status_color}; font-size: 0.8rem; text-transform: capitalize;",
                    "{status.label()}"
                }
                if let Some(pass) = pass {
                    button {
                        onclick: move |_| on_show_ticket.call(pass.clone()),
                        style: primary_button_style(is_dark),
                        "View ticket"
                    }
                    button {
                        disabled: busy,
                        onclick: move |_| on_cancel.call(id),
                        style: outline_button_style(is_dark),
                        if busy { "Cancelling…" } else { "Cancel" }
                    }
                }
            }
        }
    }
}
