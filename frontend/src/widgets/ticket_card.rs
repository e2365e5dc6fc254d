use dioxus::prelude::*;
use eventbook_client_core::ticket::TicketPass;
use crate::format::money;
use crate::theme::{outline_button_style, AppColors};

/// Ticket dialog for a confirmed booking: QR payload and printable code.
#[component]
pub fn TicketCard(is_dark: bool, pass: TicketPass, on_close: EventHandler<()>) -> Element {
    let surface = AppColors::card(is_dark);
    let primary = AppColors::primary(is_dark);
    let payload = pass.qr_payload();
    let code = pass.ticket_code();
    let total = money(pass.total_amount);

    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; z-index: 10;",
            div { style: "background: {surface}; border-radius: 16px; padding: 24px; width: min(420px, 90vw); text-align: center;",
                h2 { style: "margin: 0 0 4px; color: {primary};", "{pass.event_name}" }
                p { style: "opacity: 0.8; margin: 0 0 16px;", "Booking #{pass.booking_id} · {pass.quantity} ticket(s) · {total}" }
                div { style: "border: 2px dashed {AppColors::OUTLINE}; border-radius: 12px; padding: 16px; margin-bottom: 12px;",
                    p { style: "font-size: 0.75rem; opacity: 0.7; margin: 0 0 6px;", "QR payload" }
                    code { style: "font-size: 0.85rem; word-break: break-all;", "{payload}" }
                }
                p { style: "font-size: 0.75rem; opacity: 0.7; margin: 0 0 4px;", "Ticket code" }
                code { style: "display: block; font-size: 0.8rem; word-break: break-all; margin-bottom: 12px;", "{code}" }
                button {
                    onclick: move |_| on_close.call(()),
                    style: outline_button_style(is_dark),
                    "Close"
                }
            }
        }
    }
}
