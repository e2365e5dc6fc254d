use dioxus::prelude::*;
use eventbook_client_core::{Event, EventId};
use crate::format::{almost_full, price_label, seats_left, short_date};
use crate::theme::AppColors;
use crate::widgets::GradientCard;

#[component]
pub fn EventCard(is_dark: bool, event: Event, on_open: EventHandler<EventId>) -> Element {
    let id = event.id;
    let badge_bg = if event.is_free() { AppColors::success(is_dark) } else { "rgba(0,0,0,0.65)" };
    let seats_color = if almost_full(event.available_seats) || event.is_sold_out() {
        AppColors::accent(is_dark)
    } else {
        AppColors::on_surface(is_dark)
    };
    let price = price_label(event.price);
    let date = short_date(event.date);
    let seats = seats_left(event.available_seats);
    let image = event.image.clone().unwrap_or_default();

    rsx! {
        div {
            style: "cursor: pointer;",
            onclick: move |_| on_open.call(id),
            GradientCard { is_dark,
                div { style: "position: relative; height: 160px; border-radius: 8px; overflow: hidden; background: #2a2540; margin-bottom: 12px;",
                    if !image.is_empty() {
                        img { src: "{image}", alt: "{event.title}", style: "width: 100%; height: 100%; object-fit: cover;" }
                    }
                    span { style: "position: absolute; bottom: 8px; right: 8px; padding: 4px 10px; border-radius: 999px; background: {badge_bg}; color: white; font-weight: 700;",
                        "{price}"
                    }
                }
                h3 { style: "margin: 0 0 6px;", "{event.title}" }
                p { style: "opacity: 0.8; font-size: 0.9rem; margin: 0 0 10px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{event.description}"
                }
                div { style: "display: flex; gap: 12px; font-size: 0.85rem; opacity: 0.9;",
                    span { "📅 {date}" }
                    span { "📍 {event.location}" }
                }
                div { style: "margin-top: 10px; font-size: 0.85rem; color: {seats_color};", "{seats}" }
            }
        }
    }
}
