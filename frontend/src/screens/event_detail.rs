use dioxus::prelude::*;
use eventbook_client_core::booking::{BookingFailure, BookingFlow, BookingForm};
use eventbook_client_core::{Event, EventId};
use crate::app::{sync_session, use_api, use_session_user};
use crate::format::{long_date, money, price_label, seats_left};
use crate::theme::{input_style, outline_button_style, primary_button_style, spacing, AppColors};
use crate::widgets::{ErrorMessage, GradientCard, Loading};

#[component]
pub fn EventDetailScreen(
    is_dark: bool,
    event_id: EventId,
    on_back: EventHandler<()>,
    on_sign_in: EventHandler<()>,
    on_view_bookings: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut event = use_resource(move || {
        let api = api();
        async move { api.find_event(event_id).await.map_err(|e| e.to_string()) }
    });

    let content = match event.cloned() {
        None => rsx! { Loading { is_dark, label: "Loading event…".to_string() } },
        Some(Err(e)) => rsx! {
            ErrorMessage { is_dark, message: e, on_retry: move |_| event.restart() }
        },
        Some(Ok(event)) => rsx! {
            div { style: "display: grid; grid-template-columns: 2fr minmax(280px, 1fr); gap: {spacing::MD}; align-items: start;",
                EventInfo { is_dark, event: event.clone() }
                BookingPanel { is_dark, event, on_sign_in, on_view_bookings }
            }
        },
    };

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING};",
            button {
                onclick: move |_| on_back.call(()),
                style: "{outline_button_style(is_dark)} margin-bottom: 16px;",
                "← Back to events"
            }
            {content}
        }
    }
}

#[component]
fn EventInfo(is_dark: bool, event: Event) -> Element {
    let date = match event.time {
        Some(t) => format!("{} · {}", long_date(event.date), t.format("%H:%M")),
        None => long_date(event.date),
    };
    let price = price_label(event.price);
    let seats = seats_left(event.available_seats);
    let image = event.image.clone().unwrap_or_default();
    rsx! {
        GradientCard { is_dark,
            if !image.is_empty() {
                img { src: "{image}", alt: "{event.title}", style: "width: 100%; max-height: 360px; object-fit: cover; border-radius: 8px;" }
            }
            h1 { style: "margin: 16px 0 8px;", "{event.title}" }
            div { style: "display: flex; flex-wrap: wrap; gap: 16px; opacity: 0.9; margin-bottom: 16px;",
                span { "📅 {date}" }
                span { "📍 {event.location}" }
                span { "🎟 {price}" }
                span { "👥 {seats}" }
            }
            p { style: "line-height: 1.6; white-space: pre-wrap;", "{event.description}" }
        }
    }
}

#[component]
fn BookingPanel(
    is_dark: bool,
    event: Event,
    on_sign_in: EventHandler<()>,
    on_view_bookings: EventHandler<()>,
) -> Element {
    let api = use_api();
    let user = use_session_user();
    let mut form = use_signal(|| BookingForm::new(&event));
    let mut flow = use_signal(BookingFlow::default);
    let mut form_error = use_signal(|| Option::<String>::None);

    let submit = move |_: MouseEvent| {
        form_error.set(None);
        let submitted = flow.write().submit(&form.read());
        let request = match submitted {
            Ok(Some(request)) => request,
            Ok(None) => return,
            Err(e) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };
        let client = api.peek().clone();
        spawn(async move {
            let result = client.create_booking(&request).await;
            flow.write().complete(result);
            sync_session(api, user);
        });
    };

    let state = flow();
    let submitting = state.is_submitting();
    let body = match state {
        BookingFlow::Confirmed(confirmation) => {
            let f = form();
            let quantity = confirmation.quantity.unwrap_or(f.quantity());
            let total = money(confirmation.total_amount.unwrap_or(f.total()));
            let success = AppColors::success(is_dark);
            rsx! {
                div { style: "text-align: center;",
                    div { style: "font-size: 40px; color: {success};", "✔" }
                    h3 { "Booking confirmed!" }
                    p { "Booking #{confirmation.booking_id} · {quantity} ticket(s) · {total}" }
                    if let Some(message) = confirmation.message {
                        p { style: "opacity: 0.8;", "{message}" }
                    }
                    button {
                        onclick: move |_| on_view_bookings.call(()),
                        style: primary_button_style(is_dark),
                        "View my bookings"
                    }
                }
            }
        }
        BookingFlow::Failed(failure) => {
            let error = AppColors::error(is_dark);
            let needs_auth = failure == BookingFailure::NeedsAuthentication;
            rsx! {
                div { style: "text-align: center;",
                    p { style: "color: {error};", "{failure.message()}" }
                    div { style: "display: flex; gap: 12px; justify-content: center;",
                        if needs_auth {
                            button {
                                onclick: move |_| on_sign_in.call(()),
                                style: primary_button_style(is_dark),
                                "Sign in"
                            }
                        }
                        button {
                            onclick: move |_| flow.write().edit_again(),
                            style: outline_button_style(is_dark),
                            "Back to booking"
                        }
                    }
                }
            }
        }
        BookingFlow::Editing | BookingFlow::Submitting => {
            let f = form();
            if f.is_sold_out() {
                rsx! {
                    button { disabled: true, style: "{primary_button_style(is_dark)} width: 100%; opacity: 0.5;", "Sold Out" }
                }
            } else {
                let total = money(f.total());
                let can_submit = f.can_submit() && !submitting;
                let submit_opacity = if can_submit { "1" } else { "0.5" };
                rsx! {
                    p { style: "margin: 0 0 6px; font-weight: 600;", "Tickets" }
                    div { style: "display: flex; align-items: center; gap: 16px; margin-bottom: 16px;",
                        button {
                            disabled: !f.can_decrement() || submitting,
                            onclick: move |_| form.write().decrement(),
                            style: outline_button_style(is_dark),
                            "−"
                        }
                        span { style: "font-size: 1.2rem; min-width: 24px; text-align: center;", "{f.quantity()}" }
                        button {
                            disabled: !f.can_increment() || submitting,
                            onclick: move |_| form.write().increment(),
                            style: outline_button_style(is_dark),
                            "+"
                        }
                        span { style: "opacity: 0.7; font-size: 0.85rem;", "max {f.max_quantity()}" }
                    }
                    label { style: "display: block; margin-bottom: 4px; font-weight: 600;", "Mobile number" }
                    input {
                        r#type: "tel",
                        placeholder: "+91 98765 43210",
                        value: "{f.mobile}",
                        disabled: submitting,
                        oninput: move |ev| form.write().mobile = ev.value(),
                        style: input_style(is_dark),
                    }
                    if let Some(e) = form_error() {
                        p { style: "color: {AppColors::error(is_dark)}; font-size: 0.875rem;", "{e}" }
                    }
                    div { style: "display: flex; justify-content: space-between; margin: 16px 0; font-weight: 700;",
                        span { "Total" }
                        span { "{total}" }
                    }
                    button {
                        disabled: !can_submit,
                        onclick: submit,
                        style: "{primary_button_style(is_dark)} width: 100%; opacity: {submit_opacity};",
                        if submitting { "Booking…" } else { "Book now" }
                    }
                    if user().is_none() {
                        p { style: "font-size: 0.8rem; opacity: 0.7; margin-top: 8px;", "You need to be signed in to complete a booking." }
                    }
                }
            }
        }
    };

    rsx! {
        GradientCard { is_dark, title: "Book tickets".to_string(),
            {body}
        }
    }
}
