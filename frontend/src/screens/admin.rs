use chrono::Local;
use dioxus::prelude::*;
use eventbook_client_core::admin::{dashboard_stats, upcoming_events, EventDraft, ImageUpload};
use eventbook_client_core::{BookingRecord, Event, EventId};
use crate::app::{sync_session, use_api, use_session_user};
use crate::format::{mime_for_file_name, money, price_label, short_date};
use crate::forms::EventFormFields;
use crate::theme::{input_style, outline_button_style, primary_button_style, spacing, AppColors};
use crate::widgets::{ErrorMessage, GradientCard, Loading};

const UPCOMING_LIMIT: usize = 5;

/// Which event the form is editing; `None` inside means "new event".
#[derive(Clone, PartialEq)]
struct Editing(Option<(EventId, EventDraft)>);

#[component]
pub fn AdminScreen(is_dark: bool) -> Element {
    let api = use_api();
    let user = use_session_user();
    let mut data = use_resource(move || {
        let client = api();
        async move {
            let result = async {
                let events = client.fetch_events().await?;
                let bookings = client.fetch_all_bookings().await?;
                Ok::<_, eventbook_client_core::ClientError>((events, bookings))
            }
            .await;
            sync_session(api, user);
            result.map_err(|e| e.to_string())
        }
    });
    let mut editing = use_signal(|| Option::<Editing>::None);
    let mut action_error = use_signal(|| Option::<String>::None);

    let delete = move |id: EventId| {
        action_error.set(None);
        let client = api.peek().clone();
        spawn(async move {
            match client.delete_event(id).await {
                Ok(()) => data.restart(),
                Err(e) => action_error.set(Some(format!("Could not delete event: {}", e))),
            }
            sync_session(api, user);
        });
    };

    let content = match data.cloned() {
        None => rsx! { Loading { is_dark, label: "Loading dashboard…".to_string() } },
        Some(Err(e)) => rsx! {
            ErrorMessage { is_dark, message: e, on_retry: move |_| data.restart() }
        },
        Some(Ok((events, bookings))) => {
            let today = Local::now().date_naive();
            let stats = dashboard_stats(&events, &bookings, today);
            let upcoming: Vec<Event> = upcoming_events(&events, today, UPCOMING_LIMIT)
                .into_iter()
                .cloned()
                .collect();
            rsx! {
                div { style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));",
                    StatCard { is_dark, label: "Events".to_string(), value: stats.total_events.to_string() }
                    StatCard { is_dark, label: "Upcoming".to_string(), value: stats.upcoming_events.to_string() }
                    StatCard { is_dark, label: "Bookings".to_string(), value: stats.total_bookings.to_string() }
                    StatCard { is_dark, label: "Cancelled".to_string(), value: stats.cancelled_bookings.to_string() }
                    StatCard { is_dark, label: "Revenue".to_string(), value: money(stats.confirmed_revenue) }
                    StatCard { is_dark, label: "Customers".to_string(), value: stats.customers.to_string() }
                }
                GradientCard { is_dark, title: "Upcoming events".to_string(),
                    if upcoming.is_empty() {
                        p { style: "opacity: 0.7;", "Nothing scheduled." }
                    }
                    for event in upcoming {
                        div { key: "{event.id}", style: "display: flex; justify-content: space-between; padding: 6px 0;",
                            span { "{event.title}" }
                            span { style: "opacity: 0.8;", "{short_date(event.date)} · {event.available_seats} seats left" }
                        }
                    }
                }
                GradientCard { is_dark, title: "Events".to_string(),
                    button {
                        onclick: move |_| editing.set(Some(Editing(None))),
                        style: "{primary_button_style(is_dark)} margin-bottom: 12px;",
                        "+ New event"
                    }
                    for event in events {
                        EventRow {
                            key: "{event.id}",
                            is_dark,
                            event: event.clone(),
                            on_edit: move |ev: Event| editing.set(Some(Editing(Some((ev.id, EventDraft::from_event(&ev)))))),
                            on_delete: delete,
                        }
                    }
                }
                GradientCard { is_dark, title: "Bookings".to_string(),
                    BookingsTable { is_dark, bookings }
                }
            }
        }
    };

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING};",
            h1 { style: "margin: 0 0 16px;", "Admin dashboard" }
            if let Some(e) = action_error() {
                p { style: "color: {AppColors::error(is_dark)};", "{e}" }
            }
            {content}
            if let Some(Editing(target)) = editing() {
                EventFormDialog {
                    is_dark,
                    event_id: target.as_ref().map(|(id, _)| *id),
                    initial: target.map(|(_, draft)| EventFormFields::from_draft(&draft)).unwrap_or_default(),
                    on_close: move |_| editing.set(None),
                    on_saved: move |_| {
                        editing.set(None);
                        data.restart();
                    },
                }
            }
        }
    }
}

#[component]
fn StatCard(is_dark: bool, label: String, value: String) -> Element {
    let primary = AppColors::primary(is_dark);
    rsx! {
        GradientCard { is_dark,
            p { style: "margin: 0; opacity: 0.7; font-size: 0.85rem;", "{label}" }
            p { style: "margin: 4px 0 0; font-size: 1.8rem; font-weight: 700; color: {primary};", "{value}" }
        }
    }
}

#[component]
fn EventRow(is_dark: bool, event: Event, on_edit: EventHandler<Event>, on_delete: EventHandler<EventId>) -> Element {
    let mut confirming = use_signal(|| false);
    let id = event.id;
    let price = price_label(event.price);
    let date = short_date(event.date);
    rsx! {
        div { style: "display: flex; gap: 12px; align-items: center; padding: 8px 0; border-bottom: 1px solid rgba(127,127,127,0.2); flex-wrap: wrap;",
            div { style: "flex: 1; min-width: 200px;",
                div { style: "font-weight: 600;", "{event.title}" }
                div { style: "opacity: 0.8; font-size: 0.85rem;", "{date} · {event.location} · {price} · {event.available_seats} seats" }
            }
            button {
                onclick: {
                    let event = event.clone();
                    move |_| on_edit.call(event.clone())
                },
                style: outline_button_style(is_dark),
                "Edit"
            }
            if confirming() {
                button {
                    onclick: move |_| {
                        confirming.set(false);
                        on_delete.call(id);
                    },
                    style: "{outline_button_style(is_dark)} color: {AppColors::error(is_dark)};",
                    "Confirm delete"
                }
                button { onclick: move |_| confirming.set(false), style: outline_button_style(is_dark), "Keep" }
            } else {
                button { onclick: move |_| confirming.set(true), style: outline_button_style(is_dark), "Delete" }
            }
        }
    }
}

#[component]
fn BookingsTable(is_dark: bool, bookings: Vec<BookingRecord>) -> Element {
    if bookings.is_empty() {
        return rsx! { p { style: "opacity: 0.7;", "No bookings yet." } };
    }
    rsx! {
        table { style: "width: 100%; border-collapse: collapse; font-size: 0.9rem;",
            thead {
                tr { style: "text-align: left; opacity: 0.7;",
                    th { "#" } th { "Customer" } th { "Event" } th { "Qty" } th { "Amount" } th { "Mobile" } th { "Status" }
                }
            }
            tbody {
                for b in bookings {
                    tr { key: "{b.id}", style: "border-top: 1px solid rgba(127,127,127,0.2);",
                        td { "{b.id}" }
                        td { div { "{b.name}" } div { style: "opacity: 0.7; font-size: 0.8rem;", "{b.email}" } }
                        td { "{b.event_title}" }
                        td { "{b.quantity}" }
                        td { "{money(b.total_amount)}" }
                        td { "{b.mobile.clone().unwrap_or_default()}" }
                        td { style: "color: {status_color(&b, is_dark)};", "{b.status().label()}" }
                    }
                }
            }
        }
    }
}

fn status_color(booking: &BookingRecord, is_dark: bool) -> &'static str {
    if booking.is_cancelled() {
        AppColors::error(is_dark)
    } else {
        AppColors::success(is_dark)
    }
}

#[component]
fn EventFormDialog(
    is_dark: bool,
    #[props(!optional)] event_id: Option<EventId>,
    initial: EventFormFields,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();
    let user = use_session_user();
    let mut fields = use_signal(|| initial.clone());
    let mut image = use_signal(|| Option::<ImageUpload>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let surface = AppColors::card(is_dark);
    let heading = if event_id.is_some() { "Edit event" } else { "New event" };

    let save = move |_: MouseEvent| {
        error.set(None);
        let draft = match fields.read().to_draft(image()) {
            Ok(d) => d,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        saving.set(true);
        let client = api.peek().clone();
        spawn(async move {
            let result = match event_id {
                Some(id) => client.update_event(id, &draft).await,
                None => client.create_event(&draft).await,
            };
            saving.set(false);
            sync_session(api, user);
            match result {
                Ok(()) => on_saved.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let pick_image = move |ev: FormEvent| async move {
        let Some(file) = ev.files().into_iter().next() else {
            return;
        };
        let file_name = file.name();
        match file.read_bytes().await {
            Ok(bytes) => {
                let upload = ImageUpload {
                    mime_type: mime_for_file_name(&file_name).to_string(),
                    file_name,
                    bytes: bytes.to_vec(),
                };
                match upload.validate() {
                    Ok(()) => {
                        error.set(None);
                        image.set(Some(upload));
                    }
                    Err(e) => {
                        image.set(None);
                        error.set(Some(e.to_string()));
                    }
                }
            }
            Err(_) => error.set(Some("Could not read the selected file".to_string())),
        }
    };

    let f = fields();
    rsx! {
        div { style: "position: fixed; inset: 0; background: rgba(0,0,0,0.6); display: flex; align-items: center; justify-content: center; z-index: 10;",
            div { style: "background: {surface}; border-radius: 16px; padding: 24px; width: min(560px, 92vw); max-height: 90vh; overflow: auto;",
                h2 { style: "margin-top: 0;", "{heading}" }
                FormField { label: "Title".to_string(),
                    input { value: "{f.title}", oninput: move |ev| fields.write().title = ev.value(), style: input_style(is_dark) }
                }
                FormField { label: "Description".to_string(),
                    textarea { value: "{f.description}", rows: "4", oninput: move |ev| fields.write().description = ev.value(), style: input_style(is_dark) }
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    FormField { label: "Date".to_string(),
                        input { r#type: "date", value: "{f.date}", oninput: move |ev| fields.write().date = ev.value(), style: input_style(is_dark) }
                    }
                    FormField { label: "Time".to_string(),
                        input { r#type: "time", value: "{f.time}", oninput: move |ev| fields.write().time = ev.value(), style: input_style(is_dark) }
                    }
                }
                FormField { label: "Location".to_string(),
                    input { value: "{f.location}", oninput: move |ev| fields.write().location = ev.value(), style: input_style(is_dark) }
                }
                div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                    FormField { label: "Price (₹)".to_string(),
                        input { r#type: "number", min: "0", step: "0.01", value: "{f.price}", oninput: move |ev| fields.write().price = ev.value(), style: input_style(is_dark) }
                    }
                    FormField { label: "Available seats".to_string(),
                        input { r#type: "number", min: "0", step: "1", value: "{f.available_seats}", oninput: move |ev| fields.write().available_seats = ev.value(), style: input_style(is_dark) }
                    }
                }
                FormField { label: "Image (max 5MB)".to_string(),
                    input { r#type: "file", accept: "image/*", onchange: pick_image }
                }
                if let Some(e) = error() {
                    p { style: "color: {AppColors::error(is_dark)}; font-size: 0.875rem;", "{e}" }
                }
                div { style: "display: flex; gap: 12px; justify-content: flex-end; margin-top: 16px;",
                    button { onclick: move |_| on_close.call(()), style: outline_button_style(is_dark), "Cancel" }
                    button {
                        disabled: saving(),
                        onclick: save,
                        style: primary_button_style(is_dark),
                        if saving() { "Saving…" } else { "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn FormField(label: String, children: Element) -> Element {
    rsx! {
        div { style: "margin-bottom: 12px;",
            label { style: "display: block; margin-bottom: 4px; font-size: 0.875rem;", "{label}" }
            {children}
        }
    }
}
