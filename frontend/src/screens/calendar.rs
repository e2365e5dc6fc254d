use chrono::{Local, NaiveDate};
use dioxus::prelude::*;
use eventbook_client_core::calendar::{events_on, month_grid, CalendarDay};
use eventbook_client_core::EventId;
use crate::app::use_api;
use crate::format::{long_date, price_label};
use crate::theme::{outline_button_style, spacing, AppColors};
use crate::widgets::{ErrorMessage, GradientCard, Loading};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarScreen(is_dark: bool, on_open_event: EventHandler<EventId>) -> Element {
    let api = use_api();
    let mut events = use_resource(move || {
        let api = api();
        async move { api.fetch_events().await.map_err(|e| e.to_string()) }
    });
    let today = Local::now().date_naive();
    let mut month = use_signal(|| today);
    let mut selected = use_signal(|| today);

    let content = match events.cloned() {
        None => rsx! { Loading { is_dark, label: "Loading calendar…".to_string() } },
        Some(Err(e)) => rsx! {
            ErrorMessage { is_dark, message: e, on_retry: move |_| events.restart() }
        },
        Some(Ok(list)) => {
            let grid = month_grid(month(), &list);
            let title = grid.title();
            let previous = grid.previous();
            let next = grid.next();
            let day = selected();
            let on_day: Vec<_> = events_on(&list, day).into_iter().cloned().collect();
            let day_label = long_date(day);
            rsx! {
                GradientCard { is_dark,
                    div { style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                        button {
                            disabled: previous.is_none(),
                            onclick: move |_| if let Some(p) = previous { month.set(p) },
                            style: outline_button_style(is_dark),
                            "‹"
                        }
                        h2 { style: "margin: 0;", "{title}" }
                        button {
                            disabled: next.is_none(),
                            onclick: move |_| if let Some(n) = next { month.set(n) },
                            style: outline_button_style(is_dark),
                            "›"
                        }
                    }
                    div { style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 4px;",
                        for name in WEEKDAYS {
                            div { key: "{name}", style: "text-align: center; font-size: 0.8rem; opacity: 0.7;", "{name}" }
                        }
                        for week in grid.weeks.iter() {
                            for cell in week.iter() {
                                DayCell {
                                    is_dark,
                                    day: *cell,
                                    selected: cell.is_some_and(|c| c.date == day),
                                    is_today: cell.is_some_and(|c| c.date == today),
                                    on_select: move |d| selected.set(d),
                                }
                            }
                        }
                    }
                }
                GradientCard { is_dark, title: day_label,
                    if on_day.is_empty() {
                        p { style: "opacity: 0.7;", "No events on this day." }
                    }
                    for event in on_day {
                        DayEventRow {
                            key: "{event.id}",
                            title: event.title.clone(),
                            location: event.location.clone(),
                            price: price_label(event.price),
                            on_open: move |_| on_open_event.call(event.id),
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING}; max-width: 900px; margin: 0 auto;",
            h1 { style: "margin: 0 0 16px;", "Event calendar" }
            {content}
        }
    }
}

#[component]
fn DayCell(
    is_dark: bool,
    #[props(!optional)] day: Option<CalendarDay>,
    selected: bool,
    is_today: bool,
    on_select: EventHandler<NaiveDate>,
) -> Element {
    let Some(day) = day else {
        return rsx! { div {} };
    };
    let primary = AppColors::primary(is_dark);
    let border = if selected { primary } else { "transparent" };
    let weight = if is_today { "700" } else { "400" };
    let number = day.date.format("%-d").to_string();
    rsx! {
        div {
            onclick: move |_| on_select.call(day.date),
            style: "min-height: 56px; padding: 6px; border-radius: 8px; border: 2px solid {border}; background: rgba(127,127,127,0.08); cursor: pointer; font-weight: {weight};",
            div { "{number}" }
            if day.event_count > 0 {
                div { style: "margin-top: 4px; font-size: 0.75rem; color: {primary};",
                    "{day.event_count} event(s)"
                }
            }
        }
    }
}

#[component]
fn DayEventRow(title: String, location: String, price: String, on_open: EventHandler<()>) -> Element {
    rsx! {
        div {
            onclick: move |_| on_open.call(()),
            style: "display: flex; justify-content: space-between; padding: 10px 0; border-bottom: 1px solid rgba(127,127,127,0.2); cursor: pointer;",
            span { style: "font-weight: 600;", "{title}" }
            span { style: "opacity: 0.8;", "📍 {location} · {price}" }
        }
    }
}
