use dioxus::prelude::*;
use eventbook_client_core::catalog::{Catalog, FilterState};
use eventbook_client_core::EventId;
use crate::app::use_api;
use crate::theme::{outline_button_style, spacing};
use crate::widgets::{ErrorMessage, EventCard, FilterPanel, GradientCard, Loading};

#[component]
pub fn EventsScreen(is_dark: bool, on_open_event: EventHandler<EventId>) -> Element {
    let api = use_api();
    let mut events = use_resource(move || {
        let api = api();
        async move { api.fetch_events().await.map(Catalog::new).map_err(|e| e.to_string()) }
    });
    // `None` is the cleared filter of whatever list is loaded.
    let mut filter = use_signal(|| Option::<FilterState>::None);

    let content = match events.cloned() {
        None => rsx! { Loading { is_dark, label: "Loading events…".to_string() } },
        Some(Err(e)) => rsx! {
            ErrorMessage {
                is_dark,
                message: format!("Could not load events: {}", e),
                on_retry: move |_| events.restart(),
            }
        },
        Some(Ok(catalog)) => {
            let current = filter().unwrap_or_else(|| catalog.cleared_filter());
            let visible = catalog.visible(&current);
            let facets = catalog.facets().clone();
            let total = catalog.events().len();
            rsx! {
                div { style: "display: grid; grid-template-columns: minmax(220px, 280px) 1fr; gap: {spacing::MD}; align-items: start;",
                    FilterPanel {
                        is_dark,
                        facets,
                        filter: current.clone(),
                        on_change: move |next| filter.set(Some(next)),
                        on_clear: move |_| filter.set(None),
                    }
                    div {
                        p { style: "margin: 8px; opacity: 0.8;", "Showing {visible.len()} of {total} events" }
                        if visible.is_empty() {
                            EmptyResults {
                                is_dark,
                                has_events: !catalog.is_empty(),
                                on_clear: move |_| filter.set(None),
                            }
                        } else {
                            div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));",
                                for event in visible {
                                    EventCard {
                                        key: "{event.id}",
                                        is_dark,
                                        event: event.clone(),
                                        on_open: move |id| on_open_event.call(id),
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING};",
            h1 { style: "margin: 0 0 4px;", "Discover events" }
            p { style: "opacity: 0.8; margin: 0 0 16px;", "Concerts, talks and meetups near you." }
            {content}
        }
    }
}

#[component]
fn EmptyResults(is_dark: bool, has_events: bool, on_clear: EventHandler<()>) -> Element {
    rsx! {
        GradientCard { is_dark,
            div { style: "text-align: center; padding: 24px;",
                if has_events {
                    p { "No events match your filters." }
                    button {
                        onclick: move |_| on_clear.call(()),
                        style: outline_button_style(is_dark),
                        "Clear filters"
                    }
                } else {
                    p { "No events are scheduled yet. Check back soon." }
                }
            }
        }
    }
}
