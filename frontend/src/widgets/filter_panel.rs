use dioxus::prelude::*;
use eventbook_client_core::catalog::{Facets, FilterState};
use crate::format::money;
use crate::theme::{input_style, outline_button_style, AppColors};
use crate::widgets::GradientCard;

/// Search box, location checkboxes and the price slider. Facets come from the
/// whole fetched list, so the options do not shrink while filtering.
#[component]
pub fn FilterPanel(
    is_dark: bool,
    facets: Facets,
    filter: FilterState,
    on_change: EventHandler<FilterState>,
    on_clear: EventHandler<()>,
) -> Element {
    let narrowing = filter.is_narrowing(&facets);
    let threshold = money(filter.max_price);
    let max = facets.slider_max();

    rsx! {
        GradientCard { is_dark, title: "Filters".to_string(),
            input {
                r#type: "search",
                placeholder: "Search events, descriptions, places…",
                value: "{filter.search_text}",
                oninput: {
                    let filter = filter.clone();
                    move |ev: FormEvent| {
                        let mut next = filter.clone();
                        next.set_search_text(ev.value());
                        on_change.call(next);
                    }
                },
                style: input_style(is_dark),
            }
            if !facets.locations.is_empty() {
                p { style: "margin: 16px 0 6px; font-weight: 600;", "Location" }
                for location in facets.locations.iter() {
                    LocationOption {
                        key: "{location}",
                        location: location.clone(),
                        checked: filter.selected_locations.contains(location),
                        on_toggle: {
                            let filter = filter.clone();
                            move |loc: String| {
                                let mut next = filter.clone();
                                next.toggle_location(&loc);
                                on_change.call(next);
                            }
                        },
                    }
                }
            }
            p { style: "margin: 16px 0 6px; font-weight: 600;", "Max price: {threshold}" }
            input {
                r#type: "range",
                min: "0",
                max: "{max}",
                step: "1",
                value: "{filter.max_price}",
                oninput: {
                    let filter = filter.clone();
                    let facets = facets.clone();
                    move |ev: FormEvent| {
                        if let Ok(v) = ev.value().parse::<f64>() {
                            let mut next = filter.clone();
                            next.set_max_price_from_slider(v, &facets);
                            on_change.call(next);
                        }
                    }
                },
                style: "width: 100%; accent-color: {AppColors::primary(is_dark)};",
            }
            if narrowing {
                button {
                    onclick: move |_| on_clear.call(()),
                    style: "{outline_button_style(is_dark)} margin-top: 12px;",
                    "Clear filters"
                }
            }
        }
    }
}

#[component]
fn LocationOption(location: String, checked: bool, on_toggle: EventHandler<String>) -> Element {
    rsx! {
        label { style: "display: flex; gap: 8px; align-items: center; padding: 4px 0; cursor: pointer;",
            input {
                r#type: "checkbox",
                checked,
                onchange: {
                    let location = location.clone();
                    move |_| on_toggle.call(location.clone())
                },
            }
            "{location}"
        }
    }
}
