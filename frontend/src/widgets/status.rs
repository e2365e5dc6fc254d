//! Loading and error placeholders shared by the data-driven screens.

use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn Loading(is_dark: bool, label: String) -> Element {
    let color = AppColors::primary(is_dark);
    rsx! {
        div { style: "padding: 48px; text-align: center; color: {color}; opacity: 0.9;",
            "{label}"
        }
    }
}

#[component]
pub fn ErrorMessage(is_dark: bool, message: String, on_retry: EventHandler<()>) -> Element {
    let color = AppColors::error(is_dark);
    rsx! {
        div { style: "padding: 32px; text-align: center;",
            p { style: "color: {color}; margin-bottom: 12px;", "{message}" }
            button {
                onclick: move |_| on_retry.call(()),
                style: crate::theme::outline_button_style(is_dark),
                "Try again"
            }
        }
    }
}
