use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn GradientCard(is_dark: bool, title: Option<String>, children: Element) -> Element {
    let surface = AppColors::card(is_dark);
    rsx! {
        div {
            style: "background: {surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM}; box-shadow: 0 2px 12px rgba(0,0,0,0.12);",
            if let Some(t) = title {
                h3 { style: "margin: 0 0 12px; font-size: 1.05rem;", "{t}" }
            }
            {children}
        }
    }
}
