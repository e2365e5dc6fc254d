use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn GradientBackground(is_dark: bool, children: Element) -> Element {
    let (bg_start, bg_end) = if is_dark {
        (AppColors::DARK_SURFACE, "#1E1830")
    } else {
        (AppColors::LIGHT_SURFACE, "#EDE9FE")
    };
    let text = AppColors::on_surface(is_dark);
    rsx! {
        div {
            style: "min-height: 100vh; color: {text}; background: linear-gradient(to bottom, {bg_start}, {bg_end});",
            {children}
        }
    }
}
