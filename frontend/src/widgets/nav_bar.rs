use dioxus::prelude::*;
use crate::route::Route;
use crate::theme::AppColors;

/// Top navigation. "My bookings" needs a session, "Admin" an admin role.
#[component]
pub fn NavBar(
    is_dark: bool,
    current: Route,
    show_my_bookings: bool,
    show_admin: bool,
    #[props(!optional)] signed_in_as: Option<String>,
    on_navigate: EventHandler<Route>,
    on_logout: EventHandler<()>,
    on_toggle_theme: EventHandler<()>,
) -> Element {
    let text_color = AppColors::on_surface(is_dark);
    let primary = AppColors::primary(is_dark);
    let mut tabs = vec![(Route::Events, "Events"), (Route::Calendar, "Calendar")];
    if show_my_bookings {
        tabs.push((Route::MyBookings, "My bookings"));
    }
    if show_admin {
        tabs.push((Route::Admin, "Admin"));
    }

    rsx! {
        div { style: "display: flex; padding: 12px 24px; gap: 12px; align-items: center; border-bottom: 1px solid {AppColors::OUTLINE}; flex-wrap: wrap;",
            span { style: "font-weight: 700; font-size: 1.2rem; color: {primary}; margin-right: 12px;", "🎟 Eventbook" }
            for (route, label) in tabs {
                NavTab {
                    key: "{label}",
                    label: label.to_string(),
                    active: current.section() == route,
                    text_color: text_color.to_string(),
                    on_click: move |_| on_navigate.call(route),
                }
            }
            div { style: "flex: 1;" }
            button {
                onclick: move |_| on_toggle_theme.call(()),
                style: "background: none; border: none; cursor: pointer; font-size: 1.1rem;",
                if is_dark { "☀" } else { "☾" }
            }
            if let Some(name) = signed_in_as {
                span { style: "color: {text_color}; opacity: 0.8; font-size: 0.9rem;", "{name}" }
                button {
                    onclick: move |_| on_logout.call(()),
                    style: crate::theme::outline_button_style(is_dark),
                    "Logout"
                }
            } else {
                button {
                    onclick: move |_| on_navigate.call(Route::Login),
                    style: crate::theme::primary_button_style(is_dark),
                    "Sign in"
                }
            }
        }
    }
}

#[component]
fn NavTab(label: String, active: bool, text_color: String, on_click: EventHandler<()>) -> Element {
    let bg = if active { "rgba(124,58,237,0.35)" } else { "transparent" };
    rsx! {
        button {
            onclick: move |_| on_click.call(()),
            style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {bg}; color: {text_color};",
            "{label}"
        }
    }
}
