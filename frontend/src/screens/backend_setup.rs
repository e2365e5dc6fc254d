use dioxus::prelude::*;
use eventbook_client_core::{drain_client_logs, ClientConfig};
use crate::app::{use_api, use_session_user};
use crate::theme::{input_style, outline_button_style, primary_button_style, spacing, AppColors};
use crate::widgets::GradientCard;

#[component]
pub fn BackendSetupScreen(is_dark: bool, on_saved: EventHandler<()>) -> Element {
    let mut api = use_api();
    let mut user = use_session_user();
    let mut base_url = use_signal(|| api.peek().config().base_url.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut testing = use_signal(|| false);
    let mut log_lines = use_signal(Vec::<String>::new);

    rsx! {
        div { style: "padding: {spacing::SCREEN_PADDING}; max-width: 560px; margin: 0 auto;",
            h1 { style: "margin-bottom: 8px;", "Backend setup" }
            p { style: "opacity: 0.8; margin-bottom: 24px; font-size: 0.9rem;",
                "Set the base URL of your Eventbook API, e.g. http://127.0.0.1:5000/api."
            }
            GradientCard { is_dark,
                div { style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 4px;", "API base URL" }
                    input {
                        r#type: "url",
                        placeholder: "http://127.0.0.1:5000/api",
                        value: "{base_url()}",
                        oninput: move |ev| base_url.set(ev.value()),
                        style: input_style(is_dark),
                    }
                }
                if let Some(ref e) = error() {
                    p { style: "color: {AppColors::error(is_dark)}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                }
                if let Some(ref s) = success() {
                    p { style: "color: {AppColors::success(is_dark)}; font-size: 0.875rem; margin-bottom: 12px;", "{s}" }
                }
                div { style: "display: flex; gap: 12px;",
                    button {
                        disabled: testing(),
                        onclick: move |_| {
                            testing.set(true);
                            error.set(None);
                            success.set(None);
                            let candidate = api.peek().with_config(ClientConfig::new(base_url()));
                            spawn(async move {
                                let res = candidate.fetch_events().await;
                                testing.set(false);
                                match res {
                                    Ok(events) => {
                                        success.set(Some(format!("Connection successful! {} events listed.", events.len())));
                                    }
                                    Err(e) => {
                                        error.set(Some(e.to_string()));
                                    }
                                }
                            });
                        },
                        style: outline_button_style(is_dark),
                        if testing() { "Testing…" } else { "Test connection" }
                    }
                    button {
                        onclick: move |_| {
                            match eventbook_client_core::reconfigure(&base_url()) {
                                Ok(client) => {
                                    user.set(client.session().user());
                                    api.set(client);
                                    on_saved.call(());
                                }
                                Err(e) => error.set(Some(e.to_string())),
                            }
                        },
                        style: primary_button_style(is_dark),
                        "Save"
                    }
                }
            }
            GradientCard { is_dark, title: "Client activity".to_string(),
                button {
                    onclick: move |_| log_lines.write().extend(drain_client_logs()),
                    style: "{outline_button_style(is_dark)} margin-bottom: 8px;",
                    "Refresh log"
                }
                if log_lines.read().is_empty() {
                    p { style: "opacity: 0.7; font-size: 0.85rem;", "No activity recorded yet." }
                }
                pre { style: "font-size: 0.75rem; max-height: 240px; overflow: auto; white-space: pre-wrap;",
                    for line in log_lines.read().iter() {
                        "{line}\n"
                    }
                }
            }
        }
    }
}
