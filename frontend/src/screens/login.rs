use dioxus::prelude::*;
use crate::app::use_api;
use crate::theme::{input_style, primary_button_style, AppColors};
use crate::widgets::GradientCard;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    Register,
}

#[component]
pub fn LoginScreen(
    is_dark: bool,
    on_signed_in: EventHandler<()>,
    on_go_setup: EventHandler<()>,
) -> Element {
    let api = use_api();
    let mut mode = use_signal(|| Mode::SignIn);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let primary = AppColors::primary(is_dark);
    let registering = mode() == Mode::Register;
    let (heading, subtitle, action, switch_label) = if registering {
        ("Create account", "Sign up to book tickets", "Register", "Already have an account? Sign in")
    } else {
        ("Login", "Enter your credentials to continue", "Sign in", "New here? Create an account")
    };

    let submit = move |ev: FormEvent| {
        ev.prevent_default();
        if email().trim().is_empty() || password().is_empty() || (registering && name().trim().is_empty()) {
            error.set(Some("Please fill in every field".to_string()));
            return;
        }
        loading.set(true);
        error.set(None);
        notice.set(None);
        let client = api.peek().clone();
        let (n, e, p) = (name(), email(), password());
        spawn(async move {
            if registering {
                match client.register(&n, &e, &p).await {
                    Ok(Some(_)) => on_signed_in.call(()),
                    Ok(None) => {
                        mode.set(Mode::SignIn);
                        notice.set(Some("Account created. Please sign in.".to_string()));
                    }
                    Err(err) => error.set(Some(format!("Registration failed: {}", err))),
                }
            } else {
                match client.login(&e, &p).await {
                    Ok(_) => on_signed_in.call(()),
                    Err(err) if err.status().is_some() => {
                        error.set(Some("Invalid email or password".to_string()))
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "safe-area", style: "padding: 24px 24px 16px; max-width: 400px; margin: 0 auto;",
            div { style: "text-align: center; margin-bottom: 24px;",
                div { style: "font-size: 48px; color: {primary};", "🎟" }
                h1 { style: "font-size: 1.5rem; font-weight: bold; margin: 16px 0 8px;", "{heading}" }
                p { style: "opacity: 0.8; font-size: 0.9rem;", "{subtitle}" }
            }
            GradientCard { is_dark,
                form {
                    onsubmit: submit,
                    if registering {
                        div { style: "margin-bottom: 16px;",
                            label { style: "display: block; margin-bottom: 4px; font-size: 0.875rem;", "Name" }
                            input {
                                r#type: "text",
                                placeholder: "Your name",
                                value: "{name()}",
                                oninput: move |ev| name.set(ev.value()),
                                style: input_style(is_dark),
                            }
                        }
                    }
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; font-size: 0.875rem;", "Email" }
                        input {
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{email()}",
                            oninput: move |ev| email.set(ev.value()),
                            style: input_style(is_dark),
                        }
                    }
                    div { style: "margin-bottom: 16px;",
                        label { style: "display: block; margin-bottom: 4px; font-size: 0.875rem;", "Password" }
                        input {
                            r#type: "password",
                            placeholder: "Password",
                            value: "{password()}",
                            oninput: move |ev| password.set(ev.value()),
                            style: input_style(is_dark),
                        }
                    }
                    if let Some(ref e) = error() {
                        p { style: "color: {AppColors::error(is_dark)}; font-size: 0.875rem; margin-bottom: 12px;", "{e}" }
                    }
                    if let Some(ref n) = notice() {
                        p { style: "color: {AppColors::success(is_dark)}; font-size: 0.875rem; margin-bottom: 12px;", "{n}" }
                    }
                    button {
                        r#type: "submit",
                        disabled: loading(),
                        style: "{primary_button_style(is_dark)} width: 100%;",
                        if loading() { "Please wait…" } else { "{action}" }
                    }
                }
            }
            div { style: "display: flex; flex-direction: column; align-items: center; gap: 8px; margin-top: 16px;",
                button {
                    onclick: move |_| {
                        error.set(None);
                        notice.set(None);
                        mode.set(if registering { Mode::SignIn } else { Mode::Register });
                    },
                    style: "background: none; border: none; color: {primary}; cursor: pointer; font-size: 0.9rem;",
                    "{switch_label}"
                }
                button {
                    onclick: move |_| on_go_setup.call(()),
                    style: "background: none; border: none; color: {primary}; cursor: pointer; font-size: 0.9rem; opacity: 0.8;",
                    "Configure backend"
                }
            }
        }
    }
}
