use dioxus::prelude::*;
use eventbook_client_core::{client_log, ApiClient, ClientConfig, MemorySessionStore, SessionStore, User};

pub use crate::route::Route;
use crate::screens::{
    AdminScreen, BackendSetupScreen, CalendarScreen, EventDetailScreen, EventsScreen, LoginScreen,
    MyBookingsScreen,
};
use crate::widgets::{GradientBackground, NavBar};

/// API client shared with every screen; replaced when the backend URL changes.
pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

/// Signed-in user as the UI sees it. Mirrors the client's session context.
pub fn use_session_user() -> Signal<Option<User>> {
    use_context::<Signal<Option<User>>>()
}

/// Re-read the session after a request that may have cleared it (HTTP 401).
pub fn sync_session(api: Signal<ApiClient>, mut user: Signal<Option<User>>) {
    let current = api.peek().session().user();
    if *user.peek() != current {
        user.set(current);
    }
}

fn bootstrap() -> ApiClient {
    match eventbook_client_core::client() {
        Ok(client) => client,
        Err(_) => eventbook_client_core::init(ClientConfig::from_env(), session_store()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn session_store() -> Box<dyn SessionStore> {
    let dir = dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("eventbook");
    match eventbook_client_core::SqliteSessionStore::open(&dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            client_log!("[eventbook] session store unavailable, using memory: {}", e);
            Box::new(MemorySessionStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn session_store() -> Box<dyn SessionStore> {
    Box::new(MemorySessionStore::new())
}

#[component]
pub fn App() -> Element {
    let api = use_context_provider(|| Signal::new(bootstrap()));
    let mut user = use_context_provider(|| Signal::new(api.peek().session().user()));
    let mut route = use_signal(|| Route::Events);
    let mut is_dark = use_signal(|| true);

    let signed_in = user().is_some();
    let is_admin = user().is_some_and(|u| u.is_admin());
    let current = route().guard(signed_in, is_admin);
    let signed_in_as = user().map(|u| if u.name.is_empty() { u.email } else { u.name });

    let current_screen = match current {
        Route::Events => rsx! {
            EventsScreen {
                is_dark: is_dark(),
                on_open_event: move |id| route.set(Route::EventDetail(id)),
            }
        },
        Route::EventDetail(event_id) => rsx! {
            EventDetailScreen {
                is_dark: is_dark(),
                event_id,
                on_back: move |_| route.set(Route::Events),
                on_sign_in: move |_| route.set(Route::Login),
                on_view_bookings: move |_| route.set(Route::MyBookings),
            }
        },
        Route::Calendar => rsx! {
            CalendarScreen {
                is_dark: is_dark(),
                on_open_event: move |id| route.set(Route::EventDetail(id)),
            }
        },
        Route::MyBookings => rsx! {
            MyBookingsScreen { is_dark: is_dark() }
        },
        Route::Admin => rsx! {
            AdminScreen { is_dark: is_dark() }
        },
        Route::Login => rsx! {
            LoginScreen {
                is_dark: is_dark(),
                on_signed_in: move |_| {
                    sync_session(api, user);
                    route.set(Route::Events);
                },
                on_go_setup: move |_| route.set(Route::Setup),
            }
        },
        Route::Setup => rsx! {
            BackendSetupScreen {
                is_dark: is_dark(),
                on_saved: move |_| route.set(Route::Events),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            GradientBackground { is_dark: is_dark(),
                NavBar {
                    is_dark: is_dark(),
                    current,
                    show_my_bookings: signed_in,
                    show_admin: is_admin,
                    signed_in_as,
                    on_navigate: move |r| route.set(r),
                    on_logout: move |_| {
                        if let Err(e) = api.peek().logout() {
                            client_log!("[eventbook] logout failed: {}", e);
                        }
                        user.set(None);
                        route.set(Route::Events);
                    },
                    on_toggle_theme: move |_| is_dark.set(!is_dark()),
                }
                {current_screen}
            }
        }
    }
}
