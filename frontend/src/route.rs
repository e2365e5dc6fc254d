//! In-app navigation. Screens are swapped by a signal; there is no URL routing.

use eventbook_client_core::EventId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Events,
    EventDetail(EventId),
    Calendar,
    MyBookings,
    Admin,
    Login,
    Setup,
}

impl Route {
    /// Nav tab a route belongs to.
    pub fn section(self) -> Route {
        match self {
            Route::EventDetail(_) => Route::Events,
            other => other,
        }
    }

    /// Where the visitor actually lands: "My bookings" needs a session,
    /// "Admin" needs an admin.
    pub fn guard(self, signed_in: bool, is_admin: bool) -> Route {
        match self {
            Route::MyBookings if !signed_in => Route::Login,
            Route::Admin if !signed_in => Route::Login,
            Route::Admin if !is_admin => Route::Events,
            other => other,
        }
    }
}
