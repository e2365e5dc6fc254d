mod admin;
mod backend_setup;
mod calendar;
mod event_detail;
mod events;
mod login;
mod my_bookings;

pub use admin::AdminScreen;
pub use backend_setup::BackendSetupScreen;
pub use calendar::CalendarScreen;
pub use event_detail::EventDetailScreen;
pub use events::EventsScreen;
pub use login::LoginScreen;
pub use my_bookings::MyBookingsScreen;
