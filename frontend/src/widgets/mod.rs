mod event_card;
mod filter_panel;
mod gradient_background;
mod gradient_card;
mod nav_bar;
mod status;
mod ticket_card;

pub use event_card::EventCard;
pub use filter_panel::FilterPanel;
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
pub use nav_bar::NavBar;
pub use status::{ErrorMessage, Loading};
pub use ticket_card::TicketCard;
