mod auth;
mod calendar;
mod events;
mod rsvps;
mod scancodes;
mod users;

pub use auth::*;
pub use calendar::*;
pub use events::*;
pub use rsvps::*;
pub use scancodes::*;
pub use users::*;
