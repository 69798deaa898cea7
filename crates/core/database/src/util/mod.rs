pub mod bridge;
pub mod event_token;
pub mod reference;
