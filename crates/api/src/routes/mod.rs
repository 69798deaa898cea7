use axum::routing::{get, Router};

use crate::AppState;

pub mod auth;
pub mod calendar;
pub mod events;
pub mod root;
pub mod users;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/events", events::router())
        .nest("/calendar", calendar::router())
}
