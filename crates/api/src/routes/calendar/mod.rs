use axum::routing::{get, Router};

use crate::AppState;

mod fetch_calendar;

pub fn router() -> Router<AppState> {
    Router::new().route("/:secret", get(fetch_calendar::fetch_calendar))
}
