use axum::routing::{get, post, Router};

use crate::AppState;

mod create_event;
mod delete_event;
mod edit_event;
mod fetch_event;
mod fetch_event_rsvps;
mod fetch_events;
mod fetch_rsvp;
mod fetch_token;
mod scan_in;
mod set_range_rsvp;
mod set_rsvp;
mod token_callback;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(fetch_events::fetch_events).post(create_event::create_event),
        )
        .route("/rsvps", post(set_range_rsvp::set_range_rsvp))
        .route(
            "/:id",
            get(fetch_event::fetch_event)
                .patch(edit_event::edit_event)
                .delete(delete_event::delete_event),
        )
        .route("/:id/token", get(fetch_token::fetch_token))
        .route(
            "/:id/token/callback",
            get(token_callback::token_callback_redirect).post(token_callback::token_callback),
        )
        .route(
            "/:id/rsvp",
            get(fetch_rsvp::fetch_rsvp).post(set_rsvp::set_rsvp),
        )
        .route("/:id/rsvps", get(fetch_event_rsvps::fetch_event_rsvps))
        .route("/:id/scanin", post(scan_in::scan_in))
}
