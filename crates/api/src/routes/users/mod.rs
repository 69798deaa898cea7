use axum::routing::{delete, get, post, Router};

use crate::AppState;

mod create_scancode;
mod delete_scancode;
mod delete_user;
mod edit_user;
mod fetch_avatar;
mod fetch_outreach;
mod fetch_rsvps;
mod fetch_scancodes;
mod fetch_user;
mod fetch_users;
mod regenerate_token;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_users::fetch_users))
        .route(
            "/:target",
            get(fetch_user::fetch_user)
                .patch(edit_user::edit_user)
                .delete(delete_user::delete_user),
        )
        .route("/:target/avatar", get(fetch_avatar::fetch_avatar))
        .route("/:target/rsvp", get(fetch_rsvps::fetch_rsvps))
        .route("/:target/outreach", get(fetch_outreach::fetch_outreach))
        .route(
            "/:target/regenerateToken",
            post(regenerate_token::regenerate_token),
        )
        .route(
            "/:target/scancodes",
            get(fetch_scancodes::fetch_scancodes).post(create_scancode::create_scancode),
        )
        .route(
            "/:target/scancodes/:code",
            delete(delete_scancode::delete_scancode),
        )
}

/// Public view of a user, including private fields when looking at oneself
pub fn present(user: attendance_database::User, session_user: &str) -> attendance_models::v0::User {
    if user.id == session_user {
        user.into_self()
    } else {
        user.into()
    }
}
