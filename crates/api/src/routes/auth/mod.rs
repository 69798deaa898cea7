use axum::routing::{get, Router};

use crate::AppState;

mod discord_callback;
mod discord_signin;
mod logout;
mod status;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(status::status))
        .route("/discord", get(discord_signin::discord_signin))
        .route("/discord/callback", get(discord_callback::discord_callback))
        .route("/logout", get(logout::logout))
}

/// Cookie carrying a freshly issued session token
pub fn session_cookie(token: &str, max_age_seconds: i64) -> String {
    format!(
        "{}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_seconds}",
        attendance_database::SESSION_COOKIE
    )
}
