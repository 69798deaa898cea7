use attendance_config::config;
use attendance_database::{Database, Session, User};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Query, State},
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
};

use crate::discord::Discord;

use super::session_cookie;

/// Complete a Discord sign in
///
/// Creates the user on their first sign in and refreshes their profile and
/// roles on every later one, then hands out a session cookie.
pub async fn discord_callback(
    State(db): State<Database>,
    State(discord): State<Discord>,
    Query(options): Query<v0::OptionsOAuthCallback>,
) -> Result<impl IntoResponse> {
    let token = discord.exchange_code(&options.code).await?;
    let profile = discord.identity(&token).await?;

    let user = User::sign_in(&db, profile).await?;
    let session = Session::create(&db, &user).await?;

    let config = config().await;
    let cookie = session_cookie(
        &session.token,
        config.api.session.lifetime_days * 24 * 60 * 60,
    );

    Ok(([(SET_COOKIE, cookie)], Redirect::to(&config.hosts.app)))
}
