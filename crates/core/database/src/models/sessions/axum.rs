use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use attendance_result::{create_error, Error, ErrorType, Result};

use crate::{Database, Session, User};

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// Find the session token on a request, preferring the header over the cookie
fn session_token(parts: &Parts) -> Option<String> {
    if let Some(Ok(token)) = parts.headers.get("x-session-token").map(|v| v.to_str()) {
        return Some(token.to_string());
    }

    parts
        .headers
        .get_all(axum::http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, token)| token.to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    Database: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Session> {
        let token = session_token(parts).ok_or_else(|| create_error!(NotAuthenticated))?;
        Session::resolve(&Database::from_ref(state), &token).await
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for User
where
    Database: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<User> {
        let session = Session::from_request_parts(parts, state).await?;
        Database::from_ref(state)
            .fetch_user(&session.user_id)
            .await
            .map_err(|error| match error.error_type {
                ErrorType::UnknownUser => create_error!(InvalidSession),
                _ => error,
            })
    }
}
