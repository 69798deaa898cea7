use attendance_database::{Database, Session};
use attendance_result::Result;
use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
};

use super::session_cookie;

/// End the current session
pub async fn logout(State(db): State<Database>, session: Session) -> Result<impl IntoResponse> {
    session.end(&db).await?;
    Ok(([(SET_COOKIE, session_cookie("", 0))], StatusCode::NO_CONTENT))
}
