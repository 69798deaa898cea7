use attendance_database::{util::reference::Reference, Database, Session};
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{discord::Discord, routes::auth::session_cookie, util::guards::target_user};

/// Delete a user along with their scancodes, rsvps and sessions
pub async fn delete_user(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
) -> Result<Response> {
    let user = target_user(&db, &discord, &session, &target).await?;
    let is_self = user.id == session.user_id;

    user.delete(&db).await?;

    if is_self {
        Ok(([(SET_COOKIE, session_cookie("", 0))], StatusCode::NO_CONTENT).into_response())
    } else {
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
