use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{discord::Discord, util::guards::target_user};

/// Replace the calendar secret of a user
pub async fn regenerate_token(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
) -> Result<Json<v0::CalendarSecret>> {
    let mut user = target_user(&db, &discord, &session, &target).await?;
    let calendar_secret = user.regenerate_calendar_secret(&db).await?;

    Ok(Json(v0::CalendarSecret { calendar_secret }))
}
