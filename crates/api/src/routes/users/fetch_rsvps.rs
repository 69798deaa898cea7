use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{discord::Discord, util::guards::target_user};

/// Fetch every rsvp of a user
pub async fn fetch_rsvps(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
) -> Result<Json<Vec<v0::Rsvp>>> {
    let user = target_user(&db, &discord, &session, &target).await?;

    Ok(Json(
        db.fetch_user_rsvps(&user.id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}
