use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{discord::Discord, util::guards::target_user};

/// Fetch the scancodes of a user
pub async fn fetch_scancodes(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
) -> Result<Json<Vec<v0::Scancode>>> {
    let user = target_user(&db, &discord, &session, &target).await?;

    Ok(Json(
        db.fetch_user_scancodes(&user.id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}
