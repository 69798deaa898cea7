use attendance_database::{util::reference::Reference, Database, Scancode, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{discord::Discord, util::guards::target_user};

/// Delete a scancode belonging to a user
pub async fn delete_scancode(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path((target, code)): Path<(Reference, Reference)>,
) -> Result<Json<v0::Scancode>> {
    let user = target_user(&db, &discord, &session, &target).await?;
    let scancode = code.as_scancode_of(&db, &user.id).await?;

    Scancode::delete(
        &db,
        &scancode.id,
        &session.user_id,
        discord.is_mentor(&session.roles),
    )
    .await
    .map(|scancode| Json(scancode.into()))
}
