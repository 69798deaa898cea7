use attendance_database::{util::reference::Reference, Database, FieldsUser, PartialUser, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    discord::Discord,
    util::{guards::target_user, validation::Validated},
};

/// Edit a user, `@me` for the requester
pub async fn edit_user(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
    Validated(Json(data)): Validated<Json<v0::DataEditUser>>,
) -> Result<Json<v0::User>> {
    let mut user = target_user(&db, &discord, &session, &target).await?;

    let remove: Vec<FieldsUser> = data.remove.iter().cloned().map(Into::into).collect();
    let partial: PartialUser = data.into();

    user.update(&db, partial, remove).await?;
    Ok(Json(super::present(user, &session.user_id)))
}
