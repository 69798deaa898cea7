use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::{discord::Discord, util::guards::target_user};

/// Fetch a user, `@me` for the requester
pub async fn fetch_user(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
) -> Result<Json<v0::User>> {
    let user = target_user(&db, &discord, &session, &target).await?;
    Ok(Json(super::present(user, &session.user_id)))
}
