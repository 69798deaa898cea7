use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

/// Fetch the requester's rsvp for an event
pub async fn fetch_rsvp(
    State(db): State<Database>,
    session: Session,
    Path(id): Path<Reference>,
) -> Result<Json<v0::Rsvp>> {
    Ok(Json(id.as_rsvp(&db, &session.user_id).await?.into()))
}
