use attendance_database::{util::reference::Reference, Database, Rsvp, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::util::validation::Validated;

/// Set the requester's rsvp status for an event
pub async fn set_rsvp(
    State(db): State<Database>,
    session: Session,
    Path(id): Path<Reference>,
    Validated(Json(data)): Validated<Json<v0::DataSetRsvp>>,
) -> Result<Json<v0::Rsvp>> {
    Rsvp::set_status(&db, &id.id, &session.user_id, data.status.into())
        .await
        .map(|rsvp| Json(rsvp.into()))
}
