use attendance_database::{util::reference::Reference, Database};
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::util::guards::Mentor;

/// Delete an event along with its rsvps
pub async fn delete_event(
    State(db): State<Database>,
    Mentor(mentor): Mentor,
    Path(id): Path<Reference>,
) -> Result<StatusCode> {
    id.as_event(&db).await?.delete(&db).await?;
    log::info!("Event {} deleted by {}", id.id, mentor.user_id);
    Ok(StatusCode::NO_CONTENT)
}
