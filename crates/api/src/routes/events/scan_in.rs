use attendance_database::{util::reference::Reference, Database, Rsvp};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::util::{guards::Mentor, validation::Validated};

/// Check in the owner of a scanned code
///
/// Scanning kiosks must be signed in with a mentor account, a member session
/// is rejected with `MissingRole` since a scancode alone checks in its owner.
pub async fn scan_in(
    State(db): State<Database>,
    Mentor(mentor): Mentor,
    Path(id): Path<Reference>,
    Validated(Json(data)): Validated<Json<v0::DataScanIn>>,
) -> Result<Json<v0::Rsvp>> {
    let rsvp = Rsvp::scan_in(&db, &id.id, &data.code).await?;
    log::info!(
        "User {} scanned in at event {} by {}",
        rsvp.id.user,
        rsvp.id.event,
        mentor.user_id
    );

    Ok(Json(rsvp.into()))
}
