use attendance_config::config;
use attendance_database::{iso8601_timestamp::Timestamp, util::reference::Reference, Database};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::util::guards::Mentor;

/// Fetch the secret of an event and the check-in code valid right now
pub async fn fetch_token(
    State(db): State<Database>,
    _mentor: Mentor,
    Path(id): Path<Reference>,
) -> Result<Json<v0::EventSecret>> {
    let event = id.as_event(&db).await?;
    let code = event.check_in_code(Timestamp::now_utc(), &config().await.api.checkin)?;

    Ok(Json(v0::EventSecret {
        id: event.id,
        secret: event.secret,
        code,
    }))
}
