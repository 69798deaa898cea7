use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

/// Fetch an event
pub async fn fetch_event(
    State(db): State<Database>,
    _session: Session,
    Path(id): Path<Reference>,
) -> Result<Json<v0::Event>> {
    Ok(Json(id.as_event(&db).await?.into()))
}
