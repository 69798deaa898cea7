use attendance_database::{Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Query, State},
    Json,
};

use crate::util::validation::Validated;

/// Fetch events overlapping a date range
pub async fn fetch_events(
    State(db): State<Database>,
    _session: Session,
    Validated(Query(options)): Validated<Query<v0::OptionsQueryEvents>>,
) -> Result<Json<Vec<v0::Event>>> {
    Ok(Json(
        db.fetch_events_in_range(options.from, options.to, options.take)
            .await?
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}
