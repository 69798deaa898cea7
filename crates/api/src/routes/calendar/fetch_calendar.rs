use attendance_database::Database;
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::util::validation::Validated;

/// Fetch the calendar feed of the user holding a calendar secret
///
/// Feeds are read by calendar clients which carry no session, the secret is the credential.
pub async fn fetch_calendar(
    State(db): State<Database>,
    Path(secret): Path<String>,
    Validated(Query(range)): Validated<Query<v0::OptionsDateRange>>,
) -> Result<Json<Vec<v0::CalendarEntry>>> {
    let user = db.fetch_user_by_calendar_secret(&secret).await?;
    user.calendar(&db, range.from, range.to).await.map(Json)
}
