use attendance_database::Database;
use attendance_models::v0;
use attendance_result::Result;
use axum::{extract::State, Json};

use crate::util::guards::Mentor;

/// Fetch every user
pub async fn fetch_users(
    State(db): State<Database>,
    _mentor: Mentor,
) -> Result<Json<Vec<v0::User>>> {
    Ok(Json(
        db.fetch_users()
            .await?
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}
