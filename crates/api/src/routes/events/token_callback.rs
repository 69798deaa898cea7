use attendance_config::config;
use attendance_database::{util::reference::Reference, Database, Rsvp, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, Query, State},
    response::Redirect,
    Json,
};

use crate::util::validation::Validated;

/// Check in to an event with its current code, then return to the calendar
pub async fn token_callback_redirect(
    State(db): State<Database>,
    session: Session,
    Path(id): Path<Reference>,
    Validated(Query(options)): Validated<Query<v0::OptionsTokenCallback>>,
) -> Result<Redirect> {
    Rsvp::check_in_with_code(&db, &id.id, &session.user_id, &options.code).await?;
    Ok(Redirect::to(&format!("{}/calendar", config().await.hosts.app)))
}

/// Check in to an event with its current code
pub async fn token_callback(
    State(db): State<Database>,
    session: Session,
    Path(id): Path<Reference>,
    Validated(Query(options)): Validated<Query<v0::OptionsTokenCallback>>,
) -> Result<Json<v0::Rsvp>> {
    Rsvp::check_in_with_code(&db, &id.id, &session.user_id, &options.code)
        .await
        .map(|rsvp| Json(rsvp.into()))
}
