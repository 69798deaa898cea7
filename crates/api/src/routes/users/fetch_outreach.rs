use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    discord::Discord,
    util::{guards::target_user, validation::Validated},
};

/// Summarise the outreach events a user attended within a date range
pub async fn fetch_outreach(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
    Validated(Query(range)): Validated<Query<v0::OptionsDateRange>>,
) -> Result<Json<v0::OutreachReport>> {
    let user = target_user(&db, &discord, &session, &target).await?;
    user.outreach_report(&db, range.from, range.to)
        .await
        .map(Json)
}
