use std::collections::HashMap;

use attendance_database::{util::reference::Reference, Database, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

/// Fetch every rsvp for an event along with the members who sent them
pub async fn fetch_event_rsvps(
    State(db): State<Database>,
    _session: Session,
    Path(id): Path<Reference>,
) -> Result<Json<Vec<v0::RsvpWithUser>>> {
    let event = id.as_event(&db).await?;
    let rsvps = db.fetch_event_rsvps(&event.id).await?;

    let mut users: HashMap<String, v0::RsvpUser> = db
        .fetch_users()
        .await?
        .into_iter()
        .map(|user| (user.id.clone(), user.into()))
        .collect();

    Ok(Json(
        rsvps
            .into_iter()
            .filter_map(|rsvp| {
                let user = users.remove(&rsvp.id.user)?;
                Some(rsvp.into_with_user(user))
            })
            .collect(),
    ))
}
