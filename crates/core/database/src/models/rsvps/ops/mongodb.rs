use attendance_result::Result;
use bson::{to_bson, Document};

use crate::{is_duplicate_key, MongoDb};
use crate::{Rsvp, RsvpCompositeKey};

use super::AbstractRsvps;

static COL: &str = "rsvps";

/// Filter matching exactly one rsvp
fn key_filter(id: &RsvpCompositeKey) -> Document {
    doc! {
        "_id": {
            "event": &id.event,
            "user": &id.user
        }
    }
}

/// Update applied on upsert, a missing check-in time leaves the stored one alone
fn upsert_update(rsvp: &Rsvp) -> Result<Document> {
    let serialize = |_| create_database_error!("serialize", COL);

    let mut set = doc! {
        "status": to_bson(&rsvp.status).map_err(serialize)?,
        "updated_at": to_bson(&rsvp.updated_at).map_err(serialize)?,
    };

    if let Some(checked_in_at) = &rsvp.checked_in_at {
        set.insert(
            "checked_in_at",
            to_bson(checked_in_at).map_err(serialize)?,
        );
    }

    Ok(doc! {
        "$set": set
    })
}

#[async_trait]
impl AbstractRsvps for MongoDb {
    /// Fetch the rsvp of a user for an event
    async fn fetch_rsvp(&self, event_id: &str, user_id: &str) -> Result<Rsvp> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "_id.event": event_id,
                "_id.user": user_id
            }
        )?
        .ok_or_else(|| create_error!(NotFound))
    }

    /// Create or update the rsvp keyed by its event and user
    async fn upsert_rsvp(&self, rsvp: &Rsvp) -> Result<Rsvp> {
        let filter = key_filter(&rsvp.id);
        let update = upsert_update(rsvp)?;

        match self
            .col::<Document>(COL)
            .update_one(filter.clone(), update.clone())
            .upsert(true)
            .await
        {
            Ok(_) => {}
            Err(error) if is_duplicate_key(&error) => {
                // Lost the insert race, the row exists now
                warn!(
                    "Concurrent insert of rsvp for event {} and user {}, retrying as update",
                    rsvp.id.event, rsvp.id.user
                );

                let result = self
                    .col::<Document>(COL)
                    .update_one(filter, update)
                    .await
                    .map_err(|_| create_database_error!("update_one", COL))?;

                if result.matched_count == 0 {
                    return Err(create_error!(RsvpConflict));
                }
            }
            Err(error) => {
                error!("update_one on {COL} failed: {error}");
                return Err(create_database_error!("update_one", COL));
            }
        }

        self.fetch_rsvp(&rsvp.id.event, &rsvp.id.user).await
    }

    /// Create or update many rsvps, either all of them or none
    async fn upsert_rsvps(&self, rsvps: &[Rsvp]) -> Result<Vec<Rsvp>> {
        let mut session = self
            .start_session()
            .await
            .map_err(|_| create_database_error!("start_session", COL))?;

        session
            .start_transaction()
            .await
            .map_err(|_| create_database_error!("start_transaction", COL))?;

        let mut event_ids: Vec<&str> = rsvps.iter().map(|rsvp| rsvp.id.event.as_str()).collect();
        event_ids.sort_unstable();
        event_ids.dedup();
        let expected = event_ids.len() as u64;

        // Events may have been deleted since the batch was validated
        match self
            .col::<Document>("events")
            .count_documents(doc! {
                "_id": {
                    "$in": event_ids
                }
            })
            .session(&mut session)
            .await
        {
            Ok(count) if count == expected => {}
            Ok(_) => {
                session.abort_transaction().await.ok();
                return Err(create_error!(FailedValidation {
                    error: "one or more events do not exist".to_string()
                }));
            }
            Err(error) => {
                error!("count_documents on events failed within transaction: {error}");
                session.abort_transaction().await.ok();
                return Err(create_database_error!("count_documents", "events"));
            }
        }

        let collection = self.col::<Document>(COL);
        for rsvp in rsvps {
            let update = match upsert_update(rsvp) {
                Ok(update) => update,
                Err(error) => {
                    session.abort_transaction().await.ok();
                    return Err(error);
                }
            };

            if let Err(error) = collection
                .update_one(key_filter(&rsvp.id), update)
                .upsert(true)
                .session(&mut session)
                .await
            {
                error!("update_one on {COL} failed within transaction: {error}");
                session.abort_transaction().await.ok();

                return Err(if is_duplicate_key(&error) {
                    create_error!(RsvpConflict)
                } else {
                    create_database_error!("update_one", COL)
                });
            }
        }

        session
            .commit_transaction()
            .await
            .map_err(|_| create_database_error!("commit_transaction", COL))?;

        let mut stored = Vec::with_capacity(rsvps.len());
        for rsvp in rsvps {
            stored.push(self.fetch_rsvp(&rsvp.id.event, &rsvp.id.user).await?);
        }

        Ok(stored)
    }

    /// Fetch all rsvps for an event
    async fn fetch_event_rsvps(&self, event_id: &str) -> Result<Vec<Rsvp>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "_id.event": event_id
            }
        )
    }

    /// Fetch all rsvps of a user
    async fn fetch_user_rsvps(&self, user_id: &str) -> Result<Vec<Rsvp>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "_id.user": user_id
            }
        )
    }

    /// Delete all rsvps for an event
    async fn delete_event_rsvps(&self, event_id: &str) -> Result<()> {
        query!(
            self,
            delete_many,
            COL,
            doc! {
                "_id.event": event_id
            }
        )
        .map(|_| ())
    }

    /// Delete all rsvps of a user
    async fn delete_user_rsvps(&self, user_id: &str) -> Result<()> {
        query!(
            self,
            delete_many,
            COL,
            doc! {
                "_id.user": user_id
            }
        )
        .map(|_| ())
    }
}
