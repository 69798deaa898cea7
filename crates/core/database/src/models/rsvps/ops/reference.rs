use attendance_result::Result;

use crate::ReferenceDb;
use crate::{Rsvp, RsvpCompositeKey};

use super::AbstractRsvps;

#[async_trait]
impl AbstractRsvps for ReferenceDb {
    /// Fetch the rsvp of a user for an event
    async fn fetch_rsvp(&self, event_id: &str, user_id: &str) -> Result<Rsvp> {
        let rsvps = self.rsvps.lock().await;
        rsvps
            .get(&RsvpCompositeKey {
                event: event_id.to_string(),
                user: user_id.to_string(),
            })
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Create or update the rsvp keyed by its event and user
    async fn upsert_rsvp(&self, rsvp: &Rsvp) -> Result<Rsvp> {
        let mut rsvps = self.rsvps.lock().await;
        let stored = rsvp.merged_onto(rsvps.get(&rsvp.id));
        rsvps.insert(rsvp.id.clone(), stored.clone());
        Ok(stored)
    }

    /// Create or update many rsvps, either all of them or none
    async fn upsert_rsvps(&self, batch: &[Rsvp]) -> Result<Vec<Rsvp>> {
        let events = self.events.lock().await;
        if batch
            .iter()
            .any(|rsvp| !events.contains_key(&rsvp.id.event))
        {
            return Err(create_error!(FailedValidation {
                error: "one or more events do not exist".to_string()
            }));
        }

        let mut rsvps = self.rsvps.lock().await;
        Ok(batch
            .iter()
            .map(|rsvp| {
                let stored = rsvp.merged_onto(rsvps.get(&rsvp.id));
                rsvps.insert(rsvp.id.clone(), stored.clone());
                stored
            })
            .collect())
    }

    /// Fetch all rsvps for an event
    async fn fetch_event_rsvps(&self, event_id: &str) -> Result<Vec<Rsvp>> {
        let rsvps = self.rsvps.lock().await;
        Ok(rsvps
            .values()
            .filter(|rsvp| rsvp.id.event == event_id)
            .cloned()
            .collect())
    }

    /// Fetch all rsvps of a user
    async fn fetch_user_rsvps(&self, user_id: &str) -> Result<Vec<Rsvp>> {
        let rsvps = self.rsvps.lock().await;
        Ok(rsvps
            .values()
            .filter(|rsvp| rsvp.id.user == user_id)
            .cloned()
            .collect())
    }

    /// Delete all rsvps for an event
    async fn delete_event_rsvps(&self, event_id: &str) -> Result<()> {
        let mut rsvps = self.rsvps.lock().await;
        rsvps.retain(|key, _| key.event != event_id);
        Ok(())
    }

    /// Delete all rsvps of a user
    async fn delete_user_rsvps(&self, user_id: &str) -> Result<()> {
        let mut rsvps = self.rsvps.lock().await;
        rsvps.retain(|key, _| key.user != user_id);
        Ok(())
    }
}
