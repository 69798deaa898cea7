use attendance_result::Result;

use crate::Rsvp;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractRsvps: Sync + Send {
    /// Fetch the rsvp of a user for an event
    async fn fetch_rsvp(&self, event_id: &str, user_id: &str) -> Result<Rsvp>;

    /// Create or update the rsvp keyed by its event and user
    ///
    /// A check-in time already on record is kept when the given rsvp has none.
    /// Returns the rsvp as stored.
    async fn upsert_rsvp(&self, rsvp: &Rsvp) -> Result<Rsvp>;

    /// Create or update many rsvps, either all of them or none
    async fn upsert_rsvps(&self, rsvps: &[Rsvp]) -> Result<Vec<Rsvp>>;

    /// Fetch all rsvps for an event
    async fn fetch_event_rsvps(&self, event_id: &str) -> Result<Vec<Rsvp>>;

    /// Fetch all rsvps of a user
    async fn fetch_user_rsvps(&self, user_id: &str) -> Result<Vec<Rsvp>>;

    /// Delete all rsvps for an event
    async fn delete_event_rsvps(&self, event_id: &str) -> Result<()>;

    /// Delete all rsvps of a user
    async fn delete_user_rsvps(&self, user_id: &str) -> Result<()>;
}
