use attendance_result::Result;
use iso8601_timestamp::Timestamp;

use crate::{Event, FieldsEvent, PartialEvent};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch multiple events by their ids
    async fn fetch_events<'a>(&self, ids: &'a [String]) -> Result<Vec<Event>>;

    /// Fetch events overlapping a date range, ordered by start date
    async fn fetch_events_in_range(
        &self,
        from: Timestamp,
        to: Timestamp,
        limit: Option<i64>,
    ) -> Result<Vec<Event>>;

    /// Update an event by its id given some data
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()>;

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()>;
}

/// Whether an event falls within a date range
///
/// An event is kept when it starts or ends before the range closes
/// and starts or ends after the range opens.
pub fn overlaps_range(event: &Event, from: Timestamp, to: Timestamp) -> bool {
    (event.start_date <= to || event.end_date <= to)
        && (event.start_date >= from || event.end_date >= from)
}
