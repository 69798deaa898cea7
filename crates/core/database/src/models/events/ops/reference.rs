use attendance_result::Result;
use iso8601_timestamp::Timestamp;

use crate::ReferenceDb;
use crate::{Event, FieldsEvent, PartialEvent};

use super::{overlaps_range, AbstractEvents};

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "event"))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch multiple events by their ids
    async fn fetch_events<'a>(&self, ids: &'a [String]) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| events.get(id).cloned())
            .collect())
    }

    /// Fetch events overlapping a date range, ordered by start date
    async fn fetch_events_in_range(
        &self,
        from: Timestamp,
        to: Timestamp,
        limit: Option<i64>,
    ) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut events: Vec<Event> = events
            .values()
            .filter(|event| overlaps_range(event, from, to))
            .cloned()
            .collect();

        events.sort_by(|a, b| a.start_date.cmp(&b.start_date));

        if let Some(limit) = limit {
            events.truncate(limit.max(0) as usize);
        }

        Ok(events)
    }

    /// Update an event by its id given some data
    async fn update_event(
        &self,
        id: &str,
        partial: &PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            for field in remove {
                #[allow(clippy::disallowed_methods)]
                event.remove_field(&field);
            }

            event.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }
}
