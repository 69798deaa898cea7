use attendance_config::ApiCheckIn;
use attendance_models::v0;
use attendance_result::Result;
use iso8601_timestamp::Timestamp;

use crate::{util::event_token, Database};

auto_derived_partial!(
    /// Scheduled event
    pub struct Event {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Title
        pub title: String,
        /// Description
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// Start time
        pub start_date: Timestamp,
        /// End time
        pub end_date: Timestamp,
        /// Whether the event takes the whole day
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub all_day: bool,
        /// Kind of event
        pub event_type: EventType,
        /// Secret check-in codes are derived from
        pub secret: String,
    },
    "PartialEvent"
);

auto_derived!(
    /// Kind of event
    #[derive(Copy, Default)]
    pub enum EventType {
        #[default]
        Regular,
        Social,
        Outreach,
    }

    /// Optional fields on event object
    pub enum FieldsEvent {
        Description,
    }
);

#[allow(clippy::disallowed_methods)]
impl Event {
    /// Create a new event
    pub async fn create(db: &Database, data: v0::DataCreateEvent) -> Result<Event> {
        let event = Event {
            id: ulid::Ulid::new().to_string(),
            title: data.title,
            description: data.description,
            start_date: data.start_date,
            end_date: data.end_date,
            all_day: data.all_day,
            event_type: data.event_type.into(),
            secret: nanoid::nanoid!(32),
        };

        db.insert_event(&event).await?;
        info!("Created event {} ({})", event.title, event.id);
        Ok(event)
    }

    /// Update event data
    pub async fn update(
        &mut self,
        db: &Database,
        partial: PartialEvent,
        remove: Vec<FieldsEvent>,
    ) -> Result<()> {
        if partial == PartialEvent::default() && remove.is_empty() {
            return Ok(());
        }

        let start_date = partial.start_date.unwrap_or(self.start_date);
        let end_date = partial.end_date.unwrap_or(self.end_date);
        if end_date < start_date {
            return Err(create_error!(FailedValidation {
                error: "end_date must not be before start_date".to_string()
            }));
        }

        for field in &remove {
            self.remove_field(field);
        }

        self.apply_options(partial.clone());

        db.update_event(&self.id, &partial, remove).await
    }

    /// Remove a field from Event object
    pub fn remove_field(&mut self, field: &FieldsEvent) {
        match field {
            FieldsEvent::Description => self.description = None,
        }
    }

    /// Delete this event along with its rsvps
    pub async fn delete(self, db: &Database) -> Result<()> {
        // Event goes first so batch writes stop targeting it
        db.delete_event(&self.id).await?;
        db.delete_event_rsvps(&self.id).await?;

        info!("Deleted event {}", self.id);
        Ok(())
    }

    /// Length of this event in hours
    pub fn duration_hours(&self) -> f64 {
        self.end_date
            .duration_since(self.start_date)
            .as_seconds_f64()
            / 3600.0
    }

    /// Check-in code valid at the given time
    pub fn check_in_code(&self, now: Timestamp, params: &ApiCheckIn) -> Result<String> {
        event_token::issue(&self.id, &self.secret, now, params)
    }

    /// Verify a submitted check-in code at the given time
    pub fn verify_check_in_code(&self, code: &str, now: Timestamp, params: &ApiCheckIn) -> bool {
        event_token::verify(self, code, now, params)
    }
}

#[cfg(test)]
mod tests {
    use attendance_models::v0;
    use iso8601_timestamp::{Duration, Timestamp};

    use crate::{Event, EventType, FieldsEvent, PartialEvent, Rsvp, RsvpStatus};

    fn data(title: &str, start: Timestamp, hours: i64) -> v0::DataCreateEvent {
        v0::DataCreateEvent {
            title: title.to_string(),
            description: Some("Bring safety glasses".to_string()),
            start_date: start,
            end_date: start + Duration::hours(hours),
            all_day: false,
            event_type: v0::EventType::Regular,
        }
    }

    #[tokio::test]
    async fn create_and_edit() {
        database_test!(|db| async move {
            let start = Timestamp::now_utc();
            let mut event = Event::create(&db, data("Build Night", start, 2))
                .await
                .unwrap();
            assert!(!event.secret.is_empty());

            event
                .update(
                    &db,
                    PartialEvent {
                        title: Some("Late Build Night".to_string()),
                        event_type: Some(EventType::Social),
                        ..Default::default()
                    },
                    vec![FieldsEvent::Description],
                )
                .await
                .unwrap();

            let fetched = db.fetch_event(&event.id).await.unwrap();
            assert_eq!(fetched.id, event.id);
            assert_eq!(fetched.title, "Late Build Night");
            assert_eq!(fetched.description, None);
            assert_eq!(fetched.event_type, EventType::Social);
        });
    }

    #[tokio::test]
    async fn edit_rejects_inverted_range() {
        database_test!(|db| async move {
            let start = Timestamp::now_utc();
            let mut event = Event::create(&db, data("Build Night", start, 2))
                .await
                .unwrap();
            let before = db.fetch_event(&event.id).await.unwrap();

            let result = event
                .update(
                    &db,
                    PartialEvent {
                        end_date: Some(start - Duration::hours(1)),
                        ..Default::default()
                    },
                    vec![],
                )
                .await;

            assert!(result.is_err());
            assert_eq!(db.fetch_event(&event.id).await.unwrap(), before);
        });
    }

    #[tokio::test]
    async fn delete_cascades_to_rsvps() {
        database_test!(|db| async move {
            let event = Event::create(&db, data("Build Night", Timestamp::now_utc(), 2))
                .await
                .unwrap();
            Rsvp::set_status(&db, &event.id, "user", RsvpStatus::Maybe)
                .await
                .unwrap();

            let id = event.id.clone();
            event.delete(&db).await.unwrap();

            assert!(db.fetch_event(&id).await.is_err());
            assert!(db.fetch_event_rsvps(&id).await.unwrap().is_empty());
        });
    }

    #[tokio::test]
    async fn range_query_uses_overlap() {
        database_test!(|db| async move {
            let base = Timestamp::now_utc();

            let early = Event::create(&db, data("Early", base - Duration::days(10), 2))
                .await
                .unwrap();
            let spanning = Event::create(&db, data("Spanning", base - Duration::hours(1), 4))
                .await
                .unwrap();
            let inside = Event::create(&db, data("Inside", base + Duration::hours(1), 1))
                .await
                .unwrap();
            let later = Event::create(&db, data("Later", base + Duration::days(10), 2))
                .await
                .unwrap();

            let events = db
                .fetch_events_in_range(base, base + Duration::days(1), None)
                .await
                .unwrap();
            let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();

            assert_eq!(ids, vec![spanning.id.as_str(), inside.id.as_str()]);
            assert!(!ids.contains(&early.id.as_str()));
            assert!(!ids.contains(&later.id.as_str()));

            let limited = db
                .fetch_events_in_range(base, base + Duration::days(1), Some(1))
                .await
                .unwrap();
            assert_eq!(limited.len(), 1);
            assert_eq!(limited[0].id, spanning.id);
        });
    }
}
