use std::collections::HashSet;

use attendance_config::config;
use attendance_result::{ErrorType, Result};
use iso8601_timestamp::Timestamp;

use crate::Database;

auto_derived!(
    /// Attendance intent or outcome of a user for one event
    #[derive(Copy, Hash)]
    pub enum RsvpStatus {
        Yes,
        No,
        Maybe,
        Late,
        Attended,
    }

    /// Composite primary key consisting of event and user id
    #[derive(Hash, Default)]
    pub struct RsvpCompositeKey {
        /// Event Id
        pub event: String,
        /// User Id
        pub user: String,
    }

    /// Rsvp of a user for an event
    pub struct Rsvp {
        /// Unique rsvp id
        #[serde(rename = "_id")]
        pub id: RsvpCompositeKey,
        /// Current status
        pub status: RsvpStatus,
        /// Time at which the user checked in
        #[serde(skip_serializing_if = "Option::is_none")]
        pub checked_in_at: Option<Timestamp>,
        /// Time of the last status change
        pub updated_at: Timestamp,
    }
);

impl Rsvp {
    /// Construct a fresh rsvp for the given key
    pub fn new(event_id: &str, user_id: &str, status: RsvpStatus) -> Rsvp {
        Rsvp {
            id: RsvpCompositeKey {
                event: event_id.to_string(),
                user: user_id.to_string(),
            },
            status,
            checked_in_at: None,
            updated_at: Timestamp::now_utc(),
        }
    }

    /// Resulting record when this rsvp is written over an existing one
    pub fn merged_onto(&self, existing: Option<&Rsvp>) -> Rsvp {
        Rsvp {
            checked_in_at: self
                .checked_in_at
                .or_else(|| existing.and_then(|rsvp| rsvp.checked_in_at)),
            ..self.clone()
        }
    }

    /// Set the status of a user for an event
    pub async fn set_status(
        db: &Database,
        event_id: &str,
        user_id: &str,
        status: RsvpStatus,
    ) -> Result<Rsvp> {
        db.fetch_event(event_id).await?;
        db.upsert_rsvp(&Rsvp::new(event_id, user_id, status)).await
    }

    /// Set the status of a user for many events at once
    ///
    /// Every event must exist, otherwise nothing is written.
    pub async fn set_status_for_events(
        db: &Database,
        user_id: &str,
        event_ids: &[String],
        status: RsvpStatus,
    ) -> Result<Vec<Rsvp>> {
        let mut seen = HashSet::new();
        let ids: Vec<String> = event_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        let found = db.fetch_events(&ids).await?;
        if found.len() != ids.len() {
            return Err(create_error!(FailedValidation {
                error: "one or more events do not exist".to_string()
            }));
        }

        let rsvps: Vec<Rsvp> = ids
            .iter()
            .map(|id| Rsvp::new(id, user_id, status))
            .collect();

        db.upsert_rsvps(&rsvps).await
    }

    /// Set the status of a user for every event within a date range
    pub async fn set_status_in_range(
        db: &Database,
        user_id: &str,
        from: Timestamp,
        to: Timestamp,
        status: RsvpStatus,
    ) -> Result<Vec<Rsvp>> {
        let ids: Vec<String> = db
            .fetch_events_in_range(from, to, None)
            .await?
            .into_iter()
            .map(|event| event.id)
            .collect();

        Rsvp::set_status_for_events(db, user_id, &ids, status).await
    }

    /// Check a user in by a scanned code
    pub async fn scan_in(db: &Database, event_id: &str, code: &str) -> Result<Rsvp> {
        let scancode = match db.fetch_scancode(code).await {
            Ok(scancode) => scancode,
            Err(error) if error.error_type == ErrorType::UnknownScancode => {
                warn!("Rejected scan-in for event {event_id}: unknown scancode");
                return Err(create_error!(InvalidScancode));
            }
            Err(error) => return Err(error),
        };

        db.fetch_event(event_id).await?;
        Rsvp::check_in(db, event_id, &scancode.user).await
    }

    /// Check a user in by a time-boxed event code
    pub async fn check_in_with_code(
        db: &Database,
        event_id: &str,
        user_id: &str,
        code: &str,
    ) -> Result<Rsvp> {
        let event = db.fetch_event(event_id).await?;
        let params = config().await.api.checkin;

        if !event.verify_check_in_code(code, Timestamp::now_utc(), &params) {
            warn!("Rejected check-in code for event {event_id} from user {user_id}");
            return Err(create_error!(InvalidCheckInCode));
        }

        Rsvp::check_in(db, event_id, user_id).await
    }

    /// Mark a user as attended, leaving an existing check-in untouched
    ///
    /// Only a recorded check-in time counts as attendance, the status alone
    /// may have been set by the user.
    async fn check_in(db: &Database, event_id: &str, user_id: &str) -> Result<Rsvp> {
        if let Ok(rsvp) = db.fetch_rsvp(event_id, user_id).await {
            if rsvp.checked_in_at.is_some() {
                return Ok(rsvp);
            }
        }

        let now = Timestamp::now_utc();
        let rsvp = db
            .upsert_rsvp(&Rsvp {
                checked_in_at: Some(now),
                ..Rsvp::new(event_id, user_id, RsvpStatus::Attended)
            })
            .await?;

        info!("Checked in user {user_id} at event {event_id}");
        Ok(rsvp)
    }
}
