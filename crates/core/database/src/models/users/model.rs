use std::collections::HashMap;

use attendance_models::v0::{CalendarEntry, OutreachReport};
use attendance_result::Result;
use iso8601_timestamp::Timestamp;

use crate::{Database, EventType, RsvpStatus};

auto_derived_partial!(
    /// User
    pub struct User {
        /// Unique Id, as issued by the identity provider
        #[serde(rename = "_id")]
        pub id: String,
        /// Username
        pub username: String,
        /// First name
        pub first_name: String,
        /// Last name
        pub last_name: String,

        /// Roles held with the identity provider
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub roles: Vec<String>,
        /// Status applied to events the user has not responded to
        #[serde(skip_serializing_if = "Option::is_none")]
        pub default_status: Option<RsvpStatus>,

        /// Secret granting access to the calendar feed
        pub calendar_secret: String,
        /// Time at which this user first signed in
        pub created_at: Timestamp,
    },
    "PartialUser"
);

auto_derived!(
    /// Optional fields on user object
    pub enum FieldsUser {
        DefaultStatus,
    }
);

/// Profile handed over by the identity provider on sign in
#[derive(Debug, Clone)]
pub struct IdentityProfile {
    pub id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
}

#[allow(clippy::disallowed_methods)]
impl User {
    /// Sign in a user, creating them on first sight and refreshing their profile otherwise
    pub async fn sign_in(db: &Database, profile: IdentityProfile) -> Result<User> {
        match db.fetch_user(&profile.id).await {
            Ok(mut user) => {
                let partial = PartialUser {
                    username: Some(profile.username),
                    first_name: Some(profile.first_name),
                    last_name: Some(profile.last_name),
                    roles: Some(profile.roles),
                    ..Default::default()
                };

                user.update(db, partial, vec![]).await?;
                Ok(user)
            }
            Err(error) if matches!(error.error_type, attendance_result::ErrorType::UnknownUser) => {
                let user = User {
                    id: profile.id,
                    username: profile.username,
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    roles: profile.roles,
                    default_status: None,
                    calendar_secret: User::generate_calendar_secret(),
                    created_at: Timestamp::now_utc(),
                };

                db.insert_user(&user).await?;
                info!("Created user {} ({})", user.username, user.id);
                Ok(user)
            }
            Err(error) => Err(error),
        }
    }

    /// Generate a fresh calendar secret
    fn generate_calendar_secret() -> String {
        nanoid::nanoid!(32)
    }

    /// Update user data
    pub async fn update(
        &mut self,
        db: &Database,
        partial: PartialUser,
        remove: Vec<FieldsUser>,
    ) -> Result<()> {
        if partial == PartialUser::default() && remove.is_empty() {
            return Ok(());
        }

        for field in &remove {
            self.remove_field(field);
        }

        self.apply_options(partial.clone());

        db.update_user(&self.id, &partial, remove).await
    }

    /// Remove a field from User object
    pub fn remove_field(&mut self, field: &FieldsUser) {
        match field {
            FieldsUser::DefaultStatus => self.default_status = None,
        }
    }

    /// Replace the calendar secret, invalidating the previous one
    pub async fn regenerate_calendar_secret(&mut self, db: &Database) -> Result<String> {
        let secret = User::generate_calendar_secret();

        self.update(
            db,
            PartialUser {
                calendar_secret: Some(secret.clone()),
                ..Default::default()
            },
            vec![],
        )
        .await?;

        info!("Rotated calendar secret of user {}", self.id);
        Ok(secret)
    }

    /// Delete this user along with everything they own
    pub async fn delete(self, db: &Database) -> Result<()> {
        db.delete_user_scancodes(&self.id).await?;
        db.delete_user_rsvps(&self.id).await?;
        db.delete_user_sessions(&self.id).await?;
        db.delete_user(&self.id).await?;

        info!("Deleted user {}", self.id);
        Ok(())
    }

    /// Events within a date range along with this user's rsvp status
    ///
    /// Events the user has not responded to carry their default status.
    pub async fn calendar(
        &self,
        db: &Database,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<CalendarEntry>> {
        let events = db.fetch_events_in_range(from, to, None).await?;
        let statuses: HashMap<String, RsvpStatus> = db
            .fetch_user_rsvps(&self.id)
            .await?
            .into_iter()
            .map(|rsvp| (rsvp.id.event, rsvp.status))
            .collect();

        Ok(events
            .into_iter()
            .map(|event| {
                let status = statuses
                    .get(&event.id)
                    .copied()
                    .or(self.default_status)
                    .map(Into::into);

                CalendarEntry {
                    event: event.into(),
                    status,
                }
            })
            .collect())
    }

    /// Summarise outreach events this user attended within a date range
    pub async fn outreach_report(
        &self,
        db: &Database,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<OutreachReport> {
        let events = db.fetch_events_in_range(from, to, None).await?;
        let attended = db.fetch_user_rsvps(&self.id).await?;

        let mut report = OutreachReport {
            event_count: 0,
            hour_count: 0.0,
        };

        for event in events
            .iter()
            .filter(|event| event.event_type == EventType::Outreach)
        {
            if attended
                .iter()
                .any(|rsvp| rsvp.id.event == event.id && rsvp.checked_in_at.is_some())
            {
                report.event_count += 1;
                report.hour_count += event.duration_hours();
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use attendance_models::v0;
    use iso8601_timestamp::{Duration, Timestamp};

    use crate::{Database, Event, IdentityProfile, Rsvp, RsvpStatus, Scancode, Session, User};

    async fn event(
        db: &Database,
        title: &str,
        event_type: v0::EventType,
        start: Timestamp,
        hours: i64,
    ) -> Event {
        Event::create(
            db,
            v0::DataCreateEvent {
                title: title.to_string(),
                description: None,
                start_date: start,
                end_date: start + Duration::hours(hours),
                all_day: false,
                event_type,
            },
        )
        .await
        .unwrap()
    }

    fn profile(id: &str) -> IdentityProfile {
        IdentityProfile {
            id: id.to_string(),
            username: format!("user{id}"),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            roles: vec!["member".to_string()],
        }
    }

    #[tokio::test]
    async fn sign_in_creates_then_refreshes() {
        database_test!(|db| async move {
            let created = User::sign_in(&db, profile("1")).await.unwrap();
            assert_eq!(created.roles, vec!["member".to_string()]);

            let mut updated = profile("1");
            updated.roles = vec!["mentor".to_string()];
            let refreshed = User::sign_in(&db, updated).await.unwrap();

            assert_eq!(refreshed.id, created.id);
            assert_eq!(refreshed.calendar_secret, created.calendar_secret);
            assert_eq!(refreshed.roles, vec!["mentor".to_string()]);

            let fetched = db.fetch_user("1").await.unwrap();
            assert_eq!(fetched.roles, vec!["mentor".to_string()]);
            assert_eq!(fetched.calendar_secret, created.calendar_secret);
        });
    }

    #[tokio::test]
    async fn regenerating_calendar_secret_replaces_it() {
        database_test!(|db| async move {
            let mut user = User::sign_in(&db, profile("2")).await.unwrap();
            let before = user.calendar_secret.clone();

            let secret = user.regenerate_calendar_secret(&db).await.unwrap();
            assert_ne!(secret, before);
            assert_eq!(db.fetch_user("2").await.unwrap().calendar_secret, secret);
        });
    }

    #[tokio::test]
    async fn delete_cascades() {
        database_test!(|db| async move {
            let user = User::sign_in(&db, profile("3")).await.unwrap();
            let start = Timestamp::now_utc();
            let event = event(&db, "Build Night", v0::EventType::Regular, start, 2).await;

            Scancode::create(&db, &user.id, "CODE-3".to_string())
                .await
                .unwrap();
            Rsvp::set_status(&db, &event.id, &user.id, RsvpStatus::Yes)
                .await
                .unwrap();
            let session = Session::create(&db, &user).await.unwrap();

            user.delete(&db).await.unwrap();

            assert!(db.fetch_user("3").await.is_err());
            assert!(db.fetch_scancode("CODE-3").await.is_err());
            assert!(db.fetch_user_rsvps("3").await.unwrap().is_empty());
            assert!(db.fetch_session_by_token(&session.token).await.is_err());
            assert!(db.fetch_event(&event.id).await.is_ok());
        });
    }

    #[tokio::test]
    async fn outreach_report_counts_attended_outreach_only() {
        database_test!(|db| async move {
            let user = User::sign_in(&db, profile("4")).await.unwrap();
            let start = Timestamp::now_utc();

            let outreach = event(&db, "Library Demo", v0::EventType::Outreach, start, 3).await;

            let skipped = event(&db, "Parade", v0::EventType::Outreach, start, 5).await;

            let regular = event(&db, "Build Night", v0::EventType::Regular, start, 2).await;

            let self_reported = event(&db, "Fair", v0::EventType::Outreach, start, 4).await;

            Scancode::create(&db, &user.id, "CODE-4".to_string())
                .await
                .unwrap();
            Rsvp::scan_in(&db, &outreach.id, "CODE-4").await.unwrap();
            Rsvp::scan_in(&db, &regular.id, "CODE-4").await.unwrap();
            Rsvp::set_status(&db, &skipped.id, &user.id, RsvpStatus::Yes)
                .await
                .unwrap();

            // Attendance without a check-in is not counted
            Rsvp::set_status(&db, &self_reported.id, &user.id, RsvpStatus::Attended)
                .await
                .unwrap();

            let report = user
                .outreach_report(&db, start - Duration::days(1), start + Duration::days(1))
                .await
                .unwrap();

            assert_eq!(report.event_count, 1);
            assert!((report.hour_count - 3.0).abs() < f64::EPSILON);
        });
    }
}
