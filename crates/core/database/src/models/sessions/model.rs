use attendance_config::config;
use attendance_result::Result;
use iso8601_timestamp::{Duration, Timestamp};

use crate::{Database, User};

auto_derived!(
    /// Authenticated session of a user
    pub struct Session {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// Token presented by the client
        pub token: String,
        /// Id of the user this session belongs to
        pub user_id: String,
        /// Roles the user held when signing in
        #[serde(skip_serializing_if = "Vec::is_empty", default)]
        pub roles: Vec<String>,
        /// Time after which this session is no longer accepted
        pub expires_at: Timestamp,
    }
);

impl Session {
    /// Issue a new session for a user
    pub async fn create(db: &Database, user: &User) -> Result<Session> {
        let lifetime_days = config().await.api.session.lifetime_days;

        let session = Session {
            id: ulid::Ulid::new().to_string(),
            token: nanoid::nanoid!(64),
            user_id: user.id.to_string(),
            roles: user.roles.clone(),
            expires_at: Timestamp::now_utc() + Duration::days(lifetime_days),
        };

        db.insert_session(&session).await?;
        Ok(session)
    }

    /// Resolve a token to a live session, discarding it if it has expired
    pub async fn resolve(db: &Database, token: &str) -> Result<Session> {
        let session = db.fetch_session_by_token(token).await?;
        if session.is_expired(Timestamp::now_utc()) {
            db.delete_session(&session.id).await?;
            return Err(create_error!(InvalidSession));
        }

        Ok(session)
    }

    /// Whether this session has expired at the given time
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at <= now
    }

    /// End this session
    pub async fn end(self, db: &Database) -> Result<()> {
        db.delete_session(&self.id).await
    }
}
