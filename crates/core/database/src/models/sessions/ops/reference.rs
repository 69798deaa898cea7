use attendance_result::Result;

use crate::ReferenceDb;
use crate::Session;

use super::AbstractSessions;

#[async_trait]
impl AbstractSessions for ReferenceDb {
    /// Insert a new session
    async fn insert_session(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        if sessions.contains_key(&session.id) {
            Err(create_database_error!("insert", "session"))
        } else {
            sessions.insert(session.id.to_string(), session.clone());
            Ok(())
        }
    }

    /// Fetch a session by its token
    async fn fetch_session_by_token(&self, token: &str) -> Result<Session> {
        let sessions = self.sessions.lock().await;
        sessions
            .values()
            .find(|session| session.token == token)
            .cloned()
            .ok_or_else(|| create_error!(InvalidSession))
    }

    /// Delete a session by its id
    async fn delete_session(&self, id: &str) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.remove(id);
        Ok(())
    }

    /// Delete all sessions of a user
    async fn delete_user_sessions(&self, user_id: &str) -> Result<()> {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, session| session.user_id != user_id);
        Ok(())
    }
}
