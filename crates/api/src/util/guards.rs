use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use attendance_database::{util::reference::Reference, Database, Session, User};
use attendance_result::{create_error, Error, ErrorType, Result};

use crate::discord::Discord;

/// Session of a user holding the mentor role
pub struct Mentor(pub Session);

#[async_trait]
impl<S> FromRequestParts<S> for Mentor
where
    Database: FromRef<S>,
    Discord: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Mentor> {
        let session = Session::from_request_parts(parts, state).await?;

        if Discord::from_ref(state).is_mentor(&session.roles) {
            Ok(Mentor(session))
        } else {
            Err(create_error!(MissingRole {
                role: "mentor".to_string()
            }))
        }
    }
}

/// Resolve the user a request acts on
///
/// `@me` is always the requester, anyone else requires mentor privileges.
pub async fn target_user(
    db: &Database,
    discord: &Discord,
    session: &Session,
    target: &Reference,
) -> Result<User> {
    if target.id == "@me" || target.id == session.user_id {
        return db.fetch_user(&session.user_id).await.map_err(|error| {
            if matches!(error.error_type, ErrorType::UnknownUser) {
                create_error!(InvalidSession)
            } else {
                error
            }
        });
    }

    if !discord.is_mentor(&session.roles) {
        return Err(create_error!(NotPrivileged));
    }

    target.as_user(db).await
}
