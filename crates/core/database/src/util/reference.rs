use attendance_result::Result;

use crate::{Database, Event, Rsvp, Scancode, User};

/// Reference to some object in the database
#[derive(Deserialize, Debug, Clone)]
#[serde(transparent)]
pub struct Reference {
    /// Id of object
    pub id: String,
}

impl Reference {
    /// Create a Ref from an unchecked string
    pub fn from_unchecked(id: impl Into<String>) -> Reference {
        Reference { id: id.into() }
    }

    /// Fetch event from Ref
    pub async fn as_event(&self, db: &Database) -> Result<Event> {
        db.fetch_event(&self.id).await
    }

    /// Fetch rsvp of a user for the event referenced
    pub async fn as_rsvp(&self, db: &Database, user: &str) -> Result<Rsvp> {
        db.fetch_rsvp(&self.id, user).await
    }

    /// Fetch scancode from Ref and validate its owner
    pub async fn as_scancode_of(&self, db: &Database, user: &str) -> Result<Scancode> {
        let scancode = db.fetch_scancode(&self.id).await?;
        if scancode.user != user {
            return Err(create_error!(NotOwner));
        }

        Ok(scancode)
    }

    /// Fetch user from Ref
    pub async fn as_user(&self, db: &Database) -> Result<User> {
        db.fetch_user(&self.id).await
    }
}
