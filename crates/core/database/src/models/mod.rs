mod events;
mod migrations;
mod rsvps;
mod scancodes;
mod sessions;
mod users;

pub use events::*;
pub use migrations::*;
pub use rsvps::*;
pub use scancodes::*;
pub use sessions::*;
pub use users::*;

use crate::{Database, ReferenceDb};

#[cfg(feature = "mongodb")]
use crate::MongoDb;

pub trait AbstractDatabase:
    Sync
    + Send
    + events::AbstractEvents
    + migrations::AbstractMigrations
    + rsvps::AbstractRsvps
    + scancodes::AbstractScancodes
    + sessions::AbstractSessions
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}

#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
