use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Event, Rsvp, RsvpCompositeKey, Scancode, Session, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub rsvps: Arc<Mutex<HashMap<RsvpCompositeKey, Rsvp>>>,
        pub scancodes: Arc<Mutex<HashMap<String, Scancode>>>,
        pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    }
);
