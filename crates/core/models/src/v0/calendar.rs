use super::{Event, RsvpStatus};

auto_derived!(
    /// Event as shown on a member's calendar feed
    pub struct CalendarEntry {
        /// Event
        pub event: Event,
        /// Rsvp status of the member, or their default status if they have not responded
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub status: Option<RsvpStatus>,
    }
);
