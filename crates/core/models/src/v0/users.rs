use iso8601_timestamp::Timestamp;

use super::RsvpStatus;

#[cfg(feature = "validator")]
use validator::Validate;

auto_derived!(
    /// User
    pub struct User {
        /// Unique Id, taken from the identity provider
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Username
        pub username: String,
        /// First name
        pub first_name: String,
        /// Last name
        pub last_name: String,
        /// Roles held with the identity provider
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Vec::is_empty", default)
        )]
        pub roles: Vec<String>,
        /// Status applied to events the user has not responded to
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub default_status: Option<RsvpStatus>,
        /// Secret used to access the calendar feed
        ///
        /// Only present when fetching yourself
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub calendar_secret: Option<String>,
        /// Time at which this user first signed in
        pub created_at: Timestamp,
    }

    /// Optional fields on user object
    pub enum FieldsUser {
        DefaultStatus,
    }

    /// New user information
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataEditUser {
        /// New default status
        pub default_status: Option<RsvpStatus>,
        /// Fields to remove from user object
        #[cfg_attr(feature = "serde", serde(default))]
        pub remove: Vec<FieldsUser>,
    }

    /// Freshly generated calendar secret
    pub struct CalendarSecret {
        /// New secret
        pub calendar_secret: String,
    }

    /// Avatar of a user on the chat platform
    pub struct UserAvatar {
        /// Avatar hash, if the user has one
        pub avatar: Option<String>,
    }
);

/// Outreach participation over a date range
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct OutreachReport {
    /// Number of outreach events attended
    pub event_count: usize,
    /// Total length of those events in hours
    pub hour_count: f64,
}
