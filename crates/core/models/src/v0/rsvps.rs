use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::{Validate, ValidationError};

auto_derived!(
    /// Attendance intent or outcome of a user for one event
    #[derive(Copy, Hash)]
    pub enum RsvpStatus {
        /// Will attend
        Yes,
        /// Will not attend
        No,
        /// Might attend
        Maybe,
        /// Will attend but arrive late
        Late,
        /// Checked in at the event
        Attended,
    }

    /// Rsvp of a user for an event
    pub struct Rsvp {
        /// Event Id
        pub event: String,
        /// User Id
        pub user: String,
        /// Current status
        pub status: RsvpStatus,
        /// Time at which the user checked in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub checked_in_at: Option<Timestamp>,
        /// Time of the last status change
        pub updated_at: Timestamp,
    }

    /// Member as listed on an event roster
    pub struct RsvpUser {
        /// User Id
        pub id: String,
        /// First name
        pub first_name: String,
        /// Last name
        pub last_name: String,
        /// Roles held with the identity provider
        pub roles: Vec<String>,
    }

    /// Rsvp along with the member it belongs to
    pub struct RsvpWithUser {
        /// Event Id
        pub event: String,
        /// Member
        pub user: RsvpUser,
        /// Current status
        pub status: RsvpStatus,
        /// Time at which the user checked in
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub checked_in_at: Option<Timestamp>,
        /// Time of the last status change
        pub updated_at: Timestamp,
    }

    /// New Rsvp status
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct DataSetRsvp {
        /// Status to apply
        pub status: RsvpStatus,
    }

    /// New Rsvp status for every event in a date range
    #[cfg_attr(feature = "validator", derive(Validate))]
    #[cfg_attr(
        feature = "validator",
        validate(schema(function = "validate_set_range_rsvp"))
    )]
    pub struct DataSetRangeRsvp {
        /// Start of the range
        pub from: Timestamp,
        /// End of the range
        pub to: Timestamp,
        /// Status to apply
        pub status: RsvpStatus,
    }

    /// Inclusive date range
    #[cfg_attr(feature = "validator", derive(Validate))]
    #[cfg_attr(feature = "validator", validate(schema(function = "validate_date_range")))]
    pub struct OptionsDateRange {
        /// Start of the range
        pub from: Timestamp,
        /// End of the range
        pub to: Timestamp,
    }
);

#[cfg(feature = "validator")]
fn check_range(from: &Timestamp, to: &Timestamp) -> Result<(), ValidationError> {
    if from > to {
        Err(ValidationError::new("range_end_before_start"))
    } else {
        Ok(())
    }
}

#[cfg(feature = "validator")]
fn validate_set_range_rsvp(data: &DataSetRangeRsvp) -> Result<(), ValidationError> {
    check_range(&data.from, &data.to)
}

#[cfg(feature = "validator")]
fn validate_date_range(data: &OptionsDateRange) -> Result<(), ValidationError> {
    check_range(&data.from, &data.to)
}
