use iso8601_timestamp::Timestamp;

#[cfg(feature = "validator")]
use validator::{Validate, ValidationError};

auto_derived!(
    /// Kind of event
    #[derive(Copy, Default)]
    pub enum EventType {
        /// Regular meeting
        #[default]
        Regular,
        /// Social gathering
        Social,
        /// Outreach, counted towards outreach reports
        Outreach,
    }

    /// Scheduled event
    pub struct Event {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Title
        pub title: String,
        /// Description
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        pub description: Option<String>,
        /// Start time
        pub start_date: Timestamp,
        /// End time
        pub end_date: Timestamp,
        /// Whether the event takes the whole day
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "crate::if_false", default))]
        pub all_day: bool,
        /// Kind of event
        pub event_type: EventType,
    }

    /// Event secret together with the check-in code issued right now
    pub struct EventSecret {
        /// Event Id
        pub id: String,
        /// Event secret
        pub secret: String,
        /// Currently issued check-in code
        pub code: String,
    }

    /// Optional fields on event object
    pub enum FieldsEvent {
        Description,
    }

    /// New event information
    #[cfg_attr(feature = "validator", derive(Validate))]
    #[cfg_attr(feature = "validator", validate(schema(function = "validate_create_event")))]
    pub struct DataCreateEvent {
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub title: String,
        /// Event description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2000)))]
        #[cfg_attr(feature = "serde", serde(default))]
        pub description: Option<String>,
        /// Start time
        pub start_date: Timestamp,
        /// End time
        pub end_date: Timestamp,
        /// Whether the event takes the whole day
        #[cfg_attr(feature = "serde", serde(default))]
        pub all_day: bool,
        /// Kind of event
        #[cfg_attr(feature = "serde", serde(default))]
        pub event_type: EventType,
    }

    /// Changes to an event
    #[cfg_attr(feature = "validator", derive(Validate))]
    #[cfg_attr(feature = "validator", validate(schema(function = "validate_edit_event")))]
    pub struct DataEditEvent {
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 128)))]
        pub title: Option<String>,
        /// Event description
        #[cfg_attr(feature = "validator", validate(length(min = 0, max = 2000)))]
        pub description: Option<String>,
        /// Start time
        pub start_date: Option<Timestamp>,
        /// End time
        pub end_date: Option<Timestamp>,
        /// Whether the event takes the whole day
        pub all_day: Option<bool>,
        /// Kind of event
        pub event_type: Option<EventType>,
        /// Fields to remove from event object
        #[cfg_attr(feature = "serde", serde(default))]
        pub remove: Vec<FieldsEvent>,
    }

    /// Query parameters for listing events
    #[cfg_attr(feature = "validator", derive(Validate))]
    #[cfg_attr(feature = "validator", validate(schema(function = "validate_query_events")))]
    pub struct OptionsQueryEvents {
        /// Start of the range
        pub from: Timestamp,
        /// End of the range
        pub to: Timestamp,
        /// Maximum number of events to return
        #[cfg_attr(feature = "validator", validate(range(min = 1, max = 1000)))]
        pub take: Option<i64>,
    }

    /// Check-in code submitted through the callback
    #[cfg_attr(feature = "validator", derive(Validate))]
    pub struct OptionsTokenCallback {
        /// Check-in code
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 16)))]
        pub code: String,
    }
);

#[cfg(feature = "validator")]
fn end_after_start(start: &Timestamp, end: &Timestamp) -> Result<(), ValidationError> {
    if end < start {
        Err(ValidationError::new("end_before_start"))
    } else {
        Ok(())
    }
}

#[cfg(feature = "validator")]
fn validate_create_event(data: &DataCreateEvent) -> Result<(), ValidationError> {
    end_after_start(&data.start_date, &data.end_date)
}

#[cfg(feature = "validator")]
fn validate_edit_event(data: &DataEditEvent) -> Result<(), ValidationError> {
    match (&data.start_date, &data.end_date) {
        (Some(start), Some(end)) => end_after_start(start, end),
        _ => Ok(()),
    }
}

#[cfg(feature = "validator")]
fn validate_query_events(data: &OptionsQueryEvents) -> Result<(), ValidationError> {
    end_after_start(&data.from, &data.to)
}

#[cfg(all(test, feature = "validator"))]
mod tests {
    use iso8601_timestamp::{Duration, Timestamp};
    use validator::Validate;

    use super::{DataCreateEvent, EventType};

    #[test]
    fn rejects_event_ending_before_start() {
        let start = Timestamp::now_utc();
        let data = DataCreateEvent {
            title: "Build Night".to_string(),
            description: None,
            start_date: start,
            end_date: start - Duration::hours(1),
            all_day: false,
            event_type: EventType::Regular,
        };

        assert!(data.validate().is_err());
    }

    #[test]
    fn accepts_well_formed_event() {
        let start = Timestamp::now_utc();
        let data = DataCreateEvent {
            title: "Build Night".to_string(),
            description: Some("Robot assembly".to_string()),
            start_date: start,
            end_date: start + Duration::hours(3),
            all_day: false,
            event_type: EventType::Outreach,
        };

        assert!(data.validate().is_ok());
    }
}
