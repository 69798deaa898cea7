use attendance_models::v0::*;

impl crate::User {
    /// Public representation of a user as seen by themselves
    pub fn into_self(self) -> User {
        let calendar_secret = self.calendar_secret.clone();
        User {
            calendar_secret: Some(calendar_secret),
            ..self.into()
        }
    }
}

impl From<crate::User> for User {
    fn from(value: crate::User) -> Self {
        User {
            id: value.id,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            roles: value.roles,
            default_status: value.default_status.map(|status| status.into()),
            calendar_secret: None,
            created_at: value.created_at,
        }
    }
}

impl From<FieldsUser> for crate::FieldsUser {
    fn from(value: FieldsUser) -> Self {
        match value {
            FieldsUser::DefaultStatus => crate::FieldsUser::DefaultStatus,
        }
    }
}

impl From<crate::FieldsUser> for FieldsUser {
    fn from(value: crate::FieldsUser) -> Self {
        match value {
            crate::FieldsUser::DefaultStatus => FieldsUser::DefaultStatus,
        }
    }
}

impl From<DataEditUser> for crate::PartialUser {
    fn from(value: DataEditUser) -> Self {
        crate::PartialUser {
            default_status: value.default_status.map(|status| status.into()),
            ..Default::default()
        }
    }
}

impl From<crate::Event> for Event {
    fn from(value: crate::Event) -> Self {
        Event {
            id: value.id,
            title: value.title,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            all_day: value.all_day,
            event_type: value.event_type.into(),
        }
    }
}

impl From<EventType> for crate::EventType {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Regular => crate::EventType::Regular,
            EventType::Social => crate::EventType::Social,
            EventType::Outreach => crate::EventType::Outreach,
        }
    }
}

impl From<crate::EventType> for EventType {
    fn from(value: crate::EventType) -> Self {
        match value {
            crate::EventType::Regular => EventType::Regular,
            crate::EventType::Social => EventType::Social,
            crate::EventType::Outreach => EventType::Outreach,
        }
    }
}

impl From<FieldsEvent> for crate::FieldsEvent {
    fn from(value: FieldsEvent) -> Self {
        match value {
            FieldsEvent::Description => crate::FieldsEvent::Description,
        }
    }
}

impl From<DataEditEvent> for crate::PartialEvent {
    fn from(value: DataEditEvent) -> Self {
        crate::PartialEvent {
            title: value.title,
            description: value.description,
            start_date: value.start_date,
            end_date: value.end_date,
            all_day: value.all_day,
            event_type: value.event_type.map(|event_type| event_type.into()),
            ..Default::default()
        }
    }
}

impl From<crate::Rsvp> for Rsvp {
    fn from(value: crate::Rsvp) -> Self {
        Rsvp {
            event: value.id.event,
            user: value.id.user,
            status: value.status.into(),
            checked_in_at: value.checked_in_at,
            updated_at: value.updated_at,
        }
    }
}

impl crate::Rsvp {
    /// Public representation of an rsvp with its member embedded
    pub fn into_with_user(self, user: RsvpUser) -> RsvpWithUser {
        RsvpWithUser {
            event: self.id.event,
            user,
            status: self.status.into(),
            checked_in_at: self.checked_in_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<crate::User> for RsvpUser {
    fn from(value: crate::User) -> Self {
        RsvpUser {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            roles: value.roles,
        }
    }
}

impl From<RsvpStatus> for crate::RsvpStatus {
    fn from(value: RsvpStatus) -> Self {
        match value {
            RsvpStatus::Yes => crate::RsvpStatus::Yes,
            RsvpStatus::No => crate::RsvpStatus::No,
            RsvpStatus::Maybe => crate::RsvpStatus::Maybe,
            RsvpStatus::Late => crate::RsvpStatus::Late,
            RsvpStatus::Attended => crate::RsvpStatus::Attended,
        }
    }
}

impl From<crate::RsvpStatus> for RsvpStatus {
    fn from(value: crate::RsvpStatus) -> Self {
        match value {
            crate::RsvpStatus::Yes => RsvpStatus::Yes,
            crate::RsvpStatus::No => RsvpStatus::No,
            crate::RsvpStatus::Maybe => RsvpStatus::Maybe,
            crate::RsvpStatus::Late => RsvpStatus::Late,
            crate::RsvpStatus::Attended => RsvpStatus::Attended,
        }
    }
}

impl From<crate::Scancode> for Scancode {
    fn from(value: crate::Scancode) -> Self {
        Scancode {
            code: value.id,
            user: value.user,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use attendance_models::v0;
    use iso8601_timestamp::Timestamp;

    use crate::{RsvpStatus, User};

    #[test]
    fn calendar_secret_is_only_shown_to_self() {
        let user = User {
            id: "1".to_string(),
            username: "ada".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            roles: vec![],
            default_status: Some(RsvpStatus::Maybe),
            calendar_secret: "hidden".to_string(),
            created_at: Timestamp::now_utc(),
        };

        let public: v0::User = user.clone().into();
        assert_eq!(public.calendar_secret, None);
        assert_eq!(public.default_status, Some(v0::RsvpStatus::Maybe));

        let own = user.into_self();
        assert_eq!(own.calendar_secret.as_deref(), Some("hidden"));
    }
}
