use attendance_database::{util::reference::Reference, Database, FieldsEvent, PartialEvent};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    Json,
};

use crate::util::{guards::Mentor, validation::Validated};

/// Edit an event
pub async fn edit_event(
    State(db): State<Database>,
    _mentor: Mentor,
    Path(id): Path<Reference>,
    Validated(Json(data)): Validated<Json<v0::DataEditEvent>>,
) -> Result<Json<v0::Event>> {
    let mut event = id.as_event(&db).await?;

    let remove: Vec<FieldsEvent> = data.remove.iter().cloned().map(Into::into).collect();
    let partial: PartialEvent = data.into();

    event.update(&db, partial, remove).await?;
    Ok(Json(event.into()))
}

#[cfg(test)]
mod test {
    use attendance_database::{iso8601_timestamp::Timestamp, Event};
    use attendance_models::v0;
    use axum::http::{Method, StatusCode};

    use crate::{routes::events::test_util::ongoing_event, util::test::TestHarness};

    #[tokio::test]
    async fn edit_title_and_clear_description() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_mentor().await;
        let event = Event::create(
            &harness.db,
            v0::DataCreateEvent {
                title: "Meeting".to_string(),
                description: Some("Agenda to follow".to_string()),
                start_date: Timestamp::parse("2024-05-04T18:00:00Z").unwrap(),
                end_date: Timestamp::parse("2024-05-04T20:00:00Z").unwrap(),
                all_day: false,
                event_type: v0::EventType::Regular,
            },
        )
        .await
        .unwrap();

        let response = harness
            .request(
                Method::PATCH,
                &format!("/events/{}", event.id),
                Some(&session),
                Some(json!({ "title": "General meeting", "remove": ["Description"] })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let edited: v0::Event = TestHarness::json(response).await;
        assert_eq!(edited.title, "General meeting");
        assert_eq!(edited.description, None);
        assert_eq!(edited.start_date, event.start_date);
        assert_eq!(edited.end_date, event.end_date);
    }

    #[tokio::test]
    async fn rejects_end_before_existing_start() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_mentor().await;
        let event = ongoing_event(&harness.db, "Meeting").await;

        let response = harness
            .request(
                Method::PATCH,
                &format!("/events/{}", event.id),
                Some(&session),
                Some(json!({ "end_date": "2000-01-01T00:00:00Z" })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
