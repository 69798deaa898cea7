use attendance_database::{Database, Event};
use attendance_models::v0;
use attendance_result::Result;
use axum::{extract::State, http::StatusCode, Json};

use crate::util::{guards::Mentor, validation::Validated};

/// Create a new event
pub async fn create_event(
    State(db): State<Database>,
    _mentor: Mentor,
    Validated(Json(data)): Validated<Json<v0::DataCreateEvent>>,
) -> Result<(StatusCode, Json<v0::Event>)> {
    let event = Event::create(&db, data).await?;
    Ok((StatusCode::CREATED, Json(event.into())))
}

#[cfg(test)]
mod test {
    use attendance_models::v0;
    use axum::http::StatusCode;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn mentor_creates_event() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_mentor().await;

        let response = harness
            .post(
                "/events",
                Some(&session),
                json!({
                    "title": "Build session",
                    "start_date": "2024-01-13T09:00:00Z",
                    "end_date": "2024-01-13T17:00:00Z",
                    "event_type": "Regular"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let event: v0::Event = TestHarness::json(response).await;
        assert_eq!(event.title, "Build session");
        assert!(harness.db.fetch_event(&event.id).await.is_ok());
    }

    #[tokio::test]
    async fn students_cannot_create_events() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_user().await;

        let response = harness
            .post(
                "/events",
                Some(&session),
                json!({
                    "title": "Party",
                    "start_date": "2024-01-13T09:00:00Z",
                    "end_date": "2024-01-13T17:00:00Z",
                    "event_type": "Social"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn rejects_inverted_dates() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_mentor().await;

        let response = harness
            .post(
                "/events",
                Some(&session),
                json!({
                    "title": "Backwards",
                    "start_date": "2024-01-13T17:00:00Z",
                    "end_date": "2024-01-13T09:00:00Z",
                    "event_type": "Regular"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
