use attendance_database::{Database, Rsvp, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{extract::State, Json};

use crate::util::validation::Validated;

/// Set the requester's rsvp status for every event within a date range
pub async fn set_range_rsvp(
    State(db): State<Database>,
    session: Session,
    Validated(Json(data)): Validated<Json<v0::DataSetRangeRsvp>>,
) -> Result<Json<Vec<v0::Rsvp>>> {
    Ok(Json(
        Rsvp::set_status_in_range(
            &db,
            &session.user_id,
            data.from,
            data.to,
            data.status.into(),
        )
        .await?
        .into_iter()
        .map(Into::into)
        .collect(),
    ))
}

#[cfg(test)]
mod test {
    use attendance_database::{iso8601_timestamp::Timestamp, Event};
    use attendance_models::v0;
    use axum::http::StatusCode;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn marks_every_event_in_range() {
        let harness = TestHarness::new().await;
        let (session, user) = harness.new_user().await;

        for (start, end) in [
            ("2024-02-03T09:00:00Z", "2024-02-03T17:00:00Z"),
            ("2024-02-10T09:00:00Z", "2024-02-10T17:00:00Z"),
            ("2024-04-06T09:00:00Z", "2024-04-06T17:00:00Z"),
        ] {
            Event::create(
                &harness.db,
                v0::DataCreateEvent {
                    title: "Build".to_string(),
                    description: None,
                    start_date: Timestamp::parse(start).unwrap(),
                    end_date: Timestamp::parse(end).unwrap(),
                    all_day: false,
                    event_type: v0::EventType::Regular,
                },
            )
            .await
            .unwrap();
        }

        let response = harness
            .post(
                "/events/rsvps",
                Some(&session),
                json!({
                    "from": "2024-02-01T00:00:00Z",
                    "to": "2024-02-29T00:00:00Z",
                    "status": "No"
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let rsvps: Vec<v0::Rsvp> = TestHarness::json(response).await;
        assert_eq!(rsvps.len(), 2);
        assert!(rsvps
            .iter()
            .all(|rsvp| rsvp.user == user.id && rsvp.status == v0::RsvpStatus::No));

        assert_eq!(
            harness.db.fetch_user_rsvps(&user.id).await.unwrap().len(),
            2
        );
    }
}
