use attendance_database::{util::reference::Reference, Database, Scancode, Session};
use attendance_models::v0;
use attendance_result::Result;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    discord::Discord,
    util::{guards::target_user, validation::Validated},
};

/// Register a new scancode for a user
pub async fn create_scancode(
    State(db): State<Database>,
    State(discord): State<Discord>,
    session: Session,
    Path(target): Path<Reference>,
    Validated(Json(data)): Validated<Json<v0::DataCreateScancode>>,
) -> Result<(StatusCode, Json<v0::Scancode>)> {
    let user = target_user(&db, &discord, &session, &target).await?;
    let scancode = Scancode::create(&db, &user.id, data.code).await?;

    Ok((StatusCode::CREATED, Json(scancode.into())))
}

#[cfg(test)]
mod test {
    use attendance_models::v0;
    use attendance_result::{Error, ErrorType};
    use axum::http::StatusCode;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn create_and_list() {
        let harness = TestHarness::new().await;
        let (session, user) = harness.new_user().await;

        let response = harness
            .post("/users/@me/scancodes", Some(&session), json!({ "code": "CARD-0001" }))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let scancode: v0::Scancode = TestHarness::json(response).await;
        assert_eq!(scancode.code, "CARD-0001");
        assert_eq!(scancode.user, user.id);

        let response = harness.get("/users/@me/scancodes", Some(&session)).await;
        let scancodes: Vec<v0::Scancode> = TestHarness::json(response).await;
        assert_eq!(scancodes.len(), 1);
    }

    #[tokio::test]
    async fn duplicate_code_conflicts() {
        let harness = TestHarness::new().await;
        let (first, _) = harness.new_user().await;
        let (second, _) = harness.new_user().await;

        let response = harness
            .post("/users/@me/scancodes", Some(&first), json!({ "code": "SHARED" }))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = harness
            .post("/users/@me/scancodes", Some(&second), json!({ "code": "SHARED" }))
            .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let error: Error = TestHarness::json(response).await;
        assert_eq!(error.error_type, ErrorType::ScancodeTaken);
    }

    #[tokio::test]
    async fn rejects_whitespace() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_user().await;

        let response = harness
            .post("/users/@me/scancodes", Some(&session), json!({ "code": "has space" }))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
