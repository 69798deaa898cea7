use attendance_database::Session;
use attendance_models::v0;
use axum::{extract::State, Json};

use crate::discord::Discord;

/// Fetch the authentication status of the requester
pub async fn status(
    session: Option<Session>,
    State(discord): State<Discord>,
) -> Json<v0::AuthStatus> {
    Json(match session {
        Some(session) => v0::AuthStatus {
            is_authenticated: true,
            is_admin: discord.is_mentor(&session.roles),
            roles: session.roles,
        },
        None => v0::AuthStatus {
            is_authenticated: false,
            roles: vec![],
            is_admin: false,
        },
    })
}

#[cfg(test)]
mod test {
    use attendance_models::v0;
    use axum::http::StatusCode;

    use crate::util::test::TestHarness;

    #[tokio::test]
    async fn anonymous_status() {
        let harness = TestHarness::new().await;

        let response = harness.get("/auth/status", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let status: v0::AuthStatus = TestHarness::json(response).await;
        assert!(!status.is_authenticated);
        assert!(status.roles.is_empty());
    }

    #[tokio::test]
    async fn mentor_status() {
        let harness = TestHarness::new().await;
        let (session, _) = harness.new_mentor().await;

        let response = harness.get("/auth/status", Some(&session)).await;
        let status: v0::AuthStatus = TestHarness::json(response).await;
        assert!(status.is_authenticated);
        assert!(status.is_admin);
        assert_eq!(status.roles, vec![TestHarness::MENTOR_ROLE.to_string()]);
    }
}
