use std::sync::atomic::{AtomicUsize, Ordering};

use attendance_database::{Database, DatabaseInfo, IdentityProfile, Session, User};
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::{discord::Discord, AppState};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TestHarness {
    pub app: Router,
    pub db: Database,
    pub discord: Discord,
}

impl TestHarness {
    pub const MENTOR_ROLE: &'static str = "mentor-role";

    pub async fn new() -> TestHarness {
        let db = DatabaseInfo::Reference
            .connect()
            .await
            .expect("`Database`");

        let discord = Discord::new(
            attendance_config::Discord {
                api_base: "http://discord.invalid/api".to_string(),
                client_id: "client".to_string(),
                client_secret: "secret".to_string(),
                redirect_uri: "http://localhost/auth/discord/callback".to_string(),
                bot_token: "bot".to_string(),
                guild_id: "guild".to_string(),
            },
            TestHarness::MENTOR_ROLE,
        );

        let app = crate::app(AppState {
            database: db.clone(),
            discord: discord.clone(),
        });

        TestHarness { app, db, discord }
    }

    pub fn rand_string() -> String {
        format!("test-{}", COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    async fn sign_in(&self, roles: Vec<String>) -> (Session, User) {
        let id = TestHarness::rand_string();
        let user = User::sign_in(
            &self.db,
            IdentityProfile {
                id: id.clone(),
                username: id,
                first_name: "Test".to_string(),
                last_name: "User".to_string(),
                roles,
            },
        )
        .await
        .expect("`User`");

        let session = Session::create(&self.db, &user).await.expect("`Session`");
        (session, user)
    }

    pub async fn new_user(&self) -> (Session, User) {
        self.sign_in(vec![]).await
    }

    pub async fn new_mentor(&self) -> (Session, User) {
        self.sign_in(vec![TestHarness::MENTOR_ROLE.to_string()]).await
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        session: Option<&Session>,
        body: Option<serde_json::Value>,
    ) -> Response {
        let mut request = Request::builder().method(method).uri(path);

        if let Some(session) = session {
            request = request.header("x-session-token", &session.token);
        }

        let request = match body {
            Some(body) => request
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .expect("`Request`");

        self.app.clone().oneshot(request).await.expect("`Response`")
    }

    pub async fn get(&self, path: &str, session: Option<&Session>) -> Response {
        self.request(Method::GET, path, session, None).await
    }

    pub async fn post(
        &self,
        path: &str,
        session: Option<&Session>,
        body: serde_json::Value,
    ) -> Response {
        self.request(Method::POST, path, session, Some(body)).await
    }

    pub async fn json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body")
            .to_bytes();

        serde_json::from_slice(&bytes).expect("valid JSON")
    }
}
