// tests/support/helpers.rs
use super::mocks::{StrictPasswordHasher, SteppingClock, TEST_SECRET};
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use harmocrew_core::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        time::Clock,
        util::AvatarUrlGenerator,
    },
    services::{ApplicationServices, Repositories},
};
use harmocrew_core::infrastructure::{
    database,
    repositories::{
        SqliteCandidacyRepository, SqliteFollowRepository, SqliteMessageRepository,
        SqlitePostRepository, SqliteUserRepository,
    },
    security::token::HmacTokenManager,
    util::TemplateAvatarUrlGenerator,
};
use harmocrew_core::presentation::http::{
    routes::build_router_with_rate_limiter,
    state::{HttpSettings, HttpState},
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::util::ServiceExt as _;

pub const TOKEN_TTL_SECONDS: i64 = 3600;
pub const PASSWORD: &str = "correct-horse";

/// A router over a fresh in-memory database plus the handles tests poke at.
pub struct TestApp {
    pub router: Router,
    pub clock: Arc<SteppingClock>,
    pub pool: Arc<SqlitePool>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_hasher(Arc::new(StrictPasswordHasher)).await
    }

    pub async fn spawn_with_hasher(password_hasher: Arc<dyn PasswordHasher>) -> Self {
        let pool = database::init_memory_pool()
            .await
            .expect("open in-memory sqlite");
        database::run_migrations(&pool)
            .await
            .expect("run migrations");
        let pool = Arc::new(pool);

        let repos = Repositories {
            users: Arc::new(SqliteUserRepository::new(Arc::clone(&pool))),
            posts: Arc::new(SqlitePostRepository::new(Arc::clone(&pool))),
            candidacies: Arc::new(SqliteCandidacyRepository::new(Arc::clone(&pool))),
            follows: Arc::new(SqliteFollowRepository::new(Arc::clone(&pool))),
            messages: Arc::new(SqliteMessageRepository::new(Arc::clone(&pool))),
        };

        let clock = Arc::new(SteppingClock::default());
        let token_manager: Arc<dyn TokenManager> = Arc::new(
            HmacTokenManager::new(TEST_SECRET, chrono::Duration::seconds(TOKEN_TTL_SECONDS))
                .expect("token manager"),
        );
        let avatars: Arc<dyn AvatarUrlGenerator> =
            Arc::new(TemplateAvatarUrlGenerator::default());

        let services = Arc::new(ApplicationServices::new(
            repos,
            password_hasher,
            token_manager,
            Arc::clone(&clock) as Arc<dyn Clock>,
            avatars,
        ));

        let state = HttpState {
            services,
            db_pool: Arc::clone(&pool),
            settings: HttpSettings::default(),
        };

        Self {
            router: build_router_with_rate_limiter(state, false),
            clock,
            pool,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("router is infallible")
    }

    /// Sends and decodes the JSON body in one step.
    pub async fn call(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.request(method, uri, token, body).await;
        let status = response.status();
        (status, json_body(response).await)
    }

    pub async fn get(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.call(Method::GET, uri, Some(token), None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Option<Value>) -> (StatusCode, Value) {
        self.call(Method::POST, uri, Some(token), body).await
    }

    pub async fn register(&self, name: &str, email: &str) -> i64 {
        let (status, body) = self
            .call(
                Method::POST,
                "/register",
                None,
                Some(serde_json::json!({ "nome": name, "email": email, "senha": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body["user"]["id"].as_i64().expect("user id")
    }

    pub async fn login(&self, email: &str) -> String {
        let (status, body) = self
            .call(
                Method::POST,
                "/login",
                None,
                Some(serde_json::json!({ "email": email, "senha": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().expect("token").to_string()
    }

    /// Registers and logs in; returns `(id, token)`.
    pub async fn sign_up(&self, name: &str, email: &str) -> (i64, String) {
        let id = self.register(name, email).await;
        (id, self.login(email).await)
    }

    pub async fn create_post(&self, token: &str, title: &str) -> i64 {
        let (status, body) = self
            .post(
                "/posts",
                token,
                Some(serde_json::json!({ "titulo": title, "texto": "looking for a drummer" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create post failed: {body}");
        body["post"]["id"].as_i64().expect("post id")
    }
}

pub async fn json_body(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
