// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, candidacies, messages, posts, users},
    error::HttpError,
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, warn};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Same as [`build_router`]; `rate_limit = false` skips the per-IP limiter,
/// which needs the peer address that in-process tests do not provide.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi_json))
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/profile", get(auth::profile))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/candidatar/{post_id}", post(candidacies::apply))
        .route("/candidaturas", get(candidacies::list_received))
        .route("/candidaturas_recebidas", get(candidacies::list_received))
        .route("/candidaturas/{id}/{acao}", post(candidacies::resolve))
        .route("/search_users", get(users::search_users))
        .route("/user/me/descricao", put(users::update_bio))
        .route("/user/me/links", put(users::update_links))
        .route("/user/me/profile_pic", put(users::update_profile_pic))
        .route("/user/{id}", get(users::get_user))
        .route("/user/{id}/posts", get(posts::list_user_posts))
        .route("/follow/{id}", post(users::follow))
        .route("/unfollow/{id}", post(users::unfollow))
        .route("/followers/{id}", get(users::followers))
        .route("/following/{id}", get(users::following))
        .route("/api/me/following", get(users::my_following))
        .route("/messages", post(messages::send_message))
        .route("/messages/contacts", get(messages::contacts))
        .route("/messages/{user_id}", get(messages::conversation))
        .fallback(not_found);

    let router = match rate_limit
        .then(|| rate_limit_layer(state.settings.rate_limit))
        .flatten()
    {
        Some(layer) => router.layer(layer),
        None => router,
    };

    let cors = cors_layer(&state.settings.allowed_origins);

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unparsable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}

async fn not_found() -> HttpError {
    HttpError::not_found("route not found")
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable.", body = crate::presentation::http::openapi::StatusResponse),
        (status = 503, description = "Database unreachable.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> impl IntoResponse {
    match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.db_pool.as_ref())
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "ok".into(),
                database: "ok".into(),
            }),
        ),
        Err(err) => {
            error!(error = %err, "health check could not reach the database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StatusResponse {
                    status: "degraded".into(),
                    database: "unreachable".into(),
                }),
            )
        }
    }
}
