// src/presentation/http/controllers/candidacies.rs
use crate::application::{
    commands::candidacies::ResolveCandidacyCommand,
    dto::{CandidacyDto, ReceivedCandidacyDto},
    queries::candidacies::ReceivedCandidaciesQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, PathParam, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReceivedParams {
    /// `pending`, `accepted` or `rejected`.
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CandidacyResponse {
    pub message: String,
    pub candidatura: CandidacyDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReceivedCandidaciesResponse {
    pub candidaturas: Vec<ReceivedCandidacyDto>,
}

#[utoipa::path(
    post,
    path = "/candidatar/{post_id}",
    params(("post_id" = i64, Path, description = "Post to apply to")),
    responses(
        (status = 200, description = "Application recorded as pending.", body = CandidacyResponse),
        (status = 400, description = "Applying to one's own post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already applied.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Candidacies"
)]
pub async fn apply(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(post_id): PathParam<i64>,
) -> HttpResult<Json<CandidacyResponse>> {
    state
        .services
        .candidacy_commands
        .apply(&user, post_id)
        .await
        .into_http()
        .map(|candidatura| {
            Json(CandidacyResponse {
                message: "application submitted".into(),
                candidatura,
            })
        })
}

#[utoipa::path(
    get,
    path = "/candidaturas_recebidas",
    params(ReceivedParams),
    responses(
        (status = 200, description = "Candidacies on the caller's posts.", body = ReceivedCandidaciesResponse),
        (status = 400, description = "Unknown status filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Candidacies"
)]
pub async fn list_received(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    QueryParams(params): QueryParams<ReceivedParams>,
) -> HttpResult<Json<ReceivedCandidaciesResponse>> {
    state
        .services
        .candidacy_queries
        .list_received(
            &user,
            ReceivedCandidaciesQuery {
                status: params.status,
            },
        )
        .await
        .into_http()
        .map(|candidaturas| Json(ReceivedCandidaciesResponse { candidaturas }))
}

#[utoipa::path(
    post,
    path = "/candidaturas/{id}/{acao}",
    params(
        ("id" = i64, Path, description = "Candidacy id"),
        ("acao" = String, Path, description = "`aceitar` or `rejeitar`")
    ),
    responses(
        (status = 200, description = "Candidacy resolved.", body = CandidacyResponse),
        (status = 400, description = "Unknown action.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Caller does not own the post.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown candidacy.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Candidacies"
)]
pub async fn resolve(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam((id, action)): PathParam<(i64, String)>,
) -> HttpResult<Json<CandidacyResponse>> {
    state
        .services
        .candidacy_commands
        .resolve(&user, ResolveCandidacyCommand { id, action })
        .await
        .into_http()
        .map(|candidatura| {
            Json(CandidacyResponse {
                message: format!("candidacy {}", candidatura.status),
                candidatura,
            })
        })
}
