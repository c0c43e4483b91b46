// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::CreatePostCommand, dto::PostDto, queries::posts::ListPostsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreatePostRequest {
    #[serde(alias = "title")]
    pub titulo: String,
    #[serde(alias = "body")]
    pub texto: String,
    pub audio_url: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPostsParams {
    /// Page size, 1..=100; defaults to 50.
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostListResponse {
    pub posts: Vec<PostDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostCreatedResponse {
    pub message: String,
    pub post: PostDto,
}

#[utoipa::path(
    get,
    path = "/posts",
    params(ListPostsParams),
    responses(
        (status = 200, description = "Most recent posts, newest first.", body = PostListResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    QueryParams(params): QueryParams<ListPostsParams>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            limit: params.limit,
        })
        .await
        .into_http()
        .map(|posts| Json(PostListResponse { posts }))
}

#[utoipa::path(
    post,
    path = "/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostCreatedResponse),
        (status = 400, description = "Empty title or text.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostCreatedResponse>)> {
    let command = CreatePostCommand {
        title: payload.titulo,
        body: payload.texto,
        audio_url: payload.audio_url,
    };

    let post = state
        .services
        .post_commands
        .create_post(&user, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(PostCreatedResponse {
            message: "post created".into(),
            post,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/user/{id}/posts",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "The user's posts, newest first.", body = PostListResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_user_posts(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(user_id): PathParam<i64>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_posts_by_user(user_id)
        .await
        .into_http()
        .map(|posts| Json(PostListResponse { posts }))
}
