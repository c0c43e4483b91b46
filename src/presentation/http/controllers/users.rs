// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::UpdateProfileCommand,
    dto::{UserDetailDto, UserDto, UserProfileDto},
    queries::users::SearchUsersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam, QueryParams};
use crate::presentation::http::openapi::MessageResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Substring of a name or email.
    #[serde(alias = "query")]
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    pub user: UserDetailDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowersResponse {
    pub followers: Vec<UserDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FollowingResponse {
    pub following: Vec<UserDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileUpdatedResponse {
    pub message: String,
    pub user: UserProfileDto,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct BioRequest {
    #[serde(alias = "bio")]
    pub descricao: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LinksRequest {
    pub links: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ProfilePicRequest {
    #[serde(alias = "profile_pic")]
    pub profile_pic_url: Option<String>,
}

#[utoipa::path(
    get,
    path = "/search_users",
    params(SearchParams),
    responses(
        (status = 200, description = "Up to ten matching users, never the caller.", body = UserListResponse)
    ),
    tag = "Users"
)]
pub async fn search_users(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    QueryParams(params): QueryParams<SearchParams>,
) -> HttpResult<Json<UserListResponse>> {
    state
        .services
        .user_queries
        .search_users(&user, SearchUsersQuery { term: params.q })
        .await
        .into_http()
        .map(|users| Json(UserListResponse { users }))
}

#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Public profile with follow state and counts.", body = UserDetailResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(user_id): PathParam<i64>,
) -> HttpResult<Json<UserDetailResponse>> {
    state
        .services
        .user_queries
        .get_user(&user, user_id)
        .await
        .into_http()
        .map(|user| Json(UserDetailResponse { user }))
}

#[utoipa::path(
    post,
    path = "/follow/{id}",
    params(("id" = i64, Path, description = "User to follow")),
    responses(
        (status = 200, description = "Now following.", body = MessageResponse),
        (status = 400, description = "Self-follow.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Already following.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn follow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(target_id): PathParam<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .follow(&user, target_id)
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "you are now following this user".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/unfollow/{id}",
    params(("id" = i64, Path, description = "User to unfollow")),
    responses(
        (status = 200, description = "Edge removed.", body = MessageResponse),
        (status = 409, description = "Not following.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn unfollow(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(target_id): PathParam<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .unfollow(&user, target_id)
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "you are no longer following this user".into(),
    }))
}

#[utoipa::path(
    get,
    path = "/followers/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Users following `id`.", body = FollowersResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn followers(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(user_id): PathParam<i64>,
) -> HttpResult<Json<FollowersResponse>> {
    state
        .services
        .user_queries
        .list_followers(user_id)
        .await
        .into_http()
        .map(|followers| Json(FollowersResponse { followers }))
}

#[utoipa::path(
    get,
    path = "/following/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Users `id` follows.", body = FollowingResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn following(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    PathParam(user_id): PathParam<i64>,
) -> HttpResult<Json<FollowingResponse>> {
    state
        .services
        .user_queries
        .list_following(user_id)
        .await
        .into_http()
        .map(|following| Json(FollowingResponse { following }))
}

#[utoipa::path(
    get,
    path = "/api/me/following",
    responses(
        (status = 200, description = "Users the caller follows.", body = FollowingResponse)
    ),
    tag = "Users"
)]
pub async fn my_following(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<FollowingResponse>> {
    state
        .services
        .user_queries
        .list_my_following(&user)
        .await
        .into_http()
        .map(|following| Json(FollowingResponse { following }))
}

#[utoipa::path(
    put,
    path = "/user/me/descricao",
    request_body = BioRequest,
    responses(
        (status = 200, description = "Bio updated.", body = ProfileUpdatedResponse),
        (status = 400, description = "Missing or oversized field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_bio(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<BioRequest>,
) -> HttpResult<Json<ProfileUpdatedResponse>> {
    let command = UpdateProfileCommand {
        bio: payload.descricao,
        ..UpdateProfileCommand::default()
    };
    apply_profile_update(&state, &user, command, "bio updated").await
}

#[utoipa::path(
    put,
    path = "/user/me/links",
    request_body = LinksRequest,
    responses(
        (status = 200, description = "Links updated.", body = ProfileUpdatedResponse),
        (status = 400, description = "Missing or oversized field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_links(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<LinksRequest>,
) -> HttpResult<Json<ProfileUpdatedResponse>> {
    let command = UpdateProfileCommand {
        links: payload.links,
        ..UpdateProfileCommand::default()
    };
    apply_profile_update(&state, &user, command, "links updated").await
}

#[utoipa::path(
    put,
    path = "/user/me/profile_pic",
    request_body = ProfilePicRequest,
    responses(
        (status = 200, description = "Picture updated; empty restores the default avatar.", body = ProfileUpdatedResponse),
        (status = 400, description = "Missing or oversized field.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_profile_pic(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<ProfilePicRequest>,
) -> HttpResult<Json<ProfileUpdatedResponse>> {
    let command = UpdateProfileCommand {
        profile_pic_url: payload.profile_pic_url,
        ..UpdateProfileCommand::default()
    };
    apply_profile_update(&state, &user, command, "profile picture updated").await
}

async fn apply_profile_update(
    state: &HttpState,
    actor: &crate::application::dto::AuthenticatedUser,
    command: UpdateProfileCommand,
    message: &str,
) -> HttpResult<Json<ProfileUpdatedResponse>> {
    state
        .services
        .user_commands
        .update_profile(actor, command)
        .await
        .into_http()
        .map(|user| {
            Json(ProfileUpdatedResponse {
                message: message.to_string(),
                user,
            })
        })
}
