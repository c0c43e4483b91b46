// src/presentation/http/openapi.rs
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};

use super::controllers::{auth, candidacies, messages, posts, users};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        auth::profile,
        posts::list_posts,
        posts::create_post,
        posts::list_user_posts,
        candidacies::apply,
        candidacies::list_received,
        candidacies::resolve,
        users::search_users,
        users::get_user,
        users::follow,
        users::unfollow,
        users::followers,
        users::following,
        users::my_following,
        users::update_bio,
        users::update_links,
        users::update_profile_pic,
        messages::send_message,
        messages::conversation,
        messages::contacts,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            crate::presentation::http::error::ErrorResponse,
            auth::RegisterRequest,
            auth::RegisterResponse,
            auth::LoginRequest,
            auth::LoginResponse,
            auth::ProfileResponse,
            posts::CreatePostRequest,
            posts::PostListResponse,
            posts::PostCreatedResponse,
            candidacies::CandidacyResponse,
            candidacies::ReceivedCandidaciesResponse,
            users::UserListResponse,
            users::UserDetailResponse,
            users::FollowersResponse,
            users::FollowingResponse,
            users::BioRequest,
            users::ProfileUpdatedResponse,
            users::LinksRequest,
            users::ProfilePicRequest,
            messages::SendMessageRequest,
            messages::MessageSentResponse,
            messages::ConversationResponse,
            messages::ContactsResponse,
            crate::application::dto::UserDto,
            crate::application::dto::UserProfileDto,
            crate::application::dto::UserDetailDto,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::PostDto,
            crate::application::dto::CandidacyDto,
            crate::application::dto::ReceivedCandidacyDto,
            crate::application::dto::CandidacyPostDto,
            crate::application::dto::MessageDto,
            crate::application::dto::ContactDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration, login and the caller's profile"),
        (name = "Posts", description = "Posts and the feed"),
        (name = "Candidacies", description = "Applications to posts"),
        (name = "Users", description = "Profiles, search and the follow graph"),
        (name = "Messages", description = "Direct messages"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&BearerAuth),
    security(("bearerAuth" = [])),
    info(
        title = "HarmoCrew API",
        description = "Social networking backend for musicians",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("JWT".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
