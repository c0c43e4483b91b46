// src/presentation/http/controllers/messages.rs
use crate::application::{
    commands::messages::SendMessageCommand,
    dto::{ContactDto, MessageDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SendMessageRequest {
    pub receiver_id: Option<i64>,
    #[serde(alias = "content", alias = "mensagem")]
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageSentResponse {
    pub message: String,
    pub mensagem: MessageDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConversationResponse {
    pub messages: Vec<MessageDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactsResponse {
    pub contacts: Vec<ContactDto>,
}

#[utoipa::path(
    post,
    path = "/messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message stored.", body = MessageSentResponse),
        (status = 400, description = "Missing receiver, unknown receiver or blank text.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Messages"
)]
pub async fn send_message(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<SendMessageRequest>,
) -> HttpResult<(StatusCode, Json<MessageSentResponse>)> {
    let command = SendMessageCommand {
        receiver_id: payload.receiver_id,
        content: payload.message,
    };

    let mensagem = state
        .services
        .message_commands
        .send(&user, command)
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(MessageSentResponse {
            message: "message sent".into(),
            mensagem,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/messages/{user_id}",
    params(("user_id" = i64, Path, description = "The other participant")),
    responses(
        (status = 200, description = "Both directions, oldest first.", body = ConversationResponse),
        (status = 404, description = "Unknown user.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Messages"
)]
pub async fn conversation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(other_id): PathParam<i64>,
) -> HttpResult<Json<ConversationResponse>> {
    state
        .services
        .message_queries
        .conversation(&user, other_id)
        .await
        .into_http()
        .map(|messages| Json(ConversationResponse { messages }))
}

#[utoipa::path(
    get,
    path = "/messages/contacts",
    responses(
        (status = 200, description = "Everyone the caller has exchanged messages with, latest first.", body = ContactsResponse)
    ),
    tag = "Messages"
)]
pub async fn contacts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ContactsResponse>> {
    state
        .services
        .message_queries
        .contacts(&user)
        .await
        .into_http()
        .map(|contacts| Json(ContactsResponse { contacts }))
}
