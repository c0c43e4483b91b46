use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::message::{Contact, Message};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{UserDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    #[serde(rename = "timestamp", with = "serde_time")]
    pub sent_at: DateTime<Utc>,
    /// Whether the viewer wrote this message.
    pub is_sender: bool,
}

impl MessageDto {
    pub fn for_viewer(message: Message, viewer: UserId) -> Self {
        let is_sender = message.is_sent_by(viewer);
        Self {
            id: message.id.into(),
            sender_id: message.sender_id.into(),
            receiver_id: message.receiver_id.into(),
            content: message.content,
            sent_at: message.sent_at,
            is_sender,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub last_message: String,
    #[serde(with = "serde_time")]
    pub last_message_time: DateTime<Utc>,
}

impl ContactDto {
    pub fn from_contact(value: Contact, avatars: &dyn AvatarUrlGenerator) -> Self {
        Self {
            user: UserDto::from_summary(value.user, avatars),
            last_message: value.last_message,
            last_message_time: value.last_message_at,
        }
    }
}
