use crate::domain::message::value_objects::{MessageContent, MessageId};
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Message {
    pub id: MessageId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    pub fn is_sent_by(&self, user_id: UserId) -> bool {
        self.sender_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: MessageContent,
    pub sent_at: DateTime<Utc>,
}

/// Counterparty of a conversation with its most recent message.
#[derive(Debug, Clone)]
pub struct Contact {
    pub user: UserSummary,
    pub last_message: String,
    pub last_message_at: DateTime<Utc>,
}
