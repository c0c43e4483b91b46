use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::message::{Contact, Message, MessageId, MessageRepository, NewMessage};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const MESSAGE_COLUMNS: &str = "id, sender_id, receiver_id, content, sent_at";

// Latest message per counterparty; `?` is the viewer, bound four times.
const CONTACTS_QUERY: &str = "\
WITH exchanged AS (
    SELECT CASE WHEN sender_id = ? THEN receiver_id ELSE sender_id END AS contact_id,
           id, content, sent_at
    FROM messages
    WHERE sender_id = ? OR receiver_id = ?
),
ranked AS (
    SELECT contact_id, id, content, sent_at,
           ROW_NUMBER() OVER (PARTITION BY contact_id ORDER BY sent_at DESC, id DESC) AS rn
    FROM exchanged
    WHERE contact_id <> ?
)
SELECT u.id, u.name, u.email, u.profile_pic_url,
       r.content AS last_message, r.sent_at AS last_message_at
FROM ranked r
JOIN users u ON u.id = r.contact_id
WHERE r.rn = 1
ORDER BY r.sent_at DESC, r.id DESC";

#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMessageRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MessageRow {
    id: i64,
    sender_id: i64,
    receiver_id: i64,
    content: String,
    sent_at: DateTime<Utc>,
}

impl TryFrom<MessageRow> for Message {
    type Error = DomainError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(Message {
            id: MessageId(row.id),
            sender_id: UserId::new(row.sender_id)?,
            receiver_id: UserId::new(row.receiver_id)?,
            content: row.content,
            sent_at: row.sent_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    profile_pic_url: Option<String>,
    last_message: String,
    last_message_at: DateTime<Utc>,
}

impl TryFrom<ContactRow> for Contact {
    type Error = DomainError;

    fn try_from(row: ContactRow) -> Result<Self, Self::Error> {
        Ok(Contact {
            user: UserSummary {
                id: UserId::new(row.id)?,
                name: row.name,
                email: row.email,
                profile_pic_url: row.profile_pic_url,
            },
            last_message: row.last_message,
            last_message_at: row.last_message_at,
        })
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    async fn insert(&self, message: NewMessage) -> DomainResult<Message> {
        let row = sqlx::query_as::<_, MessageRow>(&format!(
            "INSERT INTO messages (sender_id, receiver_id, content, sent_at) VALUES (?, ?, ?, ?) RETURNING {MESSAGE_COLUMNS}"
        ))
        .bind(i64::from(message.sender_id))
        .bind(i64::from(message.receiver_id))
        .bind(message.content.as_str())
        .bind(message.sent_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Message::try_from(row)
    }

    async fn conversation(&self, a: UserId, b: UserId) -> DomainResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(&format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE (sender_id = ? AND receiver_id = ?) OR (sender_id = ? AND receiver_id = ?) ORDER BY sent_at ASC, id ASC"
        ))
        .bind(i64::from(a))
        .bind(i64::from(b))
        .bind(i64::from(b))
        .bind(i64::from(a))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Message::try_from).collect()
    }

    async fn contacts(&self, user_id: UserId) -> DomainResult<Vec<Contact>> {
        let id = i64::from(user_id);
        let rows = sqlx::query_as::<_, ContactRow>(CONTACTS_QUERY)
            .bind(id)
            .bind(id)
            .bind(id)
            .bind(id)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Contact::try_from).collect()
    }
}
