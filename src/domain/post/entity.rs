use crate::domain::post::value_objects::{AudioUrl, PostBody, PostId, PostTitle};
use crate::domain::user::{UserId, UserSummary};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub owner_id: UserId,
    pub title: PostTitle,
    pub body: PostBody,
    pub audio_url: Option<AudioUrl>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: UserSummary,
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub owner_id: UserId,
    pub title: PostTitle,
    pub body: PostBody,
    pub audio_url: Option<AudioUrl>,
    pub created_at: DateTime<Utc>,
}
