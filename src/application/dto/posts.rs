use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::post::PostWithAuthor;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{UserDto, serde_time};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "nome")]
    pub author_name: String,
    #[serde(rename = "email")]
    pub author_email: String,
    pub profile_pic_url: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "texto")]
    pub body: String,
    pub audio_url: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_post(value: PostWithAuthor, avatars: &dyn AvatarUrlGenerator) -> Self {
        let PostWithAuthor { post, author } = value;
        let author = UserDto::from_summary(author, avatars);
        Self {
            id: post.id.into(),
            user_id: author.id,
            author_name: author.name,
            author_email: author.email,
            profile_pic_url: author.profile_pic_url,
            title: post.title.into_inner(),
            body: post.body.into_inner(),
            audio_url: post.audio_url.map(|url| url.into_inner()),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }

    pub fn from_posts(posts: Vec<PostWithAuthor>, avatars: &dyn AvatarUrlGenerator) -> Vec<Self> {
        posts
            .into_iter()
            .map(|post| Self::from_post(post, avatars))
            .collect()
    }
}
