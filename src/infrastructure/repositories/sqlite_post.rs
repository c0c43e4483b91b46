use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    AudioUrl, NewPost, Post, PostBody, PostId, PostRepository, PostTitle, PostWithAuthor,
};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

const POST_WITH_AUTHOR: &str = "SELECT p.id, p.owner_id, p.title, p.body, p.audio_url, p.created_at, p.updated_at, u.name AS author_name, u.email AS author_email, u.profile_pic_url AS author_pic FROM posts p JOIN users u ON u.id = p.owner_id";

#[derive(Clone)]
pub struct SqlitePostRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    owner_id: i64,
    title: String,
    body: String,
    audio_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            owner_id: UserId::new(row.owner_id)?,
            title: PostTitle::new(row.title)?,
            body: PostBody::new(row.body)?,
            audio_url: AudioUrl::parse(row.audio_url),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostWithAuthorRow {
    #[sqlx(flatten)]
    post: PostRow,
    author_name: String,
    author_email: String,
    author_pic: Option<String>,
}

impl TryFrom<PostWithAuthorRow> for PostWithAuthor {
    type Error = DomainError;

    fn try_from(row: PostWithAuthorRow) -> Result<Self, Self::Error> {
        let post = Post::try_from(row.post)?;
        Ok(PostWithAuthor {
            author: UserSummary {
                id: post.owner_id,
                name: row.author_name,
                email: row.author_email,
                profile_pic_url: row.author_pic,
            },
            post,
        })
    }
}

fn into_posts(rows: Vec<PostWithAuthorRow>) -> DomainResult<Vec<PostWithAuthor>> {
    rows.into_iter().map(PostWithAuthor::try_from).collect()
}

#[async_trait]
impl PostRepository for SqlitePostRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<PostWithAuthor> {
        let NewPost {
            owner_id,
            title,
            body,
            audio_url,
            created_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO posts (owner_id, title, body, audio_url, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(i64::from(owner_id))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(audio_url.as_ref().map(AudioUrl::as_str))
        .bind(created_at)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, PostWithAuthorRow>(&format!("{POST_WITH_AUTHOR} WHERE p.id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        PostWithAuthor::try_from(row)
    }

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            "SELECT id, owner_id, title, body, audio_url, created_at, updated_at FROM posts WHERE id = ?",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR} ORDER BY p.created_at DESC, p.id DESC LIMIT ?"
        ))
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_posts(rows)
    }

    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<PostWithAuthor>> {
        let rows = sqlx::query_as::<_, PostWithAuthorRow>(&format!(
            "{POST_WITH_AUTHOR} WHERE p.owner_id = ? ORDER BY p.created_at DESC, p.id DESC"
        ))
        .bind(i64::from(owner_id))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        into_posts(rows)
    }

    async fn count_by_owner(&self, owner_id: UserId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE owner_id = ?")
            .bind(i64::from(owner_id))
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(count).map_err(|err| DomainError::Persistence(err.to_string()))
    }
}
