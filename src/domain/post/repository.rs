use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostWithAuthor};
use crate::domain::post::value_objects::PostId;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Inserts and reads the row back (with its author) in one transaction.
    async fn insert(&self, post: NewPost) -> DomainResult<PostWithAuthor>;

    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    /// Newest first.
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<PostWithAuthor>>;

    /// Newest first, unbounded.
    async fn list_by_owner(&self, owner_id: UserId) -> DomainResult<Vec<PostWithAuthor>>;

    async fn count_by_owner(&self, owner_id: UserId) -> DomainResult<u64>;
}
