use crate::domain::errors::DomainResult;
use crate::domain::follow::entity::{FollowCounts, FollowEdge};
use crate::domain::user::{UserId, UserSummary};
use async_trait::async_trait;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// `Conflict` when the edge already exists, `NotFound` when the followee
    /// does not resolve. Both come from storage constraints.
    async fn insert(&self, edge: FollowEdge) -> DomainResult<()>;

    /// Returns whether a row was removed.
    async fn delete(&self, follower_id: UserId, followee_id: UserId) -> DomainResult<bool>;

    async fn exists(&self, follower_id: UserId, followee_id: UserId) -> DomainResult<bool>;

    async fn list_followers(&self, user_id: UserId) -> DomainResult<Vec<UserSummary>>;

    async fn list_following(&self, user_id: UserId) -> DomainResult<Vec<UserSummary>>;

    async fn counts(&self, user_id: UserId) -> DomainResult<FollowCounts>;
}
