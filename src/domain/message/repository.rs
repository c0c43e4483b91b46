use crate::domain::errors::DomainResult;
use crate::domain::message::entity::{Contact, Message, NewMessage};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// `NotFound` when either party no longer exists.
    async fn insert(&self, message: NewMessage) -> DomainResult<Message>;

    /// Both directions between `a` and `b`, oldest first.
    async fn conversation(&self, a: UserId, b: UserId) -> DomainResult<Vec<Message>>;

    /// One entry per counterparty, most recent activity first.
    async fn contacts(&self, user_id: UserId) -> DomainResult<Vec<Contact>>;
}
