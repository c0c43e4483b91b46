use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, ProfileUpdate, User, UserSummary},
    value_objects::{Email, UserId},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the email is already registered; the
    /// unique index decides, so concurrent registrations cannot both win.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn update_profile(&self, update: ProfileUpdate) -> DomainResult<User>;

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()>;

    async fn search(
        &self,
        term: &str,
        exclude: UserId,
        limit: u32,
    ) -> DomainResult<Vec<UserSummary>>;
}
