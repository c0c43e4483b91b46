use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::util::AvatarUrlGenerator,
};
use crate::domain::{
    follow::FollowRepository,
    post::PostRepository,
    user::{User, UserId, UserRepository},
};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) avatars: Arc<dyn AvatarUrlGenerator>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        post_repo: Arc<dyn PostRepository>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            post_repo,
            avatars,
        }
    }

    pub(super) async fn require_user(&self, id: i64) -> ApplicationResult<User> {
        let id = UserId::new(id).map_err(|_| ApplicationError::not_found("user not found"))?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))
    }
}
