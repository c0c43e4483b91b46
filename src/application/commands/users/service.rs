use std::sync::Arc;

use crate::application::ports::{
    security::{PasswordHasher, TokenManager},
    time::Clock,
    util::AvatarUrlGenerator,
};
use crate::domain::{follow::FollowRepository, user::UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) follow_repo: Arc<dyn FollowRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_manager: Arc<dyn TokenManager>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) avatars: Arc<dyn AvatarUrlGenerator>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        Self {
            user_repo,
            follow_repo,
            password_hasher,
            token_manager,
            clock,
            avatars,
        }
    }
}
