use std::sync::Arc;

use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::{post::PostRepository, user::UserRepository};

pub struct PostQueryService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) avatars: Arc<dyn AvatarUrlGenerator>,
}

impl PostQueryService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        user_repo: Arc<dyn UserRepository>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        Self {
            post_repo,
            user_repo,
            avatars,
        }
    }
}
