use std::sync::Arc;

use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::{message::MessageRepository, user::UserRepository};

pub struct MessageQueryService {
    pub(super) message_repo: Arc<dyn MessageRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) avatars: Arc<dyn AvatarUrlGenerator>,
}

impl MessageQueryService {
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        user_repo: Arc<dyn UserRepository>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        Self {
            message_repo,
            user_repo,
            avatars,
        }
    }
}
