use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{message::MessageRepository, user::UserRepository};

pub struct MessageCommandService {
    pub(super) message_repo: Arc<dyn MessageRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl MessageCommandService {
    pub fn new(
        message_repo: Arc<dyn MessageRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            message_repo,
            user_repo,
            clock,
        }
    }
}
