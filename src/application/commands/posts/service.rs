use std::sync::Arc;

use crate::application::ports::{time::Clock, util::AvatarUrlGenerator};
use crate::domain::post::PostRepository;

pub struct PostCommandService {
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) avatars: Arc<dyn AvatarUrlGenerator>,
}

impl PostCommandService {
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        Self {
            post_repo,
            clock,
            avatars,
        }
    }
}
