use std::sync::Arc;

use crate::application::ports::time::Clock;
use crate::domain::{candidacy::CandidacyRepository, post::PostRepository};

pub struct CandidacyCommandService {
    pub(super) candidacy_repo: Arc<dyn CandidacyRepository>,
    pub(super) post_repo: Arc<dyn PostRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CandidacyCommandService {
    pub fn new(
        candidacy_repo: Arc<dyn CandidacyRepository>,
        post_repo: Arc<dyn PostRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            candidacy_repo,
            post_repo,
            clock,
        }
    }
}
