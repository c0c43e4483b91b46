use std::sync::Arc;

use crate::application::ports::util::AvatarUrlGenerator;
use crate::domain::candidacy::CandidacyRepository;

pub struct CandidacyQueryService {
    pub(super) candidacy_repo: Arc<dyn CandidacyRepository>,
    pub(super) avatars: Arc<dyn AvatarUrlGenerator>,
}

impl CandidacyQueryService {
    pub fn new(
        candidacy_repo: Arc<dyn CandidacyRepository>,
        avatars: Arc<dyn AvatarUrlGenerator>,
    ) -> Self {
        Self {
            candidacy_repo,
            avatars,
        }
    }
}
