use super::CandidacyQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ReceivedCandidacyDto},
        error::ApplicationResult,
    },
    domain::candidacy::CandidacyStatus,
};

pub struct ReceivedCandidaciesQuery {
    /// Optional status filter, e.g. `pending`.
    pub status: Option<String>,
}

impl CandidacyQueryService {
    /// Candidacies on the actor's posts, newest first.
    pub async fn list_received(
        &self,
        actor: &AuthenticatedUser,
        query: ReceivedCandidaciesQuery,
    ) -> ApplicationResult<Vec<ReceivedCandidacyDto>> {
        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<CandidacyStatus>()?),
        };

        let received = self.candidacy_repo.list_received(actor.id, status).await?;
        Ok(received
            .into_iter()
            .map(|item| ReceivedCandidacyDto::from_received(item, self.avatars.as_ref()))
            .collect())
    }
}
