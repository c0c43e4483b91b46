use crate::domain::candidacy::entity::{
    Candidacy, CandidacyWithOwner, NewCandidacy, ReceivedCandidacy,
};
use crate::domain::candidacy::value_objects::{CandidacyId, CandidacyStatus};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait CandidacyRepository: Send + Sync {
    /// `Conflict` when the applicant already applied to the post (unique
    /// index), `NotFound` when the post vanished in the meantime.
    async fn insert(&self, candidacy: NewCandidacy) -> DomainResult<Candidacy>;

    async fn find_with_owner(&self, id: CandidacyId) -> DomainResult<Option<CandidacyWithOwner>>;

    async fn update_status(
        &self,
        id: CandidacyId,
        status: CandidacyStatus,
    ) -> DomainResult<Candidacy>;

    /// Candidacies on posts owned by `owner_id`, newest first.
    async fn list_received(
        &self,
        owner_id: UserId,
        status: Option<CandidacyStatus>,
    ) -> DomainResult<Vec<ReceivedCandidacy>>;
}
