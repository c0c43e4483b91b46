use super::CandidacyCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CandidacyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::candidacy::{CandidacyId, Decision, specifications::CanResolveCandidacySpec},
};
use tracing::info;

pub struct ResolveCandidacyCommand {
    pub id: i64,
    /// Route action, `aceitar` or `rejeitar`.
    pub action: String,
}

impl CandidacyCommandService {
    pub async fn resolve(
        &self,
        actor: &AuthenticatedUser,
        command: ResolveCandidacyCommand,
    ) -> ApplicationResult<CandidacyDto> {
        let decision: Decision = command.action.parse()?;
        let id = CandidacyId::new(command.id).map_err(|_| candidacy_not_found())?;

        let found = self
            .candidacy_repo
            .find_with_owner(id)
            .await?
            .ok_or_else(candidacy_not_found)?;

        if !CanResolveCandidacySpec::new(found.post_owner_id, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the post owner can resolve this candidacy",
            ));
        }

        let mut candidacy = found.candidacy;
        candidacy.resolve(decision);
        let updated = self
            .candidacy_repo
            .update_status(id, candidacy.status)
            .await?;

        info!(candidacy_id = id.0, status = %updated.status, "candidacy resolved");
        Ok(updated.into())
    }
}

fn candidacy_not_found() -> ApplicationError {
    ApplicationError::not_found("candidacy not found")
}
