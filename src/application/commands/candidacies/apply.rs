use super::CandidacyCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CandidacyDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        candidacy::{NewCandidacy, specifications::CanApplyToPostSpec},
        errors::DomainError,
        post::PostId,
    },
};
use tracing::info;

impl CandidacyCommandService {
    pub async fn apply(
        &self,
        actor: &AuthenticatedUser,
        post_id: i64,
    ) -> ApplicationResult<CandidacyDto> {
        let post_id = PostId::new(post_id).map_err(|_| post_not_found())?;
        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(post_not_found)?;

        if !CanApplyToPostSpec::new(&post, actor.id).is_satisfied() {
            return Err(ApplicationError::validation(
                "you cannot apply to your own post",
            ));
        }

        let new_candidacy = NewCandidacy {
            applicant_id: actor.id,
            post_id,
            created_at: self.clock.now(),
        };

        // Unique (applicant, post) index decides between concurrent applications.
        let candidacy = self
            .candidacy_repo
            .insert(new_candidacy)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => {
                    ApplicationError::conflict("you already applied to this post")
                }
                DomainError::NotFound(_) => post_not_found(),
                other => other.into(),
            })?;

        info!(candidacy_id = candidacy.id.0, post_id = %post_id, applicant_id = %actor.id, "candidacy submitted");
        Ok(candidacy.into())
    }
}

fn post_not_found() -> ApplicationError {
    ApplicationError::not_found("post not found")
}
