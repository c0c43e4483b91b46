use super::UserCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, follow::FollowEdge, user::UserId},
};
use tracing::info;

impl UserCommandService {
    pub async fn follow(&self, actor: &AuthenticatedUser, target_id: i64) -> ApplicationResult<()> {
        let target = UserId::new(target_id).map_err(|_| user_not_found())?;
        let edge = FollowEdge::new(actor.id, target, self.clock.now())?;

        if self.user_repo.find_by_id(target).await?.is_none() {
            return Err(user_not_found());
        }

        // Concurrent duplicates are resolved by the unique (follower, followee) index.
        self.follow_repo
            .insert(edge)
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => {
                    ApplicationError::conflict("you are already following this user")
                }
                DomainError::NotFound(_) => user_not_found(),
                other => other.into(),
            })?;

        info!(follower_id = %actor.id, followee_id = %target, "follow created");
        Ok(())
    }

    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        target_id: i64,
    ) -> ApplicationResult<()> {
        let target = UserId::new(target_id).map_err(|_| user_not_found())?;

        if !self.follow_repo.delete(actor.id, target).await? {
            return Err(ApplicationError::conflict("you are not following this user"));
        }

        info!(follower_id = %actor.id, followee_id = %target, "follow removed");
        Ok(())
    }
}

fn user_not_found() -> ApplicationError {
    ApplicationError::not_found("user not found")
}
