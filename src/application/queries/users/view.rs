use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDetailDto},
    error::ApplicationResult,
};

impl UserQueryService {
    /// Public page of `user_id`, annotated with whether the actor follows them.
    pub async fn get_user(
        &self,
        actor: &AuthenticatedUser,
        user_id: i64,
    ) -> ApplicationResult<UserDetailDto> {
        let user = self.require_user(user_id).await?;
        let is_following = self.follow_repo.exists(actor.id, user.id).await?;
        let counts = self.follow_repo.counts(user.id).await?;
        let posts_count = self.post_repo.count_by_owner(user.id).await?;

        Ok(UserDetailDto::from_parts(
            &user,
            is_following,
            counts,
            posts_count,
            self.avatars.as_ref(),
        ))
    }
}
