use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::ApplicationResult,
};

impl UserQueryService {
    pub async fn list_followers(&self, user_id: i64) -> ApplicationResult<Vec<UserDto>> {
        let user = self.require_user(user_id).await?;
        let followers = self.follow_repo.list_followers(user.id).await?;
        Ok(UserDto::from_summaries(followers, self.avatars.as_ref()))
    }

    pub async fn list_following(&self, user_id: i64) -> ApplicationResult<Vec<UserDto>> {
        let user = self.require_user(user_id).await?;
        let following = self.follow_repo.list_following(user.id).await?;
        Ok(UserDto::from_summaries(following, self.avatars.as_ref()))
    }

    pub async fn list_my_following(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<UserDto>> {
        let following = self.follow_repo.list_following(actor.id).await?;
        Ok(UserDto::from_summaries(following, self.avatars.as_ref()))
    }
}
