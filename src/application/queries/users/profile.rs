use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserProfileDto},
    error::ApplicationResult,
};

impl UserQueryService {
    pub async fn get_profile(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<UserProfileDto> {
        let user = self.require_user(actor.id.into()).await?;
        Ok(UserProfileDto::from_user(&user, self.avatars.as_ref()))
    }
}
