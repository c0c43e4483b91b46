use super::MessageQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, MessageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

impl MessageQueryService {
    /// Both directions between the actor and `other_id`, oldest first.
    pub async fn conversation(
        &self,
        actor: &AuthenticatedUser,
        other_id: i64,
    ) -> ApplicationResult<Vec<MessageDto>> {
        let other = UserId::new(other_id).map_err(|_| ApplicationError::not_found("user not found"))?;
        if self.user_repo.find_by_id(other).await?.is_none() {
            return Err(ApplicationError::not_found("user not found"));
        }

        let messages = self.message_repo.conversation(actor.id, other).await?;
        Ok(messages
            .into_iter()
            .map(|message| MessageDto::for_viewer(message, actor.id))
            .collect())
    }
}
