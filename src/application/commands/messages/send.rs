use super::MessageCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, MessageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        message::{MessageContent, NewMessage},
        user::UserId,
    },
};

pub struct SendMessageCommand {
    pub receiver_id: Option<i64>,
    pub content: String,
}

impl MessageCommandService {
    pub async fn send(
        &self,
        actor: &AuthenticatedUser,
        command: SendMessageCommand,
    ) -> ApplicationResult<MessageDto> {
        let receiver_id = command
            .receiver_id
            .ok_or_else(|| ApplicationError::validation("receiver_id is required"))?;
        let content = MessageContent::new(command.content)?;
        let receiver = UserId::new(receiver_id).map_err(|_| unknown_receiver())?;

        if self.user_repo.find_by_id(receiver).await?.is_none() {
            return Err(unknown_receiver());
        }

        let message = NewMessage {
            sender_id: actor.id,
            receiver_id: receiver,
            content,
            sent_at: self.clock.now(),
        };
        let stored = self
            .message_repo
            .insert(message)
            .await
            .map_err(|err| match err {
                DomainError::NotFound(_) => unknown_receiver(),
                other => other.into(),
            })?;

        Ok(MessageDto::for_viewer(stored, actor.id))
    }
}

fn unknown_receiver() -> ApplicationError {
    ApplicationError::validation("receiver does not exist")
}
