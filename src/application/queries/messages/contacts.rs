use super::MessageQueryService;
use crate::application::{
    dto::{AuthenticatedUser, ContactDto},
    error::ApplicationResult,
};

impl MessageQueryService {
    /// Everyone the actor has exchanged at least one message with.
    pub async fn contacts(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<ContactDto>> {
        let contacts = self.message_repo.contacts(actor.id).await?;
        Ok(contacts
            .into_iter()
            .map(|contact| ContactDto::from_contact(contact, self.avatars.as_ref()))
            .collect())
    }
}
