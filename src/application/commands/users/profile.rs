use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, UserProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::ProfileUpdate,
};

pub(super) const MAX_PROFILE_TEXT: usize = 2000;

/// Fields left as `None` keep their stored value. An empty string clears the
/// field; a cleared picture falls back to the generated avatar.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub bio: Option<String>,
    pub links: Option<String>,
    pub profile_pic_url: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserProfileDto> {
        let mut update = ProfileUpdate::new(actor.id);
        if let Some(bio) = command.bio {
            update = update.with_bio(normalize("description", &bio)?);
        }
        if let Some(links) = command.links {
            update = update.with_links(normalize("links", &links)?);
        }
        if let Some(url) = command.profile_pic_url {
            update = update.with_profile_pic_url(normalize("profile picture", &url)?);
        }
        if update.is_empty() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let user = self.user_repo.update_profile(update).await?;
        Ok(UserProfileDto::from_user(&user, self.avatars.as_ref()))
    }
}

fn normalize(field: &str, value: &str) -> ApplicationResult<String> {
    let value = value.trim();
    if value.chars().count() > MAX_PROFILE_TEXT {
        return Err(ApplicationError::validation(format!(
            "{field} must be at most {MAX_PROFILE_TEXT} characters"
        )));
    }
    Ok(value.to_string())
}
