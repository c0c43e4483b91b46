use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{DisplayName, Email, NewUser, PasswordHash},
    },
};
use tracing::info;

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let name = DisplayName::new(command.name)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(name, email, password_hash, self.clock.now())?;

        // The unique index on email settles concurrent registrations.
        let user = self.user_repo.insert(new_user).await.map_err(|err| match err {
            DomainError::Conflict(_) => {
                ApplicationError::conflict("a user with this email already exists")
            }
            other => other.into(),
        })?;

        info!(user_id = %user.id, "user registered");
        Ok(UserDto::from_user(&user, self.avatars.as_ref()))
    }
}
