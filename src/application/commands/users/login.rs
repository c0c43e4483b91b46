use super::UserCommandService;
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};
use tracing::{debug, info};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        if command.email.trim().is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "email and password are required",
            ));
        }
        let email = Email::new(command.email)?;
        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let now = self.clock.now();
        self.user_repo.record_login(user.id, now).await?;

        let subject = TokenSubject {
            user_id: user.id,
            email: user.email.to_string(),
        };
        let token = self.token_manager.issue(&subject, now)?;

        info!(user_id = %user.id, "user logged in");
        Ok(LoginResult {
            token,
            user: UserDto::from_user(&user, self.avatars.as_ref()),
        })
    }

    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            debug!("login attempt for unknown email");
            let _ = self
                .password_hasher
                .verify(password, self.password_hasher.decoy_hash())
                .await;
            return Err(ApplicationError::unauthorized("invalid credentials"));
        };

        self.password_hasher
            .verify(password, user.password_hash.as_str())
            .await?;

        Ok(user)
    }
}
