// src/application/services/guard.rs
use std::sync::Arc;

use crate::application::{
    ApplicationResult,
    dto::AuthenticatedUser,
    error::AuthFailure,
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserRepository;
use tracing::debug;

/// Turns an `Authorization` header into a resolved actor: extract the bearer
/// token, verify it, then look the subject up in the user store.
pub struct AuthorizationGuard {
    token_manager: Arc<dyn TokenManager>,
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl AuthorizationGuard {
    pub fn new(
        token_manager: Arc<dyn TokenManager>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            token_manager,
            user_repo,
            clock,
        }
    }

    pub async fn authenticate(
        &self,
        authorization: Option<&str>,
    ) -> ApplicationResult<AuthenticatedUser> {
        let token = bearer_token(authorization).inspect_err(|failure| {
            debug!(%failure, "rejected authorization header");
        })?;

        let claims = self
            .token_manager
            .verify(token, self.clock.now())
            .inspect_err(|failure| debug!(%failure, "rejected bearer token"))?;
        let user_id = claims.user_id()?;
        let expires_at = claims.expires_at()?;

        let Some(user) = self.user_repo.find_by_id(user_id).await? else {
            debug!(user_id = %user_id, "token subject no longer exists");
            return Err(AuthFailure::UserNotFound.into());
        };

        Ok(AuthenticatedUser {
            id: user.id,
            name: user.name.to_string(),
            email: user.email.to_string(),
            expires_at,
        })
    }
}

/// `Bearer <token>`, scheme matched case-insensitively, exactly two parts.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthFailure> {
    let header = header.ok_or(AuthFailure::MissingToken)?;
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthFailure::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_header_is_missing_token() {
        assert_eq!(bearer_token(None), Err(AuthFailure::MissingToken));
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert_eq!(bearer_token(Some("Bearer abc")), Ok("abc"));
        assert_eq!(bearer_token(Some("bearer abc")), Ok("abc"));
        assert_eq!(bearer_token(Some("BEARER  abc")), Ok("abc"));
    }

    #[test]
    fn other_shapes_are_malformed() {
        for raw in ["", "Bearer", "Basic abc", "Bearer a b", "abc", "Token abc"] {
            assert_eq!(
                bearer_token(Some(raw)),
                Err(AuthFailure::MalformedHeader),
                "{raw:?}"
            );
        }
    }
}
