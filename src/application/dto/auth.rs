use crate::application::error::AuthFailure;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthTokenDto {
    pub token: String,
    #[serde(with = "serde_time")]
    pub issued_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub expires_at: DateTime<Utc>,
    pub expires_in: i64,
}

/// Identity bound into a freshly issued token.
#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
    pub email: String,
}

/// Claims recovered from a token that passed signature and expiry checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub subject: i64,
    pub email: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl TokenClaims {
    pub fn user_id(&self) -> Result<UserId, AuthFailure> {
        UserId::new(self.subject).map_err(|_| AuthFailure::Malformed)
    }

    pub fn expires_at(&self) -> Result<DateTime<Utc>, AuthFailure> {
        DateTime::from_timestamp(self.expires_at, 0).ok_or(AuthFailure::Malformed)
    }
}

/// The actor of a protected request, resolved against the user store.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}
