// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, TokenClaims, TokenSubject},
    error::AuthFailure,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// `Unauthorized` when the password does not match.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
    /// A well-formed hash that no password matches, at the same cost as a
    /// stored one. Login verifies against it when the email is unknown.
    fn decoy_hash(&self) -> &str;
}

/// Issues and checks self-contained session tokens. Both operations are pure:
/// the caller supplies `now`, nothing touches storage.
pub trait TokenManager: Send + Sync {
    fn issue(&self, subject: &TokenSubject, now: DateTime<Utc>) -> ApplicationResult<AuthTokenDto>;
    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthFailure>;
}
