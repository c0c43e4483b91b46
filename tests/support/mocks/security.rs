// tests/support/mocks/security.rs
use async_trait::async_trait;
use harmocrew_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};
use std::sync::Mutex;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-0123456789abcdef";

/// Reversible "hash" so tests skip Argon2's cost but still catch wrong
/// passwords.
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }

    fn decoy_hash(&self) -> &str {
        "decoy::"
    }
}

/// `StrictPasswordHasher` that remembers every hash it was asked to verify.
#[derive(Debug, Default)]
pub struct RecordingPasswordHasher {
    verified: Mutex<Vec<String>>,
}

impl RecordingPasswordHasher {
    pub fn verified(&self) -> Vec<String> {
        self.verified.lock().unwrap().clone()
    }
}

#[async_trait]
impl PasswordHasher for RecordingPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        StrictPasswordHasher.hash(password).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        self.verified.lock().unwrap().push(expected_hash.to_owned());
        StrictPasswordHasher.verify(password, expected_hash).await
    }

    fn decoy_hash(&self) -> &str {
        "decoy::"
    }
}
