// src/infrastructure/security/claims.rs
use serde::{Deserialize, Serialize};

use crate::application::dto::TokenClaims;

/// Wire form of the session claims: user id, email and unix-second bounds.
#[derive(Debug, Serialize, Deserialize)]
pub struct WireClaims {
    pub sub: i64,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<WireClaims> for TokenClaims {
    fn from(value: WireClaims) -> Self {
        Self {
            subject: value.sub,
            email: value.email,
            issued_at: value.iat,
            expires_at: value.exp,
        }
    }
}
