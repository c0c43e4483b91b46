// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenClaims, TokenSubject},
    error::{ApplicationError, ApplicationResult, AuthFailure},
    ports::security::TokenManager,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use super::claims::WireClaims;

/// HS256 JWTs signed with one shared secret. Rotating the secret
/// invalidates every outstanding token.
#[derive(Clone)]
pub struct HmacTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl HmacTokenManager {
    pub const MIN_SECRET_LEN: usize = 32;

    pub fn new(secret: &[u8], ttl: Duration) -> ApplicationResult<Self> {
        if secret.len() < Self::MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {} bytes",
                Self::MIN_SECRET_LEN
            )));
        }
        if ttl <= Duration::zero() {
            return Err(ApplicationError::infrastructure("token ttl must be positive"));
        }

        // Expiry is checked against the caller's clock in `verify`, not the
        // library's wall clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        // `sub` is numeric, so serde enforces its presence instead.
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }
}

fn auth_failure(err: &jsonwebtoken::errors::Error) -> AuthFailure {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthFailure::Expired,
        ErrorKind::InvalidSignature => AuthFailure::InvalidSignature,
        _ => AuthFailure::Malformed,
    }
}

impl TokenManager for HmacTokenManager {
    fn issue(&self, subject: &TokenSubject, now: DateTime<Utc>) -> ApplicationResult<AuthTokenDto> {
        let issued_at = now.timestamp();
        let expires_at = issued_at + self.ttl.num_seconds();
        let claims = WireClaims {
            sub: i64::from(subject.user_id),
            email: subject.email.clone(),
            iat: issued_at,
            exp: expires_at,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        let to_instant = |secs: i64| {
            DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| ApplicationError::infrastructure("timestamp out of range"))
        };
        Ok(AuthTokenDto {
            token,
            issued_at: to_instant(issued_at)?,
            expires_at: to_instant(expires_at)?,
            expires_in: self.ttl.num_seconds(),
        })
    }

    fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthFailure> {
        let claims = decode::<WireClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|err| auth_failure(&err))?
            .claims;

        if now.timestamp() > claims.exp {
            return Err(AuthFailure::Expired);
        }
        Ok(claims.into())
    }
}
