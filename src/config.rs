// src/config.rs
use std::{env, str::FromStr, time::Duration};
use thiserror::Error;

pub const MIN_TOKEN_SECRET_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
}

impl RateLimitSettings {
    /// Millisecond resolution of the limiter caps the sustained rate.
    pub const MAX_PER_SECOND: u64 = 1000;

    /// A zero rate or burst turns the limiter off.
    pub fn is_enabled(&self) -> bool {
        self.per_second > 0 && self.burst > 0
    }

    /// Time for one token to return to the bucket, `None` when disabled.
    pub fn replenish_interval_ms(&self) -> Option<u64> {
        self.is_enabled()
            .then(|| 1000 / self.per_second.min(Self::MAX_PER_SECOND))
    }
}

#[derive(Clone)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    token_secret: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    avatar_base_url: String,
    rate_limit: RateLimitSettings,
    db_max_connections: u32,
}

// Keeps the secret out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("token_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("allowed_origins", &self.allowed_origins)
            .field("avatar_base_url", &self.avatar_base_url)
            .field("rate_limit", &self.rate_limit)
            .field("db_max_connections", &self.db_max_connections)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://harmocrew.db".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".into()
}

fn default_token_ttl() -> u64 {
    24 * 60 * 60
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".into(),
        "http://127.0.0.1:3000".into(),
    ]
}

fn default_avatar_base_url() -> String {
    "https://i.pravatar.cc/150".into()
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid(format!("{key} has an invalid value '{raw}'"))),
        _ => Ok(default),
    }
}

impl AppConfig {
    /// Build configuration from the process environment, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Optional values fall back to
    /// defaults; malformed values are errors rather than silently ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = non_empty("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let token_secret = non_empty("TOKEN_SECRET").ok_or(ConfigError::Missing("TOKEN_SECRET"))?;
        if token_secret.len() < MIN_TOKEN_SECRET_LEN {
            return Err(ConfigError::Invalid(format!(
                "TOKEN_SECRET must be at least {MIN_TOKEN_SECRET_LEN} bytes"
            )));
        }

        let token_ttl_secs = parse_or(&lookup, "TOKEN_TTL_SECONDS", default_token_ttl())?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "TOKEN_TTL_SECONDS must be greater than zero".into(),
            ));
        }

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(ToString::to_string)
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        let avatar_base_url = non_empty("AVATAR_BASE_URL").unwrap_or_else(default_avatar_base_url);

        let rate_limit = RateLimitSettings {
            per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 10)?,
            burst: parse_or(&lookup, "RATE_LIMIT_BURST", 20)?,
        };
        if rate_limit.per_second > RateLimitSettings::MAX_PER_SECOND {
            return Err(ConfigError::Invalid(format!(
                "RATE_LIMIT_PER_SECOND must be at most {}",
                RateLimitSettings::MAX_PER_SECOND
            )));
        }

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 16)?;
        if db_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be greater than zero".into(),
            ));
        }

        Ok(Self {
            database_url,
            listen_addr,
            token_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            avatar_base_url,
            rate_limit,
            db_max_connections,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn token_secret(&self) -> &[u8] {
        self.token_secret.as_bytes()
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn avatar_base_url(&self) -> &str {
        &self.avatar_base_url
    }

    pub fn rate_limit(&self) -> RateLimitSettings {
        self.rate_limit
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = config_from(&[("TOKEN_SECRET", SECRET)]).unwrap();
        assert_eq!(config.database_url(), "sqlite://harmocrew.db");
        assert_eq!(config.listen_addr(), "127.0.0.1:5000");
        assert_eq!(config.token_ttl(), Duration::from_secs(86_400));
        assert_eq!(config.allowed_origins().len(), 2);
        assert_eq!(config.avatar_base_url(), "https://i.pravatar.cc/150");
        assert_eq!(
            config.rate_limit(),
            RateLimitSettings {
                per_second: 10,
                burst: 20
            }
        );
        assert_eq!(config.db_max_connections(), 16);
    }

    #[test]
    fn secret_is_required_and_must_be_long_enough() {
        assert!(matches!(
            config_from(&[]),
            Err(ConfigError::Missing("TOKEN_SECRET"))
        ));
        assert!(matches!(
            config_from(&[("TOKEN_SECRET", "short")]),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let result = config_from(&[("TOKEN_SECRET", SECRET), ("TOKEN_TTL_SECONDS", "soon")]);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("TOKEN_SECRET", SECRET),
            ("ALLOWED_ORIGINS", " https://a.example , ,https://b.example"),
        ])
        .unwrap();
        assert_eq!(
            config.allowed_origins(),
            ["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn zero_rate_disables_limiter() {
        let config =
            config_from(&[("TOKEN_SECRET", SECRET), ("RATE_LIMIT_PER_SECOND", "0")]).unwrap();
        assert!(!config.rate_limit().is_enabled());
    }

    #[test]
    fn rate_is_requests_per_second() {
        let interval = |per_second| {
            RateLimitSettings {
                per_second,
                burst: 20,
            }
            .replenish_interval_ms()
        };
        assert_eq!(interval(10), Some(100));
        assert_eq!(interval(3), Some(333));
        assert_eq!(interval(1000), Some(1));
        assert_eq!(interval(0), None);
    }

    #[test]
    fn rate_above_millisecond_resolution_is_rejected() {
        let result = config_from(&[("TOKEN_SECRET", SECRET), ("RATE_LIMIT_PER_SECOND", "1001")]);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn debug_output_hides_secret() {
        let config = config_from(&[("TOKEN_SECRET", SECRET)]).unwrap();
        assert!(!format!("{config:?}").contains(SECRET));
    }
}
