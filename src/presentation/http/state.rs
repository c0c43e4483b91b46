// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::RateLimitSettings;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub db_pool: Arc<SqlitePool>,
    pub settings: HttpSettings,
}

/// Transport-level knobs the router needs at construction time.
#[derive(Clone, Debug)]
pub struct HttpSettings {
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitSettings,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".into()],
            rate_limit: RateLimitSettings {
                per_second: 10,
                burst: 20,
            },
        }
    }
}
