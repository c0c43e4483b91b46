use crate::config::RateLimitSettings;
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};
use tracing::warn;

pub type RateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client-IP token bucket holding `burst` requests and refilling at
/// `per_second` requests a second. `None` when the settings disable limiting
/// or describe an impossible quota.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<RateLimitLayer> {
    let interval_ms = settings.replenish_interval_ms()?;

    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(interval_ms);
    builder.burst_size(settings.burst);
    let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        warn!(?settings, "rate limiter configuration rejected; limiting disabled");
        return None;
    };

    Some(GovernorLayer::new(config))
}
