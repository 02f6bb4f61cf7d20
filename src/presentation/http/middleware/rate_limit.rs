// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Per-client request budget: `per_second` requests per second sustained,
/// with bursts of up to `burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst: 20,
        }
    }
}

impl RateLimitSettings {
    /// Milliseconds after which one request of the burst quota is given back.
    /// Governor takes an interval, not a rate.
    pub const fn replenish_interval_ms(&self) -> u64 {
        let per_second = if self.per_second == 0 { 1 } else { self.per_second };
        let interval = 1000 / per_second;
        if interval == 0 { 1 } else { interval }
    }
}

/// Clients are keyed by forwarding headers first, then the peer address, so
/// the service must be started with connect info.
pub fn rate_limit_layer(
    settings: RateLimitSettings,
) -> GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(settings.replenish_interval_ms());
    builder.burst_size(settings.burst.max(1));
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("replenish interval and burst are clamped to at least 1");

    GovernorLayer::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(per_second: u64) -> RateLimitSettings {
        RateLimitSettings {
            per_second,
            burst: 1,
        }
    }

    #[test]
    fn higher_rate_means_shorter_interval() {
        assert_eq!(settings(1).replenish_interval_ms(), 1000);
        assert_eq!(settings(10).replenish_interval_ms(), 100);
        assert_eq!(settings(4).replenish_interval_ms(), 250);
        assert!(settings(20).replenish_interval_ms() < settings(10).replenish_interval_ms());
    }

    #[test]
    fn extreme_rates_are_clamped() {
        assert_eq!(settings(0).replenish_interval_ms(), 1000);
        assert_eq!(settings(5000).replenish_interval_ms(), 1);
    }

    #[test]
    fn layer_builds_from_defaults() {
        let _layer = rate_limit_layer(RateLimitSettings::default());
    }
}
