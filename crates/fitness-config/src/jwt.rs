use std::env;

use chrono::Duration;

/// Default token lifetime: 1460 hours (roughly two months).
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 1460;

/// Longest accepted token lifetime: ten years.
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_ttl_hours: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            secret: lookup("JWT_SECRET")
                .unwrap_or_else(|| "your-secret-key-change-in-production".to_string()),
            token_ttl_hours: lookup("JWT_TOKEN_TTL_HOURS")
                .and_then(|s| s.parse().ok())
                .filter(|hours: &i64| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
                .unwrap_or(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    /// The configured lifetime, or the default when the field holds a value
    /// outside `1..=MAX_TOKEN_TTL_HOURS`.
    pub fn token_ttl(&self) -> Duration {
        Some(self.token_ttl_hours)
            .filter(|hours| (1..=MAX_TOKEN_TTL_HOURS).contains(hours))
            .and_then(Duration::try_hours)
            .unwrap_or(Duration::hours(DEFAULT_TOKEN_TTL_HOURS))
    }
}
