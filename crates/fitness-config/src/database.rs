//! Database connection settings.
//!
//! `DATABASE_URL` wins when present. Otherwise the URL is assembled from the
//! individual `POSTGRES_*` variables:
//!
//! ```text
//! POSTGRES_USER=fitness
//! POSTGRES_PASSWORD=secret
//! POSTGRES_HOST=localhost
//! POSTGRES_PORT=5432
//! POSTGRES_DATABASE=fitness
//! ```

use std::env;

use anyhow::{Result, anyhow};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => {
                let required = |key: &str| {
                    lookup(key)
                        .ok_or_else(|| anyhow!("{} must be set when DATABASE_URL is not", key))
                };
                format!(
                    "postgres://{}:{}@{}:{}/{}?sslmode=disable",
                    required("POSTGRES_USER")?,
                    required("POSTGRES_PASSWORD")?,
                    required("POSTGRES_HOST")?,
                    lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string()),
                    required("POSTGRES_DATABASE")?,
                )
            }
        };

        Ok(Self {
            url,
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        })
    }
}
