use std::{env, path::PathBuf, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON catalog snapshot to import at startup (default: none)
    pub catalog_path: Option<PathBuf>,
    /// Seed demo courses when no snapshot is given (default: true)
    pub seed_demo: bool,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Window of the upcoming feed when `days` is not given (default: 7)
    pub upcoming_default_days: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SYLLABUS_CATALOG_PATH` - Catalog snapshot to import (default: unset)
    /// - `SYLLABUS_SEED_DEMO` - Seed demo data when no snapshot is set (default: true)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `UPCOMING_DEFAULT_DAYS` - Upcoming feed window in days (default: 7)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_path: lookup("SYLLABUS_CATALOG_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            seed_demo: lookup("SYLLABUS_SEED_DEMO")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            upcoming_default_days: lookup("UPCOMING_DEFAULT_DAYS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
