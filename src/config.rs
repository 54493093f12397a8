//! Runtime configuration from environment variables.
//!
//! - `KILLER_THRESHOLD`: score that makes a killer (default 5, clamped to 1..=20)
//! - `KILLER_LOG`: log filter, `env_logger` syntax (default "info")
//! - `KILLER_LOG_PATH`: log file for the terminal UI (default: no logging)
//! - `KILLER_RENDER_INTERVAL_MS`: idle redraw interval (default 250)
//! - `KILLER_TICK_MS`: input poll timeout (default 50)
//!
//! Unset or unparsable values fall back to their defaults.

use std::path::PathBuf;

use crate::types::{KILLER_THRESHOLD, MAX_NUMBER};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub threshold: u8,
    pub log_filter: String,
    pub log_path: Option<PathBuf>,
    pub render_interval_ms: u64,
    pub tick_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            threshold: KILLER_THRESHOLD,
            log_filter: "info".to_string(),
            log_path: None,
            render_interval_ms: 250,
            tick_ms: 50,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a map instead of the process env).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let trimmed = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let threshold = trimmed("KILLER_THRESHOLD")
            .and_then(|s| s.parse::<u8>().ok())
            .map(|t| t.clamp(1, MAX_NUMBER))
            .unwrap_or(defaults.threshold);

        let log_filter = trimmed("KILLER_LOG").unwrap_or(defaults.log_filter);
        let log_path = trimmed("KILLER_LOG_PATH").map(PathBuf::from);

        let render_interval_ms = trimmed("KILLER_RENDER_INTERVAL_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.render_interval_ms);

        let tick_ms = trimmed("KILLER_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.tick_ms);

        Self {
            threshold,
            log_filter,
            log_path,
            render_interval_ms,
            tick_ms,
        }
    }
}
