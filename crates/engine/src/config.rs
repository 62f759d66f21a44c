//! Session configuration from environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub log_path: Option<String>,
    pub color: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: time_seed(),
            log_path: None,
            color: true,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `TETRIS_STACK_SEED`: u32 seed (default: derived from the clock)
    /// - `TETRIS_STACK_LOG_PATH`: JSON-lines event log (default: none)
    /// - `TETRIS_STACK_NO_COLOR`: "1" or "true" disables colors
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_STACK_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let no_color = lookup("TETRIS_STACK_NO_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self {
            seed,
            log_path,
            color: !no_color,
        }
    }
}

/// Seed from the wall clock; one per process.
pub fn time_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
