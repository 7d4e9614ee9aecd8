//! Game configuration from environment variables.
//!
//! - `TUI_2048_SIZE`: board size (default 4)
//! - `TUI_2048_SEED`: tile placement seed (default: derived from the clock)
//! - `TUI_2048_LOG_PATH`: write logs to this file (default: no logging)
//!
//! Unparsable values fall back to their defaults. The size itself is validated
//! when the game is created, not here.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::DEFAULT_BOARD_SIZE;

pub const ENV_SIZE: &str = "TUI_2048_SIZE";
pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    /// `None` means pick a seed at startup
    pub seed: Option<u64>,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seed: None,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let size = lookup(ENV_SIZE)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_BOARD_SIZE);

        let seed = lookup(ENV_SEED).and_then(|s| s.trim().parse().ok());

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            size,
            seed,
            log_path,
        }
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = GameConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.size, 4);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = GameConfig::from_lookup(lookup(&[
            (ENV_SIZE, "5"),
            (ENV_SEED, " 42 "),
            (ENV_LOG_PATH, "/tmp/2048.log"),
        ]));
        assert_eq!(cfg.size, 5);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/2048.log")));
        assert_eq!(cfg.resolve_seed(), 42);
    }

    #[test]
    fn unparsable_values_fall_back() {
        let cfg = GameConfig::from_lookup(lookup(&[
            (ENV_SIZE, "big"),
            (ENV_SEED, "-3"),
            (ENV_LOG_PATH, "   "),
        ]));
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn zero_size_is_passed_through() {
        let cfg = GameConfig::from_lookup(lookup(&[(ENV_SIZE, "0")]));
        assert_eq!(cfg.size, 0);
    }
}
