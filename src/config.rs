//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MINI_TETRIS_SEED` | from clock | piece sequence seed |
//! | `MINI_TETRIS_DROP_MS` | 800 | gravity interval |
//! | `MINI_TETRIS_LOCALE` | `en` | `en` or `ar` |
//! | `MINI_TETRIS_LOG` | `mini_tetris=info` | tracing filter |
//! | `MINI_TETRIS_LOG_DIR` | unset | write logs to this directory |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::types::{Locale, DROP_INTERVAL_MS};

pub const ENV_SEED: &str = "MINI_TETRIS_SEED";
pub const ENV_DROP_MS: &str = "MINI_TETRIS_DROP_MS";
pub const ENV_LOCALE: &str = "MINI_TETRIS_LOCALE";
pub const ENV_LOG: &str = "MINI_TETRIS_LOG";
pub const ENV_LOG_DIR: &str = "MINI_TETRIS_LOG_DIR";

pub const DEFAULT_LOG_FILTER: &str = "mini_tetris=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub drop_interval_ms: u32,
    pub locale: Locale,
    pub log_filter: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            drop_interval_ms: DROP_INTERVAL_MS,
            locale: Locale::En,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset and blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let seed = match get(ENV_SEED) {
            Some(v) => v
                .parse::<u32>()
                .map_err(|_| anyhow!("{}: invalid seed: {}", ENV_SEED, v))?,
            None => clock_seed(),
        };

        let drop_interval_ms = match get(ENV_DROP_MS) {
            Some(v) => parse_drop_ms(&v)
                .ok_or_else(|| anyhow!("{}: expected a positive integer, got: {}", ENV_DROP_MS, v))?,
            None => DROP_INTERVAL_MS,
        };

        let locale = match get(ENV_LOCALE) {
            Some(v) => Locale::from_str(&v)
                .ok_or_else(|| anyhow!("{}: unsupported locale: {}", ENV_LOCALE, v))?,
            None => Locale::En,
        };

        let log_filter = match get(ENV_LOG) {
            Some(v) => {
                EnvFilter::try_new(&v)
                    .map_err(|e| anyhow!("{}: invalid filter {}: {}", ENV_LOG, v, e))?;
                v
            }
            None => DEFAULT_LOG_FILTER.to_string(),
        };
        let log_dir = get(ENV_LOG_DIR).map(PathBuf::from);

        Ok(Self {
            seed,
            drop_interval_ms,
            locale,
            log_filter,
            log_dir,
        })
    }
}

fn parse_drop_ms(v: &str) -> Option<u32> {
    v.parse::<u32>().ok().filter(|ms| *ms > 0)
}

/// Seed derived from the wall clock, for games that should differ per run.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}
