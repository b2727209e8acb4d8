//! Runtime configuration from environment variables.
//!
//! | Variable | Values | Default |
//! |----------|--------|---------|
//! | `TETRIS_PREVIEW_COUNT` | `1..=5` | 1 |
//! | `TETRIS_ADVANCED` | `1/0/true/false/yes/no/on/off` | off |
//! | `TETRIS_GHOST` | same as above | on |
//! | `TETRIS_SEED` | `u32` | derived from the clock |
//! | `TETRIS_EVENT_LOG` | file path, empty = disabled | disabled |

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::core::SessionConfig;
use crate::types::{DEFAULT_PREVIEW_COUNT, MAX_PREVIEW_COUNT};

pub const ENV_PREVIEW_COUNT: &str = "TETRIS_PREVIEW_COUNT";
pub const ENV_ADVANCED: &str = "TETRIS_ADVANCED";
pub const ENV_GHOST: &str = "TETRIS_GHOST";
pub const ENV_SEED: &str = "TETRIS_SEED";
pub const ENV_EVENT_LOG: &str = "TETRIS_EVENT_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var}: expected 1/0/true/false/yes/no/on/off, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var}: preview count must be between 1 and {max}, got {value}")]
    PreviewOutOfRange {
        var: &'static str,
        value: usize,
        max: usize,
    },
}

/// Everything the runner needs to set up a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub session: SessionConfig,
    pub seed: u32,
    pub event_log: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            seed: 1,
            event_log: None,
        }
    }
}

impl GameConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unset or blank variables fall back to their defaults; anything else
    /// that does not parse is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let preview_count = match get(ENV_PREVIEW_COUNT) {
            Some(raw) => parse_preview_count(&raw)?,
            None => DEFAULT_PREVIEW_COUNT,
        };
        let advanced_mode = match get(ENV_ADVANCED) {
            Some(raw) => parse_bool(ENV_ADVANCED, &raw)?,
            None => false,
        };
        let show_ghost = match get(ENV_GHOST) {
            Some(raw) => parse_bool(ENV_GHOST, &raw)?,
            None => true,
        };
        let seed = match get(ENV_SEED) {
            Some(raw) => raw.parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
                var: ENV_SEED,
                value: raw,
            })?,
            None => clock_seed(),
        };
        let event_log = get(ENV_EVENT_LOG).map(PathBuf::from);

        Ok(Self {
            session: SessionConfig {
                preview_count,
                advanced_mode,
                show_ghost,
            },
            seed,
            event_log,
        })
    }
}

fn parse_preview_count(raw: &str) -> Result<usize, ConfigError> {
    let value = raw.parse::<usize>().map_err(|_| ConfigError::InvalidNumber {
        var: ENV_PREVIEW_COUNT,
        value: raw.to_string(),
    })?;
    if !(1..=MAX_PREVIEW_COUNT).contains(&value) {
        return Err(ConfigError::PreviewOutOfRange {
            var: ENV_PREVIEW_COUNT,
            value,
            max: MAX_PREVIEW_COUNT,
        });
    }
    Ok(value)
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}

/// Seed from the wall clock; never 0.
fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    ((nanos ^ (nanos >> 32)) as u32).max(1)
}
