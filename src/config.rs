use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
pub const MIN_SEARCH_DEPTH: u8 = 1;
pub const MAX_SEARCH_DEPTH: u8 = 8;

/// Engine options. Missing fields take their defaults, so an empty JS
/// object deserializes to `EngineConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Search depth in plies.
    pub search_depth: u8,
}

impl EngineConfig {
    pub fn with_search_depth(search_depth: u8) -> Result<Self, ConfigError> {
        let config = Self { search_depth };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&self.search_depth) {
            return Err(ConfigError::SearchDepthOutOfRange {
                found: self.search_depth,
                min: MIN_SEARCH_DEPTH,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}
