//! Centralized engine options with TOML preset support.
//!
//! All tweakable settings (per-strategy geometric constants, spring tuning,
//! default strategy) are consolidated here. Options serialize to/from TOML
//! for presets; all sub-structs use `#[serde(default)]` so partial files
//! (e.g. only overriding `[stack]`) work correctly.

mod animation;

use std::path::Path;

pub use animation::AnimationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;
use crate::layout::{CarouselParams, GridParams, StackParams};

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct EngineOptions {
    /// Stack strategy constants.
    pub stack: StackParams,
    /// Carousel strategy constants.
    pub carousel: CarouselParams,
    /// Grid strategy constants.
    pub grid: GridParams,
    /// Spring tuning and settle thresholds.
    pub animation: AnimationOptions,
    /// Name of the default strategy. Empty keeps the built-in default
    /// (stack).
    pub default_strategy: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            stack: StackParams::default(),
            carousel: CarouselParams::default(),
            grid: GridParams::default(),
            animation: AnimationOptions::default(),
            default_strategy: String::new(),
        }
    }
}

impl EngineOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(EngineOptions)
    }

    /// JSON Schema as a pretty-printed JSON string.
    pub fn json_schema_string() -> Result<String, VitrineError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        toml::from_str(&content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
    }
}
