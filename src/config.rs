//! Diagram configuration and the errors raised while loading it.

use crate::analysis::validation::DataIssue;
use crate::store::Topology;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Scroll anchor must lie in [0, 1], got {0}")]
    InvalidAnchor(f64),
    #[error("Example data is inconsistent with the topology ({} issue(s))", .0.len())]
    Invalid(Vec<DataIssue>),
}

/// Where the latest revealed explanation lands inside the scrolling panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Fraction of the container height at which the block's center is placed.
    /// `0.5` centers it.
    pub anchor: f64,
}

impl ScrollConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.anchor) {
            return Err(ConfigError::InvalidAnchor(self.anchor));
        }
        Ok(())
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self { anchor: 0.5 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    pub topology: Topology,
    pub scroll: ScrollConfig,
}

impl DiagramConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scroll.validate()
    }
}
