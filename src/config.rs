//! Search bounds and solver options, loadable from JSON.
//!
//! Every size-dependent bound is an `Option`: `None` falls back to the
//! per-size default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::heuristics::Heuristic;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverConfig {
    pub iddfs: IddfsOpts,
    pub ida_star: IdaStarOpts,
    pub bfs: BfsOpts,
    pub kociemba: KociembaOpts,
}

impl SolverConfig {
    pub fn from_json_str(json: &str) -> Result<SolverConfig, ConfigError> {
        let config: SolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<SolverConfig, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        SolverConfig::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let (Some(min), Some(max)) = (self.iddfs.min_depth, self.iddfs.max_depth) {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "iddfs.minDepth {} is above iddfs.maxDepth {}",
                    min, max
                )));
            }
        }
        if self.ida_star.max_threshold.map_or(false, |t| t.is_nan() || t < 0.0) {
            return Err(ConfigError::Invalid(
                "idaStar.maxThreshold must be a non-negative number".to_string(),
            ));
        }
        if self.bfs.max_states == Some(0) {
            return Err(ConfigError::Invalid(
                "bfs.maxStates must be at least 1".to_string(),
            ));
        }
        if self.kociemba.url.trim().is_empty() {
            return Err(ConfigError::Invalid("kociemba.url is empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IddfsOpts {
    /// First depth searched. Solutions shorter than this are still found.
    pub min_depth: Option<usize>,
    pub max_depth: Option<usize>,
}

impl IddfsOpts {
    pub fn min_depth_for(&self, _size: usize) -> usize {
        self.min_depth.unwrap_or(1)
    }

    pub fn max_depth_for(&self, size: usize) -> usize {
        self.max_depth.unwrap_or(match size {
            2 => 7,
            3 => 6,
            4 => 5,
            _ => 4,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IdaStarOpts {
    pub max_threshold: Option<f64>,
    pub heuristic: Heuristic,
    /// Search every layer instead of the lower half of each axis.
    pub full_move_set: bool,
}

impl IdaStarOpts {
    pub fn max_threshold_for(&self, size: usize) -> f64 {
        self.max_threshold.unwrap_or(match size {
            2 => 11.0,
            3 => 20.0,
            4 => 30.0,
            5 => 40.0,
            _ => 50.0,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BfsOpts {
    pub max_depth: Option<usize>,
    pub max_states: Option<usize>,
}

impl BfsOpts {
    pub fn max_depth_for(&self, size: usize) -> usize {
        self.max_depth.unwrap_or(if size == 2 { 8 } else { 5 })
    }

    pub fn max_states_for(&self, _size: usize) -> usize {
        self.max_states.unwrap_or(2_000_000)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KociembaOpts {
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for KociembaOpts {
    fn default() -> Self {
        KociembaOpts {
            url: "http://localhost:5000/solve".to_string(),
            timeout_ms: 10_000,
        }
    }
}
