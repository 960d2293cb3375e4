//! Simulation configuration with documented constants
//!
//! All tunable numbers are collected here with explanations of their purpose
//! and how they interact with each other.

use serde::Deserialize;
use std::path::Path;

use crate::core::error::{Result, TroupeError};

/// Configuration for the simulation systems
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    // === SPATIAL SYSTEM ===
    /// Number of actors a quadtree node may hold before it subdivides
    ///
    /// Must be positive. Lower values build deeper trees with smaller leaves,
    /// trading rebuild time for cheaper radius queries.
    pub quadtree_capacity: usize,

    /// Maximum quadtree depth
    ///
    /// Nodes at this depth stay leaves no matter how many actors they hold,
    /// which bounds rebuild cost when many actors share one spot.
    pub quadtree_max_depth: u32,

    // === MOVEMENT ===
    /// Seconds between random heading changes while exploring
    ///
    /// At 0.1, an exploring actor re-rolls its heading about ten times per
    /// simulated second.
    pub random_steer_interval: f32,

    /// How far a random re-roll pulls the heading toward the random vector
    ///
    /// 0.0 keeps the old heading, 1.0 replaces it outright. 0.3 gives a
    /// meandering walk rather than jitter.
    pub random_steer_blend: f32,

    // === SETUP ===
    /// Random placements tried by `available_spot` before giving up
    pub spawn_attempts: usize,

    /// Seed for the environment's random number generator
    ///
    /// Fixing the seed (and allocating actor ids through the environment)
    /// makes a single-threaded run replay exactly.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quadtree_capacity: 8,
            quadtree_max_depth: 4,

            random_steer_interval: 0.1,
            random_steer_blend: 0.3,

            spawn_attempts: 128,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse a config from TOML; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.quadtree_capacity == 0 {
            return Err(TroupeError::InvalidConfig(
                "quadtree_capacity must be greater than zero".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.random_steer_blend) {
            return Err(TroupeError::InvalidConfig(format!(
                "random_steer_blend ({}) must lie in [0, 1]",
                self.random_steer_blend
            )));
        }

        if self.random_steer_interval < 0.0 {
            return Err(TroupeError::InvalidConfig(format!(
                "random_steer_interval ({}) must not be negative",
                self.random_steer_interval
            )));
        }

        if self.spawn_attempts == 0 {
            return Err(TroupeError::InvalidConfig(
                "spawn_attempts must be greater than zero".into(),
            ));
        }

        Ok(())
    }
}
