//! AI agent configuration parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// AI agent configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Deepest ply searched before a position scores 0 (default: 6).
    /// Keeps 4×4 and 5×5 searches cheap at the cost of optimality.
    pub max_depth: u32,

    /// Chance that an easy agent plays a random cell (default: 0.7).
    pub easy_random_probability: f64,

    /// Score of an immediate win; deeper wins score less (default: 10).
    pub win_score: i32,

    /// Random seed for the agent's RNG.
    /// Same seed produces the same easy-mode choices.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            easy_random_probability: 0.7,
            win_score: 10,
            seed: 42,
        }
    }
}

impl AgentConfig {
    /// Create a new config with custom ply cap.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with custom easy-mode randomness.
    pub fn with_easy_random_probability(mut self, p: f64) -> Self {
        self.easy_random_probability = p;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.easy_random_probability) {
            return Err(ConfigError::InvalidProbability {
                field: "easy_random_probability",
                value: self.easy_random_probability,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
