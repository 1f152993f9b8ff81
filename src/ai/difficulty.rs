//! Move-selection policies.

use serde::{Deserialize, Serialize};

use super::config::AgentConfig;

/// How hard the AI tries.
///
/// Medium and Hard currently behave the same: both always search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Usually random, otherwise optimal.
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Probability of skipping the search and playing a random cell.
    #[must_use]
    pub fn random_move_probability(self, config: &AgentConfig) -> f64 {
        match self {
            Difficulty::Easy => config.easy_random_probability,
            Difficulty::Medium | Difficulty::Hard => 0.0,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}
