//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Number of archetype matches returned when nothing else is configured.
pub const DEFAULT_TOP_N_MATCHES: usize = 3;

/// Tunables for a [`HybridPipeline`](crate::HybridPipeline).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How many archetype matches to keep. Zero skips matching entirely.
    pub top_n_matches: usize,
}

impl EngineConfig {
    pub fn with_top_n_matches(mut self, top_n_matches: usize) -> Self {
        self.top_n_matches = top_n_matches;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n_matches: DEFAULT_TOP_N_MATCHES,
        }
    }
}
