//! Engine configuration.
//!
//! All constants the engines use live here rather than in globals. Every
//! field has a default, so an empty TOML document yields the standard
//! model:
//!
//! ```toml
//! [sequential]
//! octave_period = 7.0
//! octave_bonus = 10.0
//! triad_period = 3.0
//! triad_penalty = 5.0
//! clamp_to_min = false
//!
//! [[sequential.enneagram_offsets]]
//! type_id = 1
//! offset = 5.0
//!
//! [priority]
//! depletion_scale = 0.01
//! fatigue_per_difficulty = 0.1
//! rest_fatigue_rate = 0.01
//! idle_drain = 0.1
//! max_steps = 1000000
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::simulation::{PriorityConfig, PrioritySimulator, SequentialConfig, SequentialSimulator};

/// Top-level configuration for both engines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub sequential: SequentialConfig,
    pub priority: PriorityConfig,
}

impl SimulationConfig {
    /// Parses configuration from TOML; missing fields take defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// A sequential engine using these constants.
    pub fn sequential_simulator(&self) -> SequentialSimulator {
        SequentialSimulator::new().with_config(self.sequential.clone())
    }

    /// A priority engine using these constants.
    pub fn priority_simulator(&self) -> PrioritySimulator {
        PrioritySimulator::new().with_config(self.priority.clone())
    }
}
