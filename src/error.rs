//! Error types.
//!
//! The engines themselves accept any well-typed input. Errors come from the
//! edges: text parsing, scenario edits, configuration loading, and the step
//! budget that bounds the priority-sampling loop.

/// Failure to turn user text into a field value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("'{input}' is not a valid integer")]
    NotAnInteger { input: String },

    #[error("'{input}' is not a valid number")]
    NotANumber { input: String },

    #[error("{value} is outside the allowed range {min} to {max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Which collection a modify operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Task,
    Meditation,
    Breathing,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Task => f.write_str("task"),
            EntryKind::Meditation => f.write_str("meditation session"),
            EntryKind::Breathing => f.write_str("breathing practice"),
        }
    }
}

/// Scenario edit errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("{kind} index {index} is out of range (have {len})")]
    IndexOutOfRange {
        kind: EntryKind,
        index: usize,
        len: usize,
    },
}

/// Configuration and scenario file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Simulation run errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The priority loop spent its budget of iterations that made no
    /// progress. Happens when no pending waiting time can be reached or
    /// attention stays under threshold before meditation is allowed.
    #[error("no progress after {steps} steps at clock {clock} with {pending} sub-tasks pending")]
    StepBudgetExhausted {
        steps: usize,
        clock: f64,
        pending: usize,
    },
}
