//! Scheduled task model (sequential variant).
//!
//! A task occupies the clock from `start_time` for `duration` ticks and
//! drains a flat `difficulty` from attention on every tick.

use serde::{Deserialize, Serialize};

/// A task with a fixed slot on the global clock.
///
/// # Time Representation
/// Times are in minutes on the simulation clock (t=0 is the start of the
/// run). Fractional values are allowed; the engine steps in whole minutes
/// from `start_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task identifier (used to key history and curve entries).
    pub id: usize,
    /// Human-readable name.
    pub name: String,
    /// Attention the task nominally calls for (1..=5 on the input scale).
    pub base_attention: f64,
    /// Attention drained per tick.
    pub difficulty: f64,
    /// Weighting used in the average-criticality aggregate.
    pub criticality: f64,
    /// Length in minutes.
    pub duration: f64,
    /// Slot start on the global clock.
    pub start_time: f64,
}

impl Task {
    /// Creates a task with zero duration at t=0.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            base_attention: 1.0,
            difficulty: 1.0,
            criticality: 0.0,
            duration: 0.0,
            start_time: 0.0,
        }
    }

    /// Sets the base attention.
    pub fn with_base_attention(mut self, base_attention: f64) -> Self {
        self.base_attention = base_attention;
        self
    }

    /// Sets the per-tick difficulty.
    pub fn with_difficulty(mut self, difficulty: f64) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the criticality.
    pub fn with_criticality(mut self, criticality: f64) -> Self {
        self.criticality = criticality;
        self
    }

    /// Sets the duration (minutes).
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the start time (minutes).
    pub fn with_start_time(mut self, start_time: f64) -> Self {
        self.start_time = start_time;
        self
    }

    /// End of the slot (exclusive).
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Number of ticks the engine will run for this task.
    pub fn tick_count(&self) -> usize {
        if self.duration > 0.0 {
            self.duration.ceil() as usize
        } else {
            0
        }
    }

    /// Whether two slots share any instant.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start_time < other.end_time() && other.start_time < self.end_time()
    }
}
