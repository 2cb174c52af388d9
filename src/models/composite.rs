//! Composite task model (priority-sampling variant).
//!
//! A composite task owns an ordered list of basic tasks (sub-tasks) and a
//! cursor. Basic tasks run strictly in insertion order; the cursor only
//! moves forward.

use serde::{Deserialize, Serialize};

/// An atomic unit of work inside a [`CompositeTask`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicTask {
    /// Human-readable name.
    pub name: String,
    /// Length in minutes. Executes without interruption.
    pub duration: f64,
    /// Depletion weight; also drives fatigue growth.
    pub difficulty: f64,
    /// Earliest clock value at which this sub-task becomes eligible.
    #[serde(default)]
    pub waiting_time: f64,
}

impl BasicTask {
    /// Creates a basic task eligible from t=0.
    pub fn new(name: impl Into<String>, duration: f64, difficulty: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            difficulty,
            waiting_time: 0.0,
        }
    }

    /// Sets the waiting time (earliest eligible clock value).
    pub fn with_waiting_time(mut self, waiting_time: f64) -> Self {
        self.waiting_time = waiting_time;
        self
    }

    /// Whether the sub-task may start at `clock`.
    #[inline]
    pub fn is_eligible_at(&self, clock: f64) -> bool {
        self.waiting_time <= clock
    }
}

/// A task decomposed into ordered basic tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeTask {
    /// Task identifier.
    pub id: usize,
    /// Human-readable name.
    pub name: String,
    /// Sub-tasks in execution order.
    pub basic_tasks: Vec<BasicTask>,
    /// Attention the task nominally calls for.
    pub base_attention: f64,
    /// Sampling weight multiplier.
    pub criticality: f64,
    #[serde(skip)]
    cursor: usize,
}

impl CompositeTask {
    /// Creates an empty composite task.
    pub fn new(id: usize, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            basic_tasks: Vec::new(),
            base_attention: 0.0,
            criticality: 0.0,
            cursor: 0,
        }
    }

    /// Appends a basic task.
    pub fn with_basic_task(mut self, basic_task: BasicTask) -> Self {
        self.basic_tasks.push(basic_task);
        self
    }

    /// Sets the base attention.
    pub fn with_base_attention(mut self, base_attention: f64) -> Self {
        self.base_attention = base_attention;
        self
    }

    /// Sets the criticality.
    pub fn with_criticality(mut self, criticality: f64) -> Self {
        self.criticality = criticality;
        self
    }

    /// Whether every basic task has run.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.cursor >= self.basic_tasks.len()
    }

    /// The next basic task to run, if any.
    pub fn next_basic_task(&self) -> Option<&BasicTask> {
        self.basic_tasks.get(self.cursor)
    }

    /// Marks the current basic task as done. No-op once completed.
    pub fn complete_basic_task(&mut self) {
        if !self.is_completed() {
            self.cursor += 1;
        }
    }

    /// Position of the next basic task.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of basic tasks still to run.
    pub fn remaining(&self) -> usize {
        self.basic_tasks.len().saturating_sub(self.cursor)
    }

    /// Rewinds the cursor to the first basic task.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Sum of basic task durations (minutes).
    pub fn total_duration(&self) -> f64 {
        self.basic_tasks.iter().map(|b| b.duration).sum()
    }
}
