//! Simulation inputs and the modify operations applied between runs.
//!
//! A scenario is built once (from prompts, a template, or a TOML file),
//! optionally edited by replacing whole records, then handed to an engine.
//! Engines never mutate a scenario.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EntryKind, ScenarioError};
use crate::models::{
    AttentionBounds, CompositeTask, EnneagramType, MeditationPlan, RecoveryInterval, Task,
};

/// Input to the sequential-schedule engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequentialScenario {
    /// Tasks in execution order (not sorted by start time).
    pub tasks: Vec<Task>,
    pub initial_attention: f64,
    #[serde(default)]
    pub bounds: AttentionBounds,
    #[serde(default)]
    pub meditation: Vec<RecoveryInterval>,
    #[serde(default)]
    pub breathing: Vec<RecoveryInterval>,
    /// Personality modifier applied once to the starting attention.
    #[serde(default)]
    pub enneagram: Option<EnneagramType>,
}

impl SequentialScenario {
    /// Creates a scenario with no recovery and no personality modifier.
    pub fn new(tasks: Vec<Task>, initial_attention: f64, bounds: AttentionBounds) -> Self {
        Self {
            tasks,
            initial_attention,
            bounds,
            meditation: Vec::new(),
            breathing: Vec::new(),
            enneagram: None,
        }
    }

    /// Adds a meditation session.
    pub fn with_meditation(mut self, session: RecoveryInterval) -> Self {
        self.meditation.push(session);
        self
    }

    /// Adds a breathing practice.
    pub fn with_breathing(mut self, practice: RecoveryInterval) -> Self {
        self.breathing.push(practice);
        self
    }

    /// Sets the personality modifier.
    pub fn with_enneagram(mut self, enneagram: EnneagramType) -> Self {
        self.enneagram = Some(enneagram);
        self
    }

    /// Parses a scenario from TOML.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Replaces the task at `index`. The replacement keeps the slot's id.
    pub fn replace_task(&mut self, index: usize, task: Task) -> Result<(), ScenarioError> {
        let slot = slot_mut(&mut self.tasks, index, EntryKind::Task)?;
        let id = slot.id;
        *slot = Task { id, ..task };
        Ok(())
    }

    /// Replaces the meditation session at `index`.
    pub fn replace_meditation(
        &mut self,
        index: usize,
        session: RecoveryInterval,
    ) -> Result<(), ScenarioError> {
        *slot_mut(&mut self.meditation, index, EntryKind::Meditation)? = session;
        Ok(())
    }

    /// Replaces the breathing practice at `index`.
    pub fn replace_breathing(
        &mut self,
        index: usize,
        practice: RecoveryInterval,
    ) -> Result<(), ScenarioError> {
        *slot_mut(&mut self.breathing, index, EntryKind::Breathing)? = practice;
        Ok(())
    }
}

/// Input to the priority-sampling engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityScenario {
    pub tasks: Vec<CompositeTask>,
    pub initial_attention: f64,
    #[serde(default)]
    pub bounds: AttentionBounds,
    pub meditation: MeditationPlan,
}

impl PriorityScenario {
    pub fn new(
        tasks: Vec<CompositeTask>,
        initial_attention: f64,
        bounds: AttentionBounds,
        meditation: MeditationPlan,
    ) -> Self {
        Self {
            tasks,
            initial_attention,
            bounds,
            meditation,
        }
    }

    /// Parses a scenario from TOML.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Replaces the composite task at `index`. The replacement keeps the
    /// slot's id and starts with a fresh cursor.
    pub fn replace_task(
        &mut self,
        index: usize,
        mut task: CompositeTask,
    ) -> Result<(), ScenarioError> {
        let slot = slot_mut(&mut self.tasks, index, EntryKind::Task)?;
        task.id = slot.id;
        task.reset();
        *slot = task;
        Ok(())
    }

    /// Total number of basic tasks across all composite tasks.
    pub fn basic_task_count(&self) -> usize {
        self.tasks.iter().map(|t| t.basic_tasks.len()).sum()
    }
}

fn slot_mut<T>(items: &mut [T], index: usize, kind: EntryKind) -> Result<&mut T, ScenarioError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(ScenarioError::IndexOutOfRange { kind, index, len })
}
