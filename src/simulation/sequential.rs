//! Sequential-schedule attention engine.
//!
//! # Algorithm
//!
//! Tasks run in the order given (not sorted by start time). For each task
//! the clock jumps to its `start_time` and steps one minute at a time until
//! `start_time + duration`. On every tick:
//!
//! 1. Every enabled recovery window containing the clock adds its
//!    effectiveness, capped at the attention ceiling.
//! 2. Octave rule: `clock % 7 == 0` adds a bonus (+10).
//! 3. Triad rule: `clock % 3 == 0` subtracts a penalty (5).
//! 4. The task's difficulty is drained.
//!
//! Both rhythm rules are checked independently, so t=0 nets +5.
//!
//! # Complexity
//! O(T × (M + B)) where T = total ticks, M/B = meditation/breathing windows.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::models::{
    AttentionBounds, CurvePoint, EnneagramOffsets, RecoveryInterval, RecoveryPoint, TickRecord,
};
use crate::scenario::SequentialScenario;

/// Engine constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequentialConfig {
    /// Octave rule period (minutes).
    pub octave_period: f64,
    /// Attention added when the octave rule fires.
    pub octave_bonus: f64,
    /// Triad rule period (minutes).
    pub triad_period: f64,
    /// Attention removed when the triad rule fires.
    pub triad_penalty: f64,
    /// Floor attention at `bounds.min` after each tick. Off by default.
    pub clamp_to_min: bool,
    /// Starting-attention offsets per personality type.
    pub enneagram_offsets: EnneagramOffsets,
}

impl Default for SequentialConfig {
    fn default() -> Self {
        Self {
            octave_period: 7.0,
            octave_bonus: 10.0,
            triad_period: 3.0,
            triad_penalty: 5.0,
            clamp_to_min: false,
            enneagram_offsets: EnneagramOffsets::default(),
        }
    }
}

impl SequentialConfig {
    /// Whether the octave rule fires at `clock`.
    #[inline]
    pub fn is_octave(&self, clock: f64) -> bool {
        clock % self.octave_period == 0.0
    }

    /// Whether the triad rule fires at `clock`.
    #[inline]
    pub fn is_triad(&self, clock: f64) -> bool {
        clock % self.triad_period == 0.0
    }
}

/// Which recovery kinds apply during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryToggles {
    pub meditation: bool,
    pub breathing: bool,
}

impl RecoveryToggles {
    /// Both recovery kinds on.
    pub const ALL: Self = Self {
        meditation: true,
        breathing: true,
    };
    /// No recovery.
    pub const NONE: Self = Self {
        meditation: false,
        breathing: false,
    };
}

impl Default for RecoveryToggles {
    fn default() -> Self {
        Self::ALL
    }
}

/// Result of a sequential run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequentialOutcome {
    /// One record per tick, grouped by task in input order.
    pub history: Vec<TickRecord>,
    /// Parallel curve; `fatigue` holds the tick's difficulty.
    pub curve: Vec<CurvePoint>,
    pub meditation_points: Vec<RecoveryPoint>,
    pub breathing_points: Vec<RecoveryPoint>,
    /// Sum of meditation effectiveness over every active tick (before capping).
    pub meditation_gain: f64,
    /// Sum of breathing effectiveness over every active tick (before capping).
    pub breathing_gain: f64,
    /// Sum of task difficulties (not time-weighted).
    pub accumulated_fatigue: f64,
    /// Mean task criticality; 0 for no tasks.
    pub average_criticality: f64,
    /// Attention after the last tick (or the starting value if none ran).
    pub final_attention: f64,
}

/// Attention with and without recovery, for comparison charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionCurve {
    /// `(time, attention)` with recovery disabled.
    pub baseline: Vec<(f64, f64)>,
    /// `(time, attention)` with every recovery kind enabled.
    pub corrected: Vec<(f64, f64)>,
}

/// Which rhythm rule a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rhythm {
    Octave,
    Triad,
}

/// A clock value where a rhythm rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RhythmMark {
    pub time: f64,
    pub rhythm: Rhythm,
}

/// Sequential-schedule engine.
///
/// # Example
///
/// ```
/// use attention_sim::models::{AttentionBounds, Task};
/// use attention_sim::scenario::SequentialScenario;
/// use attention_sim::simulation::{RecoveryToggles, SequentialSimulator};
///
/// let tasks = vec![Task::new(0, "Focus").with_duration(3.0).with_difficulty(2.0)];
/// let scenario = SequentialScenario::new(tasks, 10.0, AttentionBounds::new(0.0, 100.0));
///
/// let outcome = SequentialSimulator::new().simulate(&scenario, RecoveryToggles::NONE);
/// let levels: Vec<f64> = outcome.curve.iter().map(|p| p.attention).collect();
/// assert_eq!(levels, vec![13.0, 11.0, 9.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialSimulator {
    config: SequentialConfig,
}

impl SequentialSimulator {
    /// Creates an engine with default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine constants.
    pub fn with_config(mut self, config: SequentialConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SequentialConfig {
        &self.config
    }

    /// Runs the scenario.
    pub fn simulate(
        &self,
        scenario: &SequentialScenario,
        toggles: RecoveryToggles,
    ) -> SequentialOutcome {
        let bounds = scenario.bounds;
        let mut attention = scenario.initial_attention;
        if let Some(enneagram) = &scenario.enneagram {
            attention = self.config.enneagram_offsets.apply(enneagram, attention);
        }

        debug!(
            tasks = scenario.tasks.len(),
            initial_attention = attention,
            meditation = toggles.meditation,
            breathing = toggles.breathing,
            "sequential run started"
        );

        let mut history = Vec::new();
        let mut curve = Vec::new();
        let mut meditation = Recovery::default();
        let mut breathing = Recovery::default();

        for task in &scenario.tasks {
            let end = task.end_time();
            let mut clock = task.start_time;

            while clock < end {
                if toggles.meditation {
                    meditation.apply(&scenario.meditation, clock, bounds, &mut attention);
                }
                if toggles.breathing {
                    breathing.apply(&scenario.breathing, clock, bounds, &mut attention);
                }

                if self.config.is_octave(clock) {
                    attention += self.config.octave_bonus;
                }
                if self.config.is_triad(clock) {
                    attention -= self.config.triad_penalty;
                }

                attention -= task.difficulty;
                if self.config.clamp_to_min {
                    attention = attention.max(bounds.min);
                }

                trace!(clock, task_id = task.id, attention, "tick");
                history.push(TickRecord {
                    time: clock,
                    task_id: task.id,
                    attention,
                    difficulty: task.difficulty,
                });
                curve.push(CurvePoint::task(clock, task.id, task.difficulty, attention));
                clock += 1.0;
            }
        }

        let accumulated_fatigue = scenario.tasks.iter().map(|t| t.difficulty).sum();
        let average_criticality = if scenario.tasks.is_empty() {
            0.0
        } else {
            scenario.tasks.iter().map(|t| t.criticality).sum::<f64>()
                / scenario.tasks.len() as f64
        };

        debug!(
            ticks = history.len(),
            final_attention = attention,
            meditation_gain = meditation.total,
            breathing_gain = breathing.total,
            "sequential run finished"
        );

        SequentialOutcome {
            history,
            curve,
            meditation_points: meditation.points,
            breathing_points: breathing.points,
            meditation_gain: meditation.total,
            breathing_gain: breathing.total,
            accumulated_fatigue,
            average_criticality,
            final_attention: attention,
        }
    }

    /// Runs the scenario with recovery off, then on.
    pub fn correction_curve(&self, scenario: &SequentialScenario) -> CorrectionCurve {
        let levels = |outcome: SequentialOutcome| {
            outcome
                .curve
                .iter()
                .map(|p| (p.time, p.attention))
                .collect::<Vec<_>>()
        };
        CorrectionCurve {
            baseline: levels(self.simulate(scenario, RecoveryToggles::NONE)),
            corrected: levels(self.simulate(scenario, RecoveryToggles::ALL)),
        }
    }

    /// Integer clock values in `[0, horizon)` where a rhythm rule fires.
    ///
    /// A value where both rules fire yields two marks, octave first.
    pub fn rhythm_marks(&self, horizon: f64) -> Vec<RhythmMark> {
        let mut marks = Vec::new();
        let mut time = 0.0;
        while time < horizon {
            if self.config.is_octave(time) {
                marks.push(RhythmMark {
                    time,
                    rhythm: Rhythm::Octave,
                });
            }
            if self.config.is_triad(time) {
                marks.push(RhythmMark {
                    time,
                    rhythm: Rhythm::Triad,
                });
            }
            time += 1.0;
        }
        marks
    }
}

#[derive(Default)]
struct Recovery {
    points: Vec<RecoveryPoint>,
    total: f64,
}

impl Recovery {
    fn apply(
        &mut self,
        windows: &[RecoveryInterval],
        clock: f64,
        bounds: AttentionBounds,
        attention: &mut f64,
    ) {
        for window in windows.iter().filter(|w| w.contains(clock)) {
            *attention = bounds.cap(*attention + window.effectiveness);
            self.points.push(RecoveryPoint {
                time: clock,
                attention: *attention,
                fatigue: None,
            });
            self.total += window.effectiveness;
            trace!(clock, kind = ?window.kind, attention = *attention, "recovery applied");
        }
    }
}
