//! Run summaries: the aggregates a console report prints.
//!
//! | Aggregate | Definition |
//! |-----------|-----------|
//! | Planned recovery | Σ duration × effectiveness over scheduled windows |
//! | Applied recovery | Σ effectiveness over ticks where a window was active |
//! | Accumulated fatigue | Σ task difficulty (sequential) |
//! | Average criticality | mean task criticality, 0 for no tasks |
//! | Transitions | (time, focus, load, attention) at each change of focus |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{PriorityOutcome, SequentialOutcome};
use crate::models::{CompositeTask, CurvePoint, RecoveryInterval, Task};
use crate::scenario::{PriorityScenario, SequentialScenario};

/// What attention was on at a point of the curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    Task { id: usize, name: String },
    /// No task, or a task id with no known name.
    Idle,
}

impl Focus {
    /// Display label ("No task" when idle).
    pub fn label(&self) -> &str {
        match self {
            Focus::Task { name, .. } => name,
            Focus::Idle => "No task",
        }
    }
}

/// A change of focus along the curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub time: f64,
    pub focus: Focus,
    /// Curve load at the transition (difficulty or fatigue factor).
    pub fatigue: f64,
    pub attention: f64,
}

/// Task id → name lookup.
#[derive(Debug, Clone, Default)]
pub struct TaskNames(HashMap<usize, String>);

impl TaskNames {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self(tasks.iter().map(|t| (t.id, t.name.clone())).collect())
    }

    pub fn from_composites(tasks: &[CompositeTask]) -> Self {
        Self(tasks.iter().map(|t| (t.id, t.name.clone())).collect())
    }

    /// Focus for a curve point's task id.
    pub fn focus(&self, task_id: Option<usize>) -> Focus {
        task_id
            .and_then(|id| self.0.get(&id).map(|name| Focus::Task { id, name: name.clone() }))
            .unwrap_or(Focus::Idle)
    }
}

/// Lists every point where the focus label changes.
///
/// Labels are compared, not ids, so two tasks sharing a name read as one
/// stretch of focus. The first point always produces a transition.
pub fn narrate_transitions(curve: &[CurvePoint], names: &TaskNames) -> Vec<Transition> {
    let mut transitions: Vec<Transition> = Vec::new();
    for point in curve {
        let focus = names.focus(point.task_id);
        let changed = transitions
            .last()
            .map_or(true, |prev| prev.focus.label() != focus.label());
        if changed {
            transitions.push(Transition {
                time: point.time,
                focus,
                fatigue: point.fatigue,
                attention: point.attention,
            });
        }
    }
    transitions
}

/// Nominal gain of a set of windows: Σ duration × effectiveness.
pub fn planned_recovery(intervals: &[RecoveryInterval]) -> f64 {
    intervals.iter().map(RecoveryInterval::planned_gain).sum()
}

/// Mean criticality; 0 for an empty slice.
pub fn average_criticality(criticalities: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = criticalities
        .into_iter()
        .fold((0.0, 0usize), |(s, n), c| (s + c, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Recovery achievable by meditating for `t` minutes, for t = 0, 1, … up to
/// the first whole step past `duration`.
///
/// Fatigue is interpolated linearly between the first and last curve
/// points; the difficulty factor is the mean curve load. Each value is
/// `effectiveness × t ÷ (1 + fatigue × factor)`. An empty curve or a
/// non-finite duration yields an empty series.
pub fn meditation_efficiency(
    duration: f64,
    effectiveness: f64,
    curve: &[CurvePoint],
) -> Vec<(f64, f64)> {
    let (Some(first), Some(last)) = (curve.first(), curve.last()) else {
        return Vec::new();
    };
    if !duration.is_finite() {
        return Vec::new();
    }
    let factor = curve.iter().map(|p| p.fatigue).sum::<f64>() / curve.len() as f64;

    let mut series = Vec::new();
    let mut t = 0.0;
    while t < duration + 1.0 {
        let fatigue = if duration > 0.0 {
            let ratio = (t / duration).clamp(0.0, 1.0);
            first.fatigue + (last.fatigue - first.fatigue) * ratio
        } else {
            last.fatigue
        };
        series.push((t, effectiveness * t / (1.0 + fatigue * factor)));
        t += 1.0;
    }
    series
}

/// Console summary of a sequential run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequentialSummary {
    /// Σ duration × effectiveness over meditation sessions.
    pub meditation_planned: f64,
    /// Σ duration × effectiveness over breathing practices.
    pub breathing_planned: f64,
    /// Meditation gain actually applied during the run.
    pub meditation_applied: f64,
    /// Breathing gain actually applied during the run.
    pub breathing_applied: f64,
    pub accumulated_fatigue: f64,
    pub average_criticality: f64,
    pub final_attention: f64,
    pub transitions: Vec<Transition>,
}

impl SequentialSummary {
    /// Summarizes a run of `scenario`.
    pub fn calculate(scenario: &SequentialScenario, outcome: &SequentialOutcome) -> Self {
        let names = TaskNames::from_tasks(&scenario.tasks);
        Self {
            meditation_planned: planned_recovery(&scenario.meditation),
            breathing_planned: planned_recovery(&scenario.breathing),
            meditation_applied: outcome.meditation_gain,
            breathing_applied: outcome.breathing_gain,
            accumulated_fatigue: outcome.accumulated_fatigue,
            average_criticality: outcome.average_criticality,
            final_attention: outcome.final_attention,
            transitions: narrate_transitions(&outcome.curve, &names),
        }
    }
}

/// Console summary of a priority-sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrioritySummary {
    /// Gain of one configured meditation (duration × effectiveness).
    pub meditation_planned: f64,
    /// Σ gain over meditations that ran.
    pub meditation_applied: f64,
    pub meditation_count: usize,
    /// Σ difficulty × duration over executed basic tasks.
    pub accumulated_load: f64,
    pub average_criticality: f64,
    pub makespan: f64,
    pub final_attention: f64,
    pub final_fatigue: f64,
    pub transitions: Vec<Transition>,
}

impl PrioritySummary {
    /// Summarizes a run of `scenario`.
    pub fn calculate(scenario: &PriorityScenario, outcome: &PriorityOutcome) -> Self {
        let names = TaskNames::from_composites(&scenario.tasks);
        let accumulated_load = outcome
            .history
            .iter()
            .map(|h| h.difficulty * h.duration)
            .sum();

        Self {
            meditation_planned: scenario.meditation.gain(),
            meditation_applied: outcome.total_gain,
            meditation_count: outcome.meditation_points.len(),
            accumulated_load,
            average_criticality: average_criticality(scenario.tasks.iter().map(|t| t.criticality)),
            makespan: outcome.final_clock,
            final_attention: outcome.final_attention,
            final_fatigue: outcome.final_fatigue,
            transitions: narrate_transitions(&outcome.curve, &names),
        }
    }
}
