//! Output records produced by the engines.
//!
//! Everything here is a plain ordered record; renderers and report writers
//! consume them without knowing which engine produced them.

use serde::{Deserialize, Serialize};

/// One tick of the sequential engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    /// Clock value of the tick.
    pub time: f64,
    pub task_id: usize,
    /// Attention after every rule for this tick has applied.
    pub attention: f64,
    /// Difficulty drained on this tick.
    pub difficulty: f64,
}

/// One executed basic task in the priority-sampling engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    /// Clock value when the basic task started.
    pub start: f64,
    pub task_id: usize,
    /// Name of the basic task.
    pub basic_task: String,
    pub duration: f64,
    /// Difficulty of the basic task.
    pub difficulty: f64,
}

impl ExecutionRecord {
    /// Clock value when the basic task finished.
    #[inline]
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// What produced a curve point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveEvent {
    /// A task (or basic task) ran.
    Task,
    /// Nothing was eligible; the clock advanced by one.
    Idle,
    /// An on-demand meditation ran.
    Meditation,
    /// The synthetic gain appended after the priority loop ends.
    FinalGain,
}

/// A sample of the attention curve.
///
/// `fatigue` carries the per-tick difficulty for the sequential engine and
/// the multiplicative fatigue factor for the priority engine. Both read as
/// "load at this point" in reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub time: f64,
    /// `None` when no task was in focus.
    pub task_id: Option<usize>,
    pub fatigue: f64,
    pub attention: f64,
    pub event: CurveEvent,
}

impl CurvePoint {
    /// A point recorded while a task was running.
    pub fn task(time: f64, task_id: usize, fatigue: f64, attention: f64) -> Self {
        Self {
            time,
            task_id: Some(task_id),
            fatigue,
            attention,
            event: CurveEvent::Task,
        }
    }

    /// A point with no task in focus.
    pub fn untasked(time: f64, fatigue: f64, attention: f64, event: CurveEvent) -> Self {
        Self {
            time,
            task_id: None,
            fatigue,
            attention,
            event,
        }
    }
}

/// A marker where a recovery action raised attention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryPoint {
    pub time: f64,
    /// Attention right after the gain (already clamped).
    pub attention: f64,
    /// Fatigue factor at the time, when the engine tracks one.
    pub fatigue: Option<f64>,
}

/// A span of the clock occupied by a task, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpan {
    pub task_id: usize,
    pub label: String,
    pub start: f64,
    pub end: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_end() {
        let record = ExecutionRecord {
            start: 12.0,
            task_id: 1,
            basic_task: "Cook".into(),
            duration: 10.0,
            difficulty: 0.5,
        };
        assert_eq!(record.end(), 22.0);
    }

    #[test]
    fn test_curve_point_constructors() {
        let p = CurvePoint::task(3.0, 2, 1.5, 40.0);
        assert_eq!(p.task_id, Some(2));
        assert_eq!(p.event, CurveEvent::Task);

        let idle = CurvePoint::untasked(4.0, 1.01, 39.9, CurveEvent::Idle);
        assert!(idle.task_id.is_none());
        assert_eq!(idle.event, CurveEvent::Idle);
    }
}
