//! Recovery interventions: meditation sessions and breathing practices.

use serde::{Deserialize, Serialize};

/// Kind of recovery intervention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryKind {
    Meditation,
    Breathing,
}

/// A scheduled recovery window.
///
/// While the clock is inside `[start_time, start_time + duration)` the
/// sequential engine adds `effectiveness` to attention on every tick.
/// Overlapping windows each apply their full gain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryInterval {
    pub kind: RecoveryKind,
    /// Optional label (breathing practices are named).
    #[serde(default)]
    pub name: Option<String>,
    /// Window start (minutes).
    pub start_time: f64,
    /// Window length (minutes).
    pub duration: f64,
    /// Attention gained per tick while active (0..=7 on the input scale).
    pub effectiveness: f64,
}

impl RecoveryInterval {
    /// Creates a meditation session.
    pub fn meditation(start_time: f64, duration: f64, effectiveness: f64) -> Self {
        Self {
            kind: RecoveryKind::Meditation,
            name: None,
            start_time,
            duration,
            effectiveness,
        }
    }

    /// Creates a named breathing practice.
    pub fn breathing(
        name: impl Into<String>,
        start_time: f64,
        duration: f64,
        effectiveness: f64,
    ) -> Self {
        Self {
            kind: RecoveryKind::Breathing,
            name: Some(name.into()),
            start_time,
            duration,
            effectiveness,
        }
    }

    /// End of the window (exclusive).
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Whether the window is active at `clock`.
    #[inline]
    pub fn contains(&self, clock: f64) -> bool {
        self.start_time <= clock && clock < self.end_time()
    }

    /// Nominal gain over the whole window: duration × effectiveness.
    pub fn planned_gain(&self) -> f64 {
        self.duration * self.effectiveness
    }
}

/// The single on-demand meditation used by the priority-sampling engine.
///
/// Unlike [`RecoveryInterval`], this is not a fixed window: it fires
/// whenever attention drops under threshold, but never before
/// `start_time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeditationPlan {
    /// Earliest clock value at which meditation may run.
    pub start_time: f64,
    /// Clock advance per meditation (minutes).
    pub duration: f64,
    /// Gain per minute of meditation.
    pub effectiveness: f64,
}

impl MeditationPlan {
    pub fn new(start_time: f64, duration: f64, effectiveness: f64) -> Self {
        Self {
            start_time,
            duration,
            effectiveness,
        }
    }

    /// Gain of one meditation: duration × effectiveness.
    #[inline]
    pub fn gain(&self) -> f64 {
        self.duration * self.effectiveness
    }

    /// Whether meditation is allowed at `clock`.
    #[inline]
    pub fn is_available_at(&self, clock: f64) -> bool {
        clock >= self.start_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_half_open() {
        let session = RecoveryInterval::meditation(10.0, 5.0, 2.0);
        assert!(!session.contains(9.0));
        assert!(session.contains(10.0));
        assert!(session.contains(14.0));
        assert!(!session.contains(15.0));
    }

    #[test]
    fn test_breathing_is_named() {
        let practice = RecoveryInterval::breathing("Box", 0.0, 4.0, 1.5);
        assert_eq!(practice.kind, RecoveryKind::Breathing);
        assert_eq!(practice.name.as_deref(), Some("Box"));
        assert_eq!(practice.planned_gain(), 6.0);
    }

    #[test]
    fn test_meditation_plan() {
        let plan = MeditationPlan::new(30.0, 5.0, 3.0);
        assert_eq!(plan.gain(), 15.0);
        assert!(!plan.is_available_at(29.0));
        assert!(plan.is_available_at(30.0));
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&RecoveryKind::Meditation).unwrap();
        assert_eq!(json, "\"meditation\"");
    }
}
