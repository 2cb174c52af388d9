//! Attention engines and run summaries.
//!
//! Two engines share one shape:
//! `(task schedule, recovery schedule, bounds) → ordered series of
//! (time, task, attention, load)`.
//!
//! - [`SequentialSimulator`] runs tasks in list order, each in its fixed
//!   slot, one minute per tick, with scheduled recovery windows and
//!   periodic rhythm adjustments.
//! - [`PrioritySimulator`] repeatedly draws one eligible sub-task by
//!   weighted random choice, tracks a multiplicative fatigue factor, and
//!   meditates on demand when attention falls under threshold.
//!
//! Both are pure functions of their input plus, for the priority engine,
//! the injected [`IndexSampler`](crate::sampling::IndexSampler).
//!
//! [`summary`] turns outcomes into the aggregates a console report prints.

mod priority;
mod sequential;
pub mod summary;

pub use priority::{PriorityConfig, PriorityOutcome, PrioritySimulator};
pub use sequential::{
    CorrectionCurve, RecoveryToggles, Rhythm, RhythmMark, SequentialConfig, SequentialOutcome,
    SequentialSimulator,
};
