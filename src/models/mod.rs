//! Attention simulation domain models.
//!
//! Provides the entities the engines consume (tasks, recovery windows,
//! personality modifiers) and the records they produce.
//!
//! # Variants
//!
//! | Model | Sequential engine | Priority engine |
//! |-------|-------------------|-----------------|
//! | Work unit | [`Task`] (fixed slot) | [`CompositeTask`] of [`BasicTask`]s |
//! | Recovery | [`RecoveryInterval`] windows | one [`MeditationPlan`] |
//! | History | [`TickRecord`] | [`ExecutionRecord`] |
//! | Curve | [`CurvePoint`] | [`CurvePoint`] |

mod composite;
mod enneagram;
mod recovery;
mod series;
mod task;

pub use composite::{BasicTask, CompositeTask};
pub use enneagram::{EnneagramCatalog, EnneagramOffset, EnneagramOffsets, EnneagramType};
pub use recovery::{MeditationPlan, RecoveryInterval, RecoveryKind};
pub use series::{CurveEvent, CurvePoint, ExecutionRecord, RecoveryPoint, TaskSpan, TickRecord};
pub use task::Task;

use serde::{Deserialize, Serialize};

/// Attention bounds for a run.
///
/// `max` clamps every recovery gain. `min` is the threshold that gates
/// task execution in the priority engine; it is only a floor when the
/// engine's lower clamp is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttentionBounds {
    pub min: f64,
    pub max: f64,
}

impl AttentionBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps a post-gain value to the ceiling.
    #[inline]
    pub fn cap(&self, attention: f64) -> f64 {
        attention.min(self.max)
    }

    /// Whether `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for AttentionBounds {
    fn default() -> Self {
        Self {
            min: 50.0,
            max: 100.0,
        }
    }
}
