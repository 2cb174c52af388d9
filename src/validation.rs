//! Pre-run checks for simulation scenarios.
//!
//! The engines accept any well-typed scenario and never fail on odd
//! schedules. These checks are for callers who want to warn the user
//! first. Detects:
//! - Duplicate task IDs
//! - Negative or non-finite durations and times
//! - Overlapping task slots (sequential)
//! - Inverted attention bounds
//! - Composite tasks with no basic tasks (priority)
//! - Waiting times that can stall the priority loop

use std::collections::HashSet;

use crate::models::AttentionBounds;
use crate::scenario::{PriorityScenario, SequentialScenario};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two tasks share the same ID.
    DuplicateId,
    /// A duration is negative (the entity contributes no ticks).
    NegativeDuration,
    /// A time or duration is NaN or infinite.
    NonFiniteValue,
    /// Two sequential task slots overlap.
    OverlappingTasks,
    /// `min` attention exceeds `max`.
    InvertedBounds,
    /// A composite task has no basic tasks.
    EmptyTask,
    /// A basic task waits for a time the loop may never reach.
    UnreachableWaitingTime,
    /// Attention starts under threshold and meditation adds nothing.
    StalledRecovery,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a sequential scenario.
///
/// Checks:
/// 1. Bounds are ordered
/// 2. No duplicate task IDs
/// 3. Task and recovery times are finite, durations non-negative
/// 4. No two task slots overlap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(findings)` with every issue found.
pub fn validate_sequential(scenario: &SequentialScenario) -> ValidationResult {
    let mut errors = Vec::new();
    check_bounds(&scenario.bounds, &mut errors);

    let mut ids = HashSet::new();
    for task in &scenario.tasks {
        if !ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        check_span(
            &format!("Task '{}'", task.name),
            task.start_time,
            task.duration,
            &mut errors,
        );
    }

    for window in scenario.meditation.iter().chain(&scenario.breathing) {
        let label = match &window.name {
            Some(name) => format!("{:?} window '{name}'", window.kind),
            None => format!("{:?} window at {}", window.kind, window.start_time),
        };
        check_span(&label, window.start_time, window.duration, &mut errors);
    }

    for (i, a) in scenario.tasks.iter().enumerate() {
        for b in &scenario.tasks[i + 1..] {
            if a.duration > 0.0 && b.duration > 0.0 && a.overlaps(b) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingTasks,
                    format!("Tasks '{}' and '{}' overlap", a.name, b.name),
                ));
            }
        }
    }

    finish(errors)
}

/// Validates a priority-sampling scenario.
///
/// Checks:
/// 1. Bounds are ordered
/// 2. No duplicate task IDs, no empty composite tasks
/// 3. Basic task durations finite and non-negative
/// 4. Waiting times are finite (an infinite one idles forever)
/// 5. Meditation can lift attention when the run starts under threshold,
///    and is open by the time the first basic task arrives
pub fn validate_priority(scenario: &PriorityScenario) -> ValidationResult {
    let mut errors = Vec::new();
    check_bounds(&scenario.bounds, &mut errors);

    let mut ids = HashSet::new();
    for task in &scenario.tasks {
        if !ids.insert(task.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate task ID: {}", task.id),
            ));
        }
        if task.basic_tasks.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTask,
                format!("Task '{}' has no basic tasks", task.name),
            ));
        }
        for basic in &task.basic_tasks {
            let label = format!("Basic task '{}' of '{}'", basic.name, task.name);
            check_span(&label, 0.0, basic.duration, &mut errors);
            if !basic.waiting_time.is_finite() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnreachableWaitingTime,
                    format!("{label} waits for {}", basic.waiting_time),
                ));
            }
        }
    }

    if scenario.initial_attention < scenario.bounds.min {
        check_recovery(scenario, &mut errors);
    }

    finish(errors)
}

/// Attention starts under threshold: meditation must add something and be
/// open by the time the first basic task can run.
fn check_recovery(scenario: &PriorityScenario, errors: &mut Vec<ValidationError>) {
    let plan = scenario.meditation;
    if plan.gain() <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::StalledRecovery,
            "Attention starts under threshold and meditation cannot restore it",
        ));
        return;
    }

    // The clock idles in whole steps from 0 until the first arrival
    let first_work = scenario
        .tasks
        .iter()
        .filter_map(|t| t.basic_tasks.first())
        .map(|b| b.waiting_time)
        .filter(|w| w.is_finite())
        .map(|w| w.max(0.0).ceil())
        .reduce(f64::min);
    if let Some(first) = first_work {
        if !plan.is_available_at(first) {
            errors.push(ValidationError::new(
                ValidationErrorKind::StalledRecovery,
                format!(
                    "Attention starts under threshold, work arrives at {first} \
                     but meditation only opens at {}",
                    plan.start_time
                ),
            ));
        }
    }
}

fn check_bounds(bounds: &AttentionBounds, errors: &mut Vec<ValidationError>) {
    if !bounds.is_ordered() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedBounds,
            format!(
                "Minimum attention {} exceeds maximum {}",
                bounds.min, bounds.max
            ),
        ));
    }
}

fn check_span(label: &str, start: f64, duration: f64, errors: &mut Vec<ValidationError>) {
    if !start.is_finite() || !duration.is_finite() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonFiniteValue,
            format!("{label} has a non-finite start or duration"),
        ));
    } else if duration < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeDuration,
            format!("{label} has negative duration {duration}"),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
