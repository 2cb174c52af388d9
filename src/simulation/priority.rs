//! Priority-sampling attention engine.
//!
//! # Algorithm
//!
//! While any composite task has basic tasks left:
//!
//! 1. Eligible set = the next basic task of every unfinished composite
//!    task whose waiting time has been reached.
//! 2. If the set is non-empty, draw one candidate with probability
//!    proportional to `criticality × duration × difficulty ÷ fatigue`
//!    (uniform when every weight is zero).
//!    - Attention at or above `min`: run the candidate atomically. The
//!      clock advances by its duration, attention drops by
//!      `difficulty × duration × 0.01`, fatigue grows by
//!      `× (1 + difficulty × 0.1)`.
//!    - Attention under `min` and meditation available: meditate instead.
//!      Attention gains `duration × effectiveness` (capped), the clock
//!      advances by the meditation duration, fatigue grows by 1%.
//! 3. If the set is empty, idle: the clock advances by 1, fatigue grows by
//!    1%, attention drops by 0.1.
//!
//! After the loop a synthetic final-gain point is appended.
//!
//! # Termination
//! Every execution completes one basic task, and idle ticks move the clock
//! toward the next finite waiting time, so the loop ends once work becomes
//! eligible. Only iterations that make no progress count against the step
//! budget:
//! - idling while no pending waiting time is finite (or the clock can no
//!   longer advance),
//! - attention under `min` before meditation is allowed,
//! - a meditation that does not raise attention.
//!
//! Exhausting the budget yields [`SimulationError::StepBudgetExhausted`].

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::SimulationError;
use crate::models::{CompositeTask, CurveEvent, CurvePoint, ExecutionRecord, RecoveryPoint};
use crate::sampling::{candidate_weight, selection_probabilities, IndexSampler};
use crate::scenario::PriorityScenario;

/// Engine constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityConfig {
    /// Scale applied to `difficulty × duration` when draining attention.
    pub depletion_scale: f64,
    /// Fatigue grows by `1 + difficulty × fatigue_per_difficulty` per execution.
    pub fatigue_per_difficulty: f64,
    /// Fatigue growth rate for idle ticks and meditations (0.01 = 1%).
    pub rest_fatigue_rate: f64,
    /// Attention drained per idle tick.
    pub idle_drain: f64,
    /// Upper bound on iterations that make no progress before the run is
    /// abandoned.
    pub max_steps: usize,
    /// Floor attention at `bounds.min` after each drain. Off by default.
    pub clamp_to_min: bool,
}

impl Default for PriorityConfig {
    fn default() -> Self {
        Self {
            depletion_scale: 0.01,
            fatigue_per_difficulty: 0.1,
            rest_fatigue_rate: 0.01,
            idle_drain: 0.1,
            max_steps: 1_000_000,
            clamp_to_min: false,
        }
    }
}

/// Result of a priority-sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityOutcome {
    /// Executed basic tasks in execution order.
    pub history: Vec<ExecutionRecord>,
    /// Curve points, ending with a [`CurveEvent::FinalGain`] point when
    /// anything was recorded.
    pub curve: Vec<CurvePoint>,
    /// One point per meditation, carrying the fatigue factor.
    pub meditation_points: Vec<RecoveryPoint>,
    /// Sum of meditation gains (before capping).
    pub total_gain: f64,
    /// Per-meditation estimate: `effectiveness × duration × attention ÷ fatigue`.
    pub recovered_estimates: Vec<f64>,
    pub final_clock: f64,
    pub final_attention: f64,
    pub final_fatigue: f64,
    /// Loop iterations used, including idle ticks.
    pub steps: usize,
}

/// Priority-sampling engine.
///
/// # Example
///
/// ```
/// use attention_sim::models::{AttentionBounds, BasicTask, CompositeTask, MeditationPlan};
/// use attention_sim::sampling::RngSampler;
/// use attention_sim::scenario::PriorityScenario;
/// use attention_sim::simulation::PrioritySimulator;
///
/// let task = CompositeTask::new(0, "Write")
///     .with_basic_task(BasicTask::new("Draft", 5.0, 1.0))
///     .with_criticality(1.0);
/// let scenario = PriorityScenario::new(
///     vec![task],
///     60.0,
///     AttentionBounds::new(50.0, 100.0),
///     MeditationPlan::new(0.0, 5.0, 3.0),
/// );
///
/// let outcome = PrioritySimulator::new()
///     .simulate(&scenario, &mut RngSampler::seeded(1))
///     .unwrap();
/// assert_eq!(outcome.final_clock, 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrioritySimulator {
    config: PriorityConfig,
}

impl PrioritySimulator {
    /// Creates an engine with default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine constants.
    pub fn with_config(mut self, config: PriorityConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PriorityConfig {
        &self.config
    }

    /// Runs the scenario, drawing candidates from `sampler`.
    ///
    /// The scenario's tasks are copied; their cursors are left untouched.
    pub fn simulate<S: IndexSampler>(
        &self,
        scenario: &PriorityScenario,
        sampler: &mut S,
    ) -> Result<PriorityOutcome, SimulationError> {
        let cfg = &self.config;
        let bounds = scenario.bounds;
        let plan = scenario.meditation;
        let mut tasks: Vec<CompositeTask> = scenario.tasks.clone();

        let mut clock = 0.0_f64;
        let mut attention = scenario.initial_attention;
        let mut fatigue = 1.0_f64;
        let mut history = Vec::new();
        let mut curve = Vec::new();
        let mut meditation_points = Vec::new();
        let mut total_gain = 0.0;
        let mut steps = 0usize;
        let mut stalled = 0usize;

        debug!(
            tasks = tasks.len(),
            basic_tasks = scenario.basic_task_count(),
            initial_attention = attention,
            "priority run started"
        );

        while tasks.iter().any(|t| !t.is_completed()) {
            if stalled >= cfg.max_steps {
                let pending = tasks.iter().map(CompositeTask::remaining).sum();
                warn!(stalled, steps, clock, pending, "step budget exhausted");
                return Err(SimulationError::StepBudgetExhausted {
                    steps: stalled,
                    clock,
                    pending,
                });
            }
            steps += 1;

            let eligible: Vec<usize> = tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.next_basic_task().is_some_and(|b| b.is_eligible_at(clock)))
                .map(|(i, _)| i)
                .collect();

            if eligible.is_empty() {
                let before = clock;
                clock += 1.0;
                if clock <= before || !has_future_arrival(&tasks, before) {
                    stalled += 1;
                }
                curve.push(CurvePoint::untasked(clock, fatigue, attention, CurveEvent::Idle));
                fatigue *= 1.0 + cfg.rest_fatigue_rate;
                attention = self.floor(attention - cfg.idle_drain, bounds.min);
                trace!(clock, attention, fatigue, "idle tick");
                continue;
            }

            let weights: Vec<f64> = eligible
                .iter()
                .filter_map(|&i| {
                    let task = &tasks[i];
                    task.next_basic_task()
                        .map(|b| candidate_weight(task, b, fatigue))
                })
                .collect();
            let probabilities = selection_probabilities(&weights);
            let pick = sampler.draw(&probabilities);
            debug_assert!(
                pick < eligible.len(),
                "sampler returned {pick} for {} candidates",
                eligible.len()
            );
            let pick = pick.min(eligible.len() - 1);
            let chosen = eligible[pick];

            if attention >= bounds.min {
                let task = &mut tasks[chosen];
                let Some(basic) = task.next_basic_task().cloned() else {
                    continue;
                };
                history.push(ExecutionRecord {
                    start: clock,
                    task_id: task.id,
                    basic_task: basic.name.clone(),
                    duration: basic.duration,
                    difficulty: basic.difficulty,
                });
                clock += basic.duration;
                curve.push(CurvePoint::task(clock, task.id, fatigue, attention));
                task.complete_basic_task();
                attention = self.floor(
                    attention - basic.difficulty * basic.duration * cfg.depletion_scale,
                    bounds.min,
                );
                fatigue *= 1.0 + basic.difficulty * cfg.fatigue_per_difficulty;
                trace!(
                    clock,
                    task_id = task.id,
                    basic_task = %basic.name,
                    attention,
                    fatigue,
                    "basic task executed"
                );
            } else if plan.is_available_at(clock) {
                let gain = plan.gain();
                let before = attention;
                attention = bounds.cap(attention + gain);
                if attention <= before {
                    stalled += 1;
                }
                total_gain += gain;
                meditation_points.push(RecoveryPoint {
                    time: clock,
                    attention,
                    fatigue: Some(fatigue),
                });
                curve.push(CurvePoint::untasked(
                    clock,
                    fatigue,
                    attention,
                    CurveEvent::Meditation,
                ));
                debug!(clock, gain, attention, "meditation performed");
                clock += plan.duration;
                fatigue *= 1.0 + cfg.rest_fatigue_rate;
            } else {
                stalled += 1;
            }
        }

        if let Some(last) = curve.last().copied() {
            let attention_after = bounds.cap(last.attention + plan.gain());
            curve.push(CurvePoint::untasked(
                clock + 1.0,
                fatigue,
                attention_after,
                CurveEvent::FinalGain,
            ));
        }

        let recovered_estimates = meditation_points
            .iter()
            .map(|p| plan.effectiveness * plan.duration * (p.attention / p.fatigue.unwrap_or(1.0)))
            .collect();

        debug!(
            clock,
            attention,
            fatigue,
            executions = history.len(),
            meditations = meditation_points.len(),
            steps,
            "priority run finished"
        );

        Ok(PriorityOutcome {
            history,
            curve,
            meditation_points,
            total_gain,
            recovered_estimates,
            final_clock: clock,
            final_attention: attention,
            final_fatigue: fatigue,
            steps,
        })
    }

    #[inline]
    fn floor(&self, attention: f64, min: f64) -> f64 {
        if self.config.clamp_to_min {
            attention.max(min)
        } else {
            attention
        }
    }
}

/// Whether some unfinished task's next basic task arrives at a finite time
/// after `clock`.
fn has_future_arrival(tasks: &[CompositeTask], clock: f64) -> bool {
    tasks
        .iter()
        .filter_map(CompositeTask::next_basic_task)
        .any(|b| b.waiting_time.is_finite() && b.waiting_time > clock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttentionBounds, BasicTask, MeditationPlan};
    use crate::sampling::RngSampler;

    /// Replays a fixed list of indices.
    struct Scripted(Vec<usize>);

    impl IndexSampler for Scripted {
        fn draw(&mut self, _probabilities: &[f64]) -> usize {
            if self.0.is_empty() {
                0
            } else {
                self.0.remove(0)
            }
        }
    }

    fn single(duration: f64, difficulty: f64) -> CompositeTask {
        CompositeTask::new(0, "Solo")
            .with_basic_task(BasicTask::new("Only", duration, difficulty))
            .with_criticality(1.0)
    }

    fn scenario(tasks: Vec<CompositeTask>, initial: f64, min: f64) -> PriorityScenario {
        PriorityScenario::new(
            tasks,
            initial,
            AttentionBounds::new(min, 100.0),
            MeditationPlan::new(0.0, 5.0, 3.0),
        )
    }

    #[test]
    fn test_single_basic_task() {
        let s = scenario(vec![single(5.0, 1.0)], 60.0, 50.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(3))
            .unwrap();

        assert_eq!(outcome.final_clock, 5.0);
        assert!((outcome.final_attention - 59.95).abs() < 1e-12);
        assert!((outcome.final_fatigue - 1.1).abs() < 1e-12);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.history[0].start, 0.0);
        assert_eq!(outcome.steps, 1);

        // Execution point then the final gain (60 + 15)
        assert_eq!(outcome.curve.len(), 2);
        assert_eq!(outcome.curve[0].time, 5.0);
        assert_eq!(outcome.curve[0].fatigue, 1.0);
        assert_eq!(outcome.curve[1].event, CurveEvent::FinalGain);
        assert_eq!(outcome.curve[1].time, 6.0);
        assert_eq!(outcome.curve[1].attention, 75.0);
        assert!(outcome.meditation_points.is_empty());
        assert_eq!(outcome.total_gain, 0.0);
    }

    #[test]
    fn test_scenario_tasks_untouched() {
        let s = scenario(vec![single(5.0, 1.0)], 60.0, 50.0);
        PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(3))
            .unwrap();
        assert_eq!(s.tasks[0].cursor(), 0);
    }

    #[test]
    fn test_meditation_when_below_threshold() {
        let s = scenario(vec![single(10.0, 2.0)], 40.0, 50.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(9))
            .unwrap();

        // Meditate once (40 + 15 = 55), then run the task
        assert_eq!(outcome.meditation_points.len(), 1);
        let point = outcome.meditation_points[0];
        assert_eq!(point.time, 0.0);
        assert_eq!(point.attention, 55.0);
        assert_eq!(point.fatigue, Some(1.0));
        assert_eq!(outcome.total_gain, 15.0);

        assert_eq!(outcome.history[0].start, 5.0);
        assert_eq!(outcome.final_clock, 15.0);
        assert!((outcome.final_attention - 54.8).abs() < 1e-12);
        assert!((outcome.final_fatigue - 1.01 * 1.2).abs() < 1e-12);
        assert!((outcome.recovered_estimates[0] - 15.0 * 55.0).abs() < 1e-9);

        let events: Vec<CurveEvent> = outcome.curve.iter().map(|p| p.event).collect();
        assert_eq!(
            events,
            vec![CurveEvent::Meditation, CurveEvent::Task, CurveEvent::FinalGain]
        );
    }

    #[test]
    fn test_meditation_capped_at_max() {
        let mut s = scenario(vec![single(1.0, 1.0)], 95.0, 99.0);
        s.meditation = MeditationPlan::new(0.0, 10.0, 7.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(0))
            .unwrap();
        assert_eq!(outcome.meditation_points[0].attention, 100.0);
        assert_eq!(outcome.total_gain, 70.0);
        for point in &outcome.curve {
            assert!(point.attention <= 100.0);
        }
    }

    #[test]
    fn test_idle_until_waiting_time() {
        let task = CompositeTask::new(0, "Later")
            .with_basic_task(BasicTask::new("Wait", 2.0, 1.0).with_waiting_time(3.0))
            .with_criticality(1.0);
        let s = scenario(vec![task], 80.0, 50.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(5))
            .unwrap();

        let idle: Vec<&CurvePoint> = outcome
            .curve
            .iter()
            .filter(|p| p.event == CurveEvent::Idle)
            .collect();
        assert_eq!(idle.len(), 3);
        assert_eq!(idle[0].time, 1.0);
        assert!(idle.iter().all(|p| p.task_id.is_none()));

        assert_eq!(outcome.history[0].start, 3.0);
        assert_eq!(outcome.final_clock, 5.0);
        let expected_fatigue = 1.01_f64.powi(3) * 1.1;
        assert!((outcome.final_fatigue - expected_fatigue).abs() < 1e-12);
        assert!((outcome.final_attention - (80.0 - 0.3 - 0.02)).abs() < 1e-9);
    }

    #[test]
    fn test_sub_tasks_run_in_order() {
        let task = CompositeTask::new(0, "Email")
            .with_basic_task(BasicTask::new("Read", 15.0, 0.5))
            .with_basic_task(BasicTask::new("Follow Up", 10.0, 0.5))
            .with_criticality(1.0);
        let s = scenario(vec![task], 90.0, 10.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(1))
            .unwrap();
        let names: Vec<&str> = outcome.history.iter().map(|h| h.basic_task.as_str()).collect();
        assert_eq!(names, vec!["Read", "Follow Up"]);
        assert_eq!(outcome.history[1].start, 15.0);
    }

    #[test]
    fn test_sampler_choice_is_honored() {
        let tasks = vec![
            single(5.0, 1.0),
            CompositeTask::new(1, "Other")
                .with_basic_task(BasicTask::new("Other", 3.0, 1.0))
                .with_criticality(1.0),
        ];
        let s = scenario(tasks, 90.0, 10.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut Scripted(vec![1, 0]))
            .unwrap();
        let ids: Vec<usize> = outcome.history.iter().map(|h| h.task_id).collect();
        assert_eq!(ids, vec![1, 0]);
        assert_eq!(outcome.history[1].start, 3.0);
    }

    #[test]
    fn test_zero_criticality_still_completes() {
        let tasks = vec![
            single(5.0, 1.0).with_criticality(0.0),
            CompositeTask::new(1, "Zero")
                .with_basic_task(BasicTask::new("z", 5.0, 1.0))
                .with_criticality(0.0),
        ];
        let s = scenario(tasks, 90.0, 10.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(21))
            .unwrap();
        assert_eq!(outcome.history.len(), 2);
    }

    #[test]
    fn test_stall_hits_step_budget() {
        // Under threshold, meditation not yet allowed, and the task is eligible:
        // nothing ever changes.
        let mut s = scenario(vec![single(5.0, 1.0)], 10.0, 50.0);
        s.meditation = MeditationPlan::new(100.0, 5.0, 3.0);
        let engine = PrioritySimulator::new().with_config(PriorityConfig {
            max_steps: 50,
            ..Default::default()
        });
        let err = engine
            .simulate(&s, &mut RngSampler::seeded(0))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::StepBudgetExhausted {
                steps: 50,
                clock: 0.0,
                pending: 1
            }
        );
    }

    #[test]
    fn test_far_waiting_time_is_not_a_stall() {
        let task = CompositeTask::new(0, "Far")
            .with_basic_task(BasicTask::new("Later", 2.0, 1.0).with_waiting_time(200.0))
            .with_criticality(1.0);
        let s = scenario(vec![task], 80.0, 50.0);
        let engine = PrioritySimulator::new().with_config(PriorityConfig {
            max_steps: 50,
            ..Default::default()
        });

        let outcome = engine.simulate(&s, &mut RngSampler::seeded(0)).unwrap();
        assert_eq!(outcome.history[0].start, 200.0);
        assert_eq!(outcome.final_clock, 202.0);
        assert_eq!(outcome.steps, 201);
    }

    #[test]
    fn test_unreachable_waiting_time_hits_step_budget() {
        let task = CompositeTask::new(0, "Never")
            .with_basic_task(BasicTask::new("n", 1.0, 1.0).with_waiting_time(f64::INFINITY))
            .with_criticality(1.0);
        let s = scenario(vec![task], 80.0, 50.0);
        let engine = PrioritySimulator::new().with_config(PriorityConfig {
            max_steps: 20,
            ..Default::default()
        });
        let err = engine
            .simulate(&s, &mut RngSampler::seeded(0))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::StepBudgetExhausted {
                steps: 20,
                clock: 20.0,
                pending: 1
            }
        );
    }

    #[test]
    fn test_useless_meditation_hits_step_budget() {
        let mut s = scenario(vec![single(5.0, 1.0)], 10.0, 50.0);
        s.meditation = MeditationPlan::new(0.0, 5.0, 0.0);
        let engine = PrioritySimulator::new().with_config(PriorityConfig {
            max_steps: 10,
            ..Default::default()
        });
        let err = engine
            .simulate(&s, &mut RngSampler::seeded(0))
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::StepBudgetExhausted { steps: 10, .. }
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "sampler returned 5 for 1 candidates")]
    fn test_out_of_range_draw_panics_in_debug() {
        let s = scenario(vec![single(5.0, 1.0)], 60.0, 50.0);
        let _ = PrioritySimulator::new().simulate(&s, &mut Scripted(vec![5]));
    }

    #[test]
    fn test_no_tasks_no_curve() {
        let s = scenario(Vec::new(), 70.0, 50.0);
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(0))
            .unwrap();
        assert!(outcome.curve.is_empty());
        assert!(outcome.history.is_empty());
        assert_eq!(outcome.final_fatigue, 1.0);
    }

    #[test]
    fn test_fatigue_never_decreases() {
        let tasks = crate::templates::Template::EmergencyManagement.tasks();
        let s = PriorityScenario::new(
            tasks,
            52.0,
            AttentionBounds::new(50.0, 100.0),
            MeditationPlan::new(0.0, 5.0, 2.0),
        );
        let outcome = PrioritySimulator::new()
            .simulate(&s, &mut RngSampler::seeded(77))
            .unwrap();
        assert!(outcome.final_fatigue > 1.0);
        for pair in outcome.curve.windows(2) {
            assert!(pair[1].fatigue >= pair[0].fatigue);
        }
    }

    #[test]
    fn test_same_seed_same_outcome() {
        let tasks = crate::templates::Template::SoftwareDevelopment.tasks();
        let s = PriorityScenario::new(
            tasks,
            60.0,
            AttentionBounds::new(45.0, 100.0),
            MeditationPlan::new(20.0, 5.0, 3.0),
        );
        let engine = PrioritySimulator::new();
        let a = engine.simulate(&s, &mut RngSampler::seeded(2024)).unwrap();
        let b = engine.simulate(&s, &mut RngSampler::seeded(2024)).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_clamp_to_min() {
        let s = scenario(vec![single(100.0, 5.0)], 51.0, 50.0);
        let engine = PrioritySimulator::new().with_config(PriorityConfig {
            clamp_to_min: true,
            ..Default::default()
        });
        let outcome = engine.simulate(&s, &mut RngSampler::seeded(0)).unwrap();
        assert_eq!(outcome.final_attention, 50.0);
    }
}
