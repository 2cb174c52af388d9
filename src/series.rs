//! Chart feeds: plain ordered sequences for an external renderer.
//!
//! Nothing here knows about a plotting library. Each function reshapes
//! engine output into the series a chart needs.

use serde::{Deserialize, Serialize};

use crate::models::{
    CompositeTask, CurvePoint, ExecutionRecord, RecoveryInterval, RecoveryKind, Task, TaskSpan,
};

/// `(time, attention)` pairs in curve order.
pub fn attention_series(curve: &[CurvePoint]) -> Vec<(f64, f64)> {
    curve.iter().map(|p| (p.time, p.attention)).collect()
}

/// `(time, load)` pairs in curve order.
pub fn fatigue_series(curve: &[CurvePoint]) -> Vec<(f64, f64)> {
    curve.iter().map(|p| (p.time, p.fatigue)).collect()
}

/// A sample of the step-shaped attention line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepSample {
    pub time: f64,
    pub task_id: Option<usize>,
    pub fatigue: f64,
    pub attention: f64,
}

/// Step-shaped curve for charting.
///
/// Whenever the task id changes, an extra sample is inserted at the
/// previous point's time (still tagged with the previous task) carrying
/// the new point's values, so the line jumps vertically at the boundary.
/// The walk starts idle at t=0.
pub fn step_series(curve: &[CurvePoint]) -> Vec<StepSample> {
    let mut samples = Vec::with_capacity(curve.len() * 2);
    let mut last_time = 0.0;
    let mut last_task: Option<usize> = None;

    for point in curve {
        if point.task_id != last_task {
            samples.push(StepSample {
                time: last_time,
                task_id: last_task,
                fatigue: point.fatigue,
                attention: point.attention,
            });
        }
        samples.push(StepSample {
            time: point.time,
            task_id: point.task_id,
            fatigue: point.fatigue,
            attention: point.attention,
        });
        last_time = point.time;
        last_task = point.task_id;
    }
    samples
}

/// Scheduled slots of sequential tasks.
pub fn task_spans(tasks: &[Task]) -> Vec<TaskSpan> {
    tasks
        .iter()
        .map(|t| TaskSpan {
            task_id: t.id,
            label: t.name.clone(),
            start: t.start_time,
            end: t.end_time(),
        })
        .collect()
}

/// Executed basic-task spans, labeled with the owning task's name.
pub fn execution_spans(history: &[ExecutionRecord], tasks: &[CompositeTask]) -> Vec<TaskSpan> {
    history
        .iter()
        .map(|h| TaskSpan {
            task_id: h.task_id,
            label: tasks
                .iter()
                .find(|t| t.id == h.task_id)
                .map_or_else(|| h.basic_task.clone(), |t| t.name.clone()),
            start: h.start,
            end: h.end(),
        })
        .collect()
}

/// A shaded recovery window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoverySpan {
    pub kind: RecoveryKind,
    pub label: String,
    pub start: f64,
    pub end: f64,
}

/// Recovery windows as shaded spans.
pub fn recovery_spans(intervals: &[RecoveryInterval]) -> Vec<RecoverySpan> {
    intervals
        .iter()
        .map(|w| RecoverySpan {
            kind: w.kind,
            label: w.name.clone().unwrap_or_else(|| match w.kind {
                RecoveryKind::Meditation => "Meditation".to_string(),
                RecoveryKind::Breathing => "Breathing".to_string(),
            }),
            start: w.start_time,
            end: w.end_time(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BasicTask, CurveEvent};

    #[test]
    fn test_step_series_inserts_boundaries() {
        let curve = vec![
            CurvePoint::task(5.0, 0, 1.0, 60.0),
            CurvePoint::task(8.0, 0, 1.1, 59.0),
            CurvePoint::task(12.0, 1, 1.2, 58.0),
            CurvePoint::untasked(13.0, 1.3, 57.9, CurveEvent::Idle),
        ];
        let samples = step_series(&curve);
        let times: Vec<f64> = samples.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![0.0, 5.0, 8.0, 8.0, 12.0, 12.0, 13.0]);

        // Boundary sample keeps the old task but takes the new values
        assert_eq!(samples[3].task_id, Some(0));
        assert_eq!(samples[3].attention, 58.0);
        assert_eq!(samples[5].task_id, Some(1));
        assert_eq!(samples[6].task_id, None);
    }

    #[test]
    fn test_step_series_leading_idle_has_no_extra_sample() {
        let curve = vec![CurvePoint::untasked(1.0, 1.0, 50.0, CurveEvent::Idle)];
        assert_eq!(step_series(&curve).len(), 1);
        assert!(step_series(&[]).is_empty());
    }

    #[test]
    fn test_attention_and_fatigue_series() {
        let curve = vec![CurvePoint::task(1.0, 0, 2.0, 40.0)];
        assert_eq!(attention_series(&curve), vec![(1.0, 40.0)]);
        assert_eq!(fatigue_series(&curve), vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_spans() {
        let spans = task_spans(&[Task::new(2, "Meet").with_start_time(30.0).with_duration(45.0)]);
        assert_eq!(spans[0].label, "Meet");
        assert_eq!((spans[0].start, spans[0].end), (30.0, 75.0));

        let tasks = vec![CompositeTask::new(4, "Cooking")
            .with_basic_task(BasicTask::new("Prep", 15.0, 0.5))];
        let history = vec![ExecutionRecord {
            start: 3.0,
            task_id: 4,
            basic_task: "Prep".into(),
            duration: 15.0,
            difficulty: 0.5,
        }];
        let spans = execution_spans(&history, &tasks);
        assert_eq!(spans[0].label, "Cooking");
        assert_eq!(spans[0].end, 18.0);

        let windows = vec![
            RecoveryInterval::meditation(0.0, 5.0, 1.0),
            RecoveryInterval::breathing("4-7-8", 10.0, 2.0, 1.0),
        ];
        let spans = recovery_spans(&windows);
        assert_eq!(spans[0].label, "Meditation");
        assert_eq!(spans[1].label, "4-7-8");
        assert_eq!(spans[1].end, 12.0);
    }
}
