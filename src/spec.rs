//! Playback specs: tick cadence plus a task body, runnable as a routine.

use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use crate::script::LineScript;
use crate::task::{CancelSignal, TaskEvent, TaskRoutine, TaskRun, TaskSpecError};

/// What a playback reveals on each tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskBody {
    /// Reveal the next script line per tick.
    Lines(LineScript),
    /// Advance a single 0-100 meter by a random step in `(0, max_step]` per tick.
    Meter { max_step: f64 },
    /// Breach one discrete layer per tick.
    Layers { count: usize },
    /// Emit nothing between `Started` and the terminal event; the cadence is
    /// the whole delay (one-shot lookups).
    Delay,
}

/// Validated pairing of a tick cadence with a task body.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSpec {
    cadence: Duration,
    body: TaskBody,
}

impl TaskSpec {
    pub fn new(cadence: Duration, body: TaskBody) -> Result<Self, TaskSpecError> {
        if cadence.is_zero() {
            return Err(TaskSpecError::ZeroCadence);
        }

        match body {
            TaskBody::Meter { max_step } if !(max_step > 0.0 && max_step <= 100.0) => {
                return Err(TaskSpecError::InvalidStep { max_step });
            }
            TaskBody::Layers { count: 0 } => return Err(TaskSpecError::ZeroLayers),
            _ => {}
        }

        Ok(Self { cadence, body })
    }

    #[must_use]
    pub fn cadence(&self) -> Duration {
        self.cadence
    }

    #[must_use]
    pub fn body(&self) -> &TaskBody {
        &self.body
    }

    const SLEEP_SLICE_MS: u64 = 10;

    /// Sleeps one cadence in short slices so a cancel lands promptly.
    ///
    /// Returns true when the cancel flag was observed set.
    fn pause(&self, cancel: &CancelSignal) -> bool {
        let slice = Duration::from_millis(Self::SLEEP_SLICE_MS);
        let mut remaining = self.cadence;

        while !remaining.is_zero() {
            if cancel.load(Ordering::SeqCst) {
                return true;
            }
            let step = remaining.min(slice);
            thread::sleep(step);
            remaining -= step;
        }

        cancel.load(Ordering::SeqCst)
    }
}

impl TaskRoutine for TaskSpec {
    fn play(
        &self,
        run: TaskRun,
        cancel: CancelSignal,
        emit: &mut dyn FnMut(TaskEvent),
    ) -> Result<(), String> {
        let run_id = run.run_id;

        emit(TaskEvent::Started { run_id });

        match &self.body {
            TaskBody::Lines(script) => {
                for line in script.lines() {
                    if self.pause(&cancel) {
                        emit(TaskEvent::Cancelled { run_id });
                        return Ok(());
                    }

                    emit(TaskEvent::Line {
                        run_id,
                        text: line.clone(),
                    });
                }
            }
            TaskBody::Meter { max_step } => {
                let mut progress = 0.0_f64;

                while progress < 100.0 {
                    if self.pause(&cancel) {
                        emit(TaskEvent::Cancelled { run_id });
                        return Ok(());
                    }

                    // fastrand::f64 is [0, 1); flip it so the step stays in
                    // (0, max_step] and every tick makes progress.
                    progress = (progress + (1.0 - fastrand::f64()) * max_step).min(100.0);
                    emit(TaskEvent::Meter { run_id, progress });
                }
            }
            TaskBody::Layers { count } => {
                for layer in 0..*count {
                    if self.pause(&cancel) {
                        emit(TaskEvent::Cancelled { run_id });
                        return Ok(());
                    }

                    emit(TaskEvent::LayerBreached { run_id, layer });
                }
            }
            TaskBody::Delay => {
                if self.pause(&cancel) {
                    emit(TaskEvent::Cancelled { run_id });
                    return Ok(());
                }
            }
        }

        if cancel.load(Ordering::SeqCst) {
            emit(TaskEvent::Cancelled { run_id });
        } else {
            emit(TaskEvent::Finished { run_id });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use std::time::Duration;

    use super::{TaskBody, TaskSpec};
    use crate::script::LineScript;
    use crate::task::{CancelSignal, TaskEvent, TaskRoutine, TaskRun, TaskSpecError};

    fn collect_events(spec: &TaskSpec, cancel: CancelSignal) -> Vec<TaskEvent> {
        let mut events = Vec::new();
        spec.play(TaskRun { run_id: 7 }, cancel, &mut |event| {
            events.push(event)
        })
        .expect("playback should succeed");
        events
    }

    fn fast_spec(body: TaskBody) -> TaskSpec {
        TaskSpec::new(Duration::from_millis(1), body).expect("test spec should validate")
    }

    #[test]
    fn construction_rejects_invalid_cadence_step_and_layer_count() {
        assert_eq!(
            TaskSpec::new(Duration::ZERO, TaskBody::Delay),
            Err(TaskSpecError::ZeroCadence)
        );
        assert_eq!(
            TaskSpec::new(Duration::from_millis(300), TaskBody::Meter { max_step: 0.0 }),
            Err(TaskSpecError::InvalidStep { max_step: 0.0 })
        );
        assert_eq!(
            TaskSpec::new(
                Duration::from_millis(300),
                TaskBody::Meter { max_step: 250.0 }
            ),
            Err(TaskSpecError::InvalidStep { max_step: 250.0 })
        );
        assert_eq!(
            TaskSpec::new(Duration::from_millis(600), TaskBody::Layers { count: 0 }),
            Err(TaskSpecError::ZeroLayers)
        );
    }

    #[test]
    fn line_playback_reveals_every_line_in_order_then_finishes() {
        let script = LineScript::new(vec!["first", "second", "third"])
            .expect("literal script should build");
        let spec = fast_spec(TaskBody::Lines(script));

        let events = collect_events(&spec, Arc::new(AtomicBool::new(false)));

        assert_eq!(
            events,
            vec![
                TaskEvent::Started { run_id: 7 },
                TaskEvent::Line {
                    run_id: 7,
                    text: "first".to_string(),
                },
                TaskEvent::Line {
                    run_id: 7,
                    text: "second".to_string(),
                },
                TaskEvent::Line {
                    run_id: 7,
                    text: "third".to_string(),
                },
                TaskEvent::Finished { run_id: 7 },
            ]
        );
    }

    #[test]
    fn meter_playback_is_monotonic_and_ends_exactly_at_100() {
        let spec = fast_spec(TaskBody::Meter { max_step: 25.0 });

        let events = collect_events(&spec, Arc::new(AtomicBool::new(false)));

        let observations: Vec<f64> = events
            .iter()
            .filter_map(|event| match event {
                TaskEvent::Meter { progress, .. } => Some(*progress),
                _ => None,
            })
            .collect();

        assert!(!observations.is_empty());
        for pair in observations.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(observations.last().copied(), Some(100.0));
        assert!(matches!(events.last(), Some(TaskEvent::Finished { .. })));
    }

    #[test]
    fn layer_playback_breaches_each_layer_once_in_order() {
        let spec = fast_spec(TaskBody::Layers { count: 4 });

        let events = collect_events(&spec, Arc::new(AtomicBool::new(false)));

        let layers: Vec<usize> = events
            .iter()
            .filter_map(|event| match event {
                TaskEvent::LayerBreached { layer, .. } => Some(*layer),
                _ => None,
            })
            .collect();

        assert_eq!(layers, vec![0, 1, 2, 3]);
        assert!(matches!(events.last(), Some(TaskEvent::Finished { .. })));
    }

    #[test]
    fn delay_playback_emits_only_lifecycle_events() {
        let spec = fast_spec(TaskBody::Delay);

        let events = collect_events(&spec, Arc::new(AtomicBool::new(false)));

        assert_eq!(
            events,
            vec![
                TaskEvent::Started { run_id: 7 },
                TaskEvent::Finished { run_id: 7 },
            ]
        );
    }

    #[test]
    fn pre_set_cancel_stops_playback_before_any_delta() {
        let script =
            LineScript::new(vec!["never", "revealed"]).expect("literal script should build");
        let spec = fast_spec(TaskBody::Lines(script));

        let events = collect_events(&spec, Arc::new(AtomicBool::new(true)));

        assert_eq!(
            events,
            vec![
                TaskEvent::Started { run_id: 7 },
                TaskEvent::Cancelled { run_id: 7 },
            ]
        );
    }
}
