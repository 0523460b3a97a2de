//! Live-thread playback tests: exact-tick exhaustion, cancellation, pacing.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use playback_engine::{
    LineScript, ScrollbackBuffer, Severity, TaskBody, TaskEvent, TaskRoutine, TaskRun, TaskSpec,
};

const TICK_MS: u64 = 30;

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn wait_until(timeout: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if predicate() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    predicate()
}

fn spawn_playback(
    spec: TaskSpec,
    cancel: Arc<AtomicBool>,
) -> (Arc<Mutex<Vec<TaskEvent>>>, thread::JoinHandle<()>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let worker_events = Arc::clone(&events);

    let handle = thread::Builder::new()
        .name("playback-test".to_string())
        .spawn(move || {
            spec.play(TaskRun { run_id: 1 }, cancel, &mut |event| {
                lock_unpoisoned(&worker_events).push(event);
            })
            .unwrap();
        })
        .unwrap();

    (events, handle)
}

fn line_count(events: &Arc<Mutex<Vec<TaskEvent>>>) -> usize {
    lock_unpoisoned(events)
        .iter()
        .filter(|event| matches!(event, TaskEvent::Line { .. }))
        .count()
}

#[test]
fn six_line_script_completes_after_exactly_six_ticks() {
    let script = LineScript::new(vec![
        "> Tracing IP: 203.0.113.42",
        "> Resolving geolocation...",
        "> Country: United States",
        "> City: San Francisco, CA",
        "> ISP: CloudNet Systems",
        "[SUCCESS] Trace complete",
    ])
    .unwrap();
    let expected: Vec<String> = script.lines().to_vec();
    let spec = TaskSpec::new(Duration::from_millis(TICK_MS), TaskBody::Lines(script)).unwrap();

    let (events, handle) = spawn_playback(spec, Arc::new(AtomicBool::new(false)));
    handle.join().unwrap();

    let events = lock_unpoisoned(&events);
    let revealed: Vec<String> = events
        .iter()
        .filter_map(|event| match event {
            TaskEvent::Line { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(revealed, expected);
    assert!(matches!(events.last(), Some(TaskEvent::Finished { .. })));

    let mut buffer = ScrollbackBuffer::with_capacity(8);
    for line in &revealed {
        buffer.append(line.clone());
    }
    assert_eq!(buffer.len(), 6);
    assert_eq!(buffer.to_vec(), expected);
    assert_eq!(
        buffer.last().map(Severity::of),
        Some(Severity::Success),
        "final script line should classify as success"
    );
}

#[test]
fn cancel_mid_script_freezes_the_revealed_output() {
    let script = LineScript::new(vec!["one", "two", "three", "four", "five", "six"]).unwrap();
    let spec = TaskSpec::new(Duration::from_millis(TICK_MS), TaskBody::Lines(script)).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));

    let (events, handle) = spawn_playback(spec, Arc::clone(&cancel));

    assert!(
        wait_until(Duration::from_secs(5), || line_count(&events) >= 2),
        "playback should reveal at least two lines before cancellation"
    );
    cancel.store(true, Ordering::SeqCst);
    handle.join().unwrap();

    let revealed_at_join = line_count(&events);
    assert!(revealed_at_join < 6, "cancel should land before exhaustion");
    assert!(matches!(
        lock_unpoisoned(&events).last(),
        Some(TaskEvent::Cancelled { .. })
    ));

    thread::sleep(Duration::from_millis(200));
    assert_eq!(
        line_count(&events),
        revealed_at_join,
        "no delta may follow cancellation"
    );
}

#[test]
fn cancel_lands_within_one_tick_of_a_long_cadence() {
    let spec = TaskSpec::new(Duration::from_millis(2_000), TaskBody::Delay).unwrap();
    let cancel = Arc::new(AtomicBool::new(false));

    let started = Instant::now();
    let (events, handle) = spawn_playback(spec, Arc::clone(&cancel));

    assert!(wait_until(Duration::from_secs(2), || {
        !lock_unpoisoned(&events).is_empty()
    }));
    cancel.store(true, Ordering::SeqCst);
    handle.join().unwrap();

    assert!(
        started.elapsed() < Duration::from_millis(1_500),
        "sliced sleeping should let the cancel interrupt the delay"
    );
    assert!(matches!(
        lock_unpoisoned(&events).last(),
        Some(TaskEvent::Cancelled { .. })
    ));
}

#[test]
fn meter_playback_under_cancellation_never_decreases() {
    let spec = TaskSpec::new(
        Duration::from_millis(TICK_MS),
        TaskBody::Meter { max_step: 25.0 },
    )
    .unwrap();
    let cancel = Arc::new(AtomicBool::new(false));

    let (events, handle) = spawn_playback(spec, Arc::clone(&cancel));

    wait_until(Duration::from_secs(5), || {
        lock_unpoisoned(&events)
            .iter()
            .any(|event| matches!(event, TaskEvent::Meter { .. }))
    });
    cancel.store(true, Ordering::SeqCst);
    handle.join().unwrap();

    let events = lock_unpoisoned(&events);
    let observations: Vec<f64> = events
        .iter()
        .filter_map(|event| match event {
            TaskEvent::Meter { progress, .. } => Some(*progress),
            _ => None,
        })
        .collect();

    for pair in observations.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
    assert!(events.last().map(TaskEvent::is_terminal).unwrap_or(false));
}
