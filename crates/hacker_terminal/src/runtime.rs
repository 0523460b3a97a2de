//! Playback workers and the event pump between them and the app.
//!
//! Each start spawns one worker thread that plays its routine and queues
//! [`TaskEvent`]s. The driving thread drains the queue with
//! [`PlaybackController::flush_pending_events`], so all app mutation stays
//! on one thread. Workers hold only the queue and bookkeeping handles, not
//! the controller itself, so dropping the last controller reference joins
//! every worker.

use std::collections::VecDeque;
use std::panic;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

use playback_engine::{CancelSignal, RunId, TaskEvent, TaskRoutine, TaskRun};

use crate::app::{App, HostOps, PlaybackRequest};
use crate::library::PlaybackLibrary;
use crate::logging::DebugLog;

struct ActiveTask {
    run_id: RunId,
    cancel: CancelSignal,
    join_handle: Option<thread::JoinHandle<()>>,
}

pub struct PlaybackController {
    app: Arc<Mutex<App>>,
    library: Arc<dyn PlaybackLibrary>,
    log: DebugLog,
    pending_events: Arc<Mutex<VecDeque<TaskEvent>>>,
    next_run_id: AtomicU64,
    active: Arc<Mutex<Vec<ActiveTask>>>,
    render_requested: Arc<AtomicBool>,
    stop_requested: AtomicBool,
}

impl PlaybackController {
    pub fn new(
        app: Arc<Mutex<App>>,
        library: Arc<dyn PlaybackLibrary>,
        log: DebugLog,
    ) -> Arc<Self> {
        Arc::new(Self {
            app,
            library,
            log,
            pending_events: Arc::new(Mutex::new(VecDeque::new())),
            next_run_id: AtomicU64::new(1),
            active: Arc::new(Mutex::new(Vec::new())),
            render_requested: Arc::new(AtomicBool::new(false)),
            stop_requested: AtomicBool::new(false),
        })
    }

    fn start_playback_internal(&self, request: PlaybackRequest) -> Result<RunId, String> {
        // Resolve the routine before touching any bookkeeping so a bad
        // request fails without leaving state behind.
        let routine = self.library.routine(request)?;
        let run_id = self.next_run_id.fetch_add(1, Ordering::SeqCst);
        let cancel: CancelSignal = Arc::new(AtomicBool::new(false));

        // Registered before the spawn so the worker's end-of-run check
        // always sees its own entry.
        lock_unpoisoned(&self.active).push(ActiveTask {
            run_id,
            cancel: Arc::clone(&cancel),
            join_handle: None,
        });

        let events = Arc::clone(&self.pending_events);
        let render_requested = Arc::clone(&self.render_requested);
        let active = Arc::clone(&self.active);
        let spawned = thread::Builder::new()
            .name(format!("hacker-terminal-task-{run_id}"))
            .spawn(move || run_worker(run_id, routine, cancel, events, render_requested, active));

        match spawned {
            Ok(handle) => {
                let mut active = lock_unpoisoned(&self.active);
                if let Some(task) = active.iter_mut().find(|task| task.run_id == run_id) {
                    task.join_handle = Some(handle);
                }
                self.log.note(&format!("run {run_id} started: {request:?}"));
                Ok(run_id)
            }
            Err(error) => {
                lock_unpoisoned(&self.active).retain(|task| task.run_id != run_id);
                Err(format!("Failed to spawn playback worker: {error}"))
            }
        }
    }

    fn cancel_playback_internal(&self, run_id: RunId) {
        let active = lock_unpoisoned(&self.active);
        if let Some(task) = active.iter().find(|task| task.run_id == run_id) {
            task.cancel.store(true, Ordering::SeqCst);
            self.log.note(&format!("run {run_id} cancel requested"));
        }
    }

    /// Applies every queued event to the app, returning how many were
    /// drained. Must be called from the driving thread.
    pub fn flush_pending_events(&self) -> usize {
        let mut drained = 0;
        loop {
            let event = lock_unpoisoned(&self.pending_events).pop_front();
            match event {
                Some(event) => {
                    self.apply_event(event);
                    drained += 1;
                }
                None => break,
            }
        }
        drained
    }

    fn apply_event(&self, event: TaskEvent) {
        let run_id = event.run_id();
        let terminal = event.is_terminal();
        {
            let mut app = lock_unpoisoned(&self.app);
            match event {
                TaskEvent::Started { run_id } => app.on_task_started(run_id),
                TaskEvent::Line { run_id, text } => app.on_task_line(run_id, text),
                TaskEvent::Meter { run_id, progress } => app.on_task_meter(run_id, progress),
                TaskEvent::LayerBreached { run_id, layer } => app.on_layer_breached(run_id, layer),
                TaskEvent::Finished { run_id } => app.on_task_finished(run_id),
                TaskEvent::Failed { run_id, error } => app.on_task_failed(run_id, error),
                TaskEvent::Cancelled { run_id } => app.on_task_cancelled(run_id),
            }
        }
        if terminal {
            self.clear_active_if_matching(run_id);
            self.log.note(&format!("run {run_id} finished"));
        }
    }

    fn clear_active_if_matching(&self, run_id: RunId) {
        let task = {
            let mut active = lock_unpoisoned(&self.active);
            active
                .iter()
                .position(|task| task.run_id == run_id)
                .map(|index| active.remove(index))
        };
        let Some(mut task) = task else {
            return;
        };
        if let Some(handle) = task.join_handle.take() {
            if handle.is_finished() && handle.thread().id() != thread::current().id() {
                let _ = handle.join();
            }
        }
    }

    pub fn take_render_request(&self) -> bool {
        self.render_requested.swap(false, Ordering::SeqCst)
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }

    pub fn active_count(&self) -> usize {
        lock_unpoisoned(&self.active).len()
    }

    /// Cancels and joins every live worker. Safe to call more than once.
    pub fn shutdown(&self) {
        let tasks: Vec<ActiveTask> = lock_unpoisoned(&self.active).drain(..).collect();
        for task in &tasks {
            task.cancel.store(true, Ordering::SeqCst);
        }
        for mut task in tasks {
            if let Some(handle) = task.join_handle.take() {
                let _ = handle.join();
            }
        }
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl HostOps for Arc<PlaybackController> {
    fn start_playback(&mut self, request: PlaybackRequest) -> Result<RunId, String> {
        self.start_playback_internal(request)
    }

    fn cancel_playback(&mut self, run_id: RunId) {
        self.cancel_playback_internal(run_id);
    }

    fn request_render(&mut self) {
        self.render_requested.store(true, Ordering::SeqCst);
    }

    fn request_stop(&mut self) {
        self.stop_requested.store(true, Ordering::SeqCst);
    }
}

fn run_worker(
    run_id: RunId,
    routine: Box<dyn TaskRoutine>,
    cancel: CancelSignal,
    events: Arc<Mutex<VecDeque<TaskEvent>>>,
    render_requested: Arc<AtomicBool>,
    active: Arc<Mutex<Vec<ActiveTask>>>,
) {
    let terminal_emitted = AtomicBool::new(false);
    let mut emit = |event: TaskEvent| {
        if event.is_terminal() {
            terminal_emitted.store(true, Ordering::SeqCst);
        }
        lock_unpoisoned(&events).push_back(event);
        render_requested.store(true, Ordering::SeqCst);
    };

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        routine.play(TaskRun { run_id }, Arc::clone(&cancel), &mut emit)
    }));
    match result {
        Ok(Ok(())) => {}
        Ok(Err(error)) => emit(TaskEvent::Failed { run_id, error }),
        Err(_) => emit(TaskEvent::Failed {
            run_id,
            error: "Playback routine panicked".to_string(),
        }),
    }

    // A routine that returned Ok without a terminal event would leave its
    // screen running forever; synthesize the failure instead.
    let still_active = lock_unpoisoned(&active)
        .iter()
        .any(|task| task.run_id == run_id);
    if !terminal_emitted.load(Ordering::SeqCst) && still_active {
        emit(TaskEvent::Failed {
            run_id,
            error: "Playback routine exited without a terminal event".to_string(),
        });
    }
}

pub(crate) fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
