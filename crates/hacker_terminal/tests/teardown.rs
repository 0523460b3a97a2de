use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use hacker_terminal::app::{App, PlaybackRequest};
use hacker_terminal::library::PlaybackLibrary;
use hacker_terminal::logging::DebugLog;
use hacker_terminal::runtime::PlaybackController;
use playback_engine::{CancelSignal, TaskEvent, TaskRoutine, TaskRun};
use profile_store::{AccountStore, PreferenceStore};

struct CountingRoutine {
    exits: Arc<AtomicUsize>,
}

impl TaskRoutine for CountingRoutine {
    fn play(
        &self,
        run: TaskRun,
        cancel: CancelSignal,
        emit: &mut dyn FnMut(TaskEvent),
    ) -> Result<(), String> {
        let run_id = run.run_id;
        emit(TaskEvent::Started { run_id });

        while !cancel.load(Ordering::SeqCst) {
            thread::sleep(Duration::from_millis(5));
        }

        emit(TaskEvent::Cancelled { run_id });
        self.exits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct CountingLibrary {
    exits: Arc<AtomicUsize>,
}

impl PlaybackLibrary for CountingLibrary {
    fn routine(&self, _request: PlaybackRequest) -> Result<Box<dyn TaskRoutine>, String> {
        Ok(Box::new(CountingRoutine {
            exits: Arc::clone(&self.exits),
        }))
    }
}

fn controller_with(
    library: impl PlaybackLibrary,
) -> (Arc<Mutex<App>>, Arc<PlaybackController>, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let accounts = AccountStore::new(dir.path());
    accounts
        .register("neo", "neo@zion.net", "secret123")
        .expect("register");
    accounts.login("neo", "secret123").expect("login");

    let app = Arc::new(Mutex::new(App::new(
        AccountStore::new(dir.path()),
        PreferenceStore::new(dir.path()),
    )));
    let controller =
        PlaybackController::new(Arc::clone(&app), Arc::new(library), DebugLog::disabled());
    (app, controller, dir)
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn wait_until(
    timeout: Duration,
    mut tick: impl FnMut(),
    mut predicate: impl FnMut() -> bool,
) -> bool {
    let start = Instant::now();
    while start.elapsed() < timeout {
        tick();
        if predicate() {
            return true;
        }

        thread::sleep(Duration::from_millis(10));
    }

    tick();
    predicate()
}

fn submit(app: &Arc<Mutex<App>>, host: &mut Arc<PlaybackController>, line: &str) {
    let mut app = lock_unpoisoned(app);
    app.on_input_replace(line.to_string());
    app.on_submit(host);
}

#[test]
fn dropping_the_controller_joins_every_worker() {
    let exits = Arc::new(AtomicUsize::new(0));
    let (app, controller, _dir) = controller_with(CountingLibrary {
        exits: Arc::clone(&exits),
    });
    let mut host = Arc::clone(&controller);

    submit(&app, &mut host, "open decrypt");
    submit(&app, &mut host, "start");
    assert_eq!(lock_unpoisoned(&app).active_runs(), 3);
    assert_eq!(controller.active_count(), 3);

    drop(host);
    drop(controller);
    assert_eq!(exits.load(Ordering::SeqCst), 3);
}

#[test]
fn quit_cancels_workers_and_requests_stop() {
    let exits = Arc::new(AtomicUsize::new(0));
    let (app, controller, _dir) = controller_with(CountingLibrary {
        exits: Arc::clone(&exits),
    });
    let mut host = Arc::clone(&controller);

    submit(&app, &mut host, "scan");
    {
        let mut app = lock_unpoisoned(&app);
        app.on_quit(&mut host);
        assert!(app.should_exit);
        assert_eq!(app.active_runs(), 0);
    }
    assert!(controller.stop_requested());

    let drained = wait_until(
        Duration::from_secs(3),
        || {
            controller.flush_pending_events();
        },
        || controller.active_count() == 0 && exits.load(Ordering::SeqCst) == 1,
    );
    assert!(drained, "cancelled worker never drained");
}

#[test]
fn shutdown_is_idempotent() {
    let exits = Arc::new(AtomicUsize::new(0));
    let (app, controller, _dir) = controller_with(CountingLibrary {
        exits: Arc::clone(&exits),
    });
    let mut host = Arc::clone(&controller);

    submit(&app, &mut host, "scan");
    assert_eq!(controller.active_count(), 1);

    controller.shutdown();
    assert_eq!(controller.active_count(), 0);
    assert_eq!(exits.load(Ordering::SeqCst), 1);

    controller.shutdown();
    assert_eq!(exits.load(Ordering::SeqCst), 1);
}
