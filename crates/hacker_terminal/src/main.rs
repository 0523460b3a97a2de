use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use profile_store::{profile_root, AccountStore, PreferenceStore};

use hacker_terminal::app::App;
use hacker_terminal::config::EnvConfig;
use hacker_terminal::library::CommandLibrary;
use hacker_terminal::logging::DebugLog;
use hacker_terminal::runtime::PlaybackController;
use hacker_terminal::sound::{SoundCue, SoundPlayer};
use hacker_terminal::theme::palette;
use hacker_terminal::tui::{render_screen, Styler};

const POLL_INTERVAL: Duration = Duration::from_millis(30);
const DEFAULT_WIDTH: usize = 80;

fn main() -> io::Result<()> {
    let config = EnvConfig::from_env();
    let log = DebugLog::from_config(&config);
    log.note("starting up");

    let root = profile_root(&config.profile_base());
    let accounts = AccountStore::new(&root);
    let prefs_store = PreferenceStore::new(&root);
    let app = Arc::new(Mutex::new(App::new(accounts, prefs_store)));

    let sounds = Arc::new(SoundPlayer::new(!config.no_sound));
    {
        let mut app = lock_unpoisoned(&app);
        let player = Arc::clone(&sounds);
        app.effects_mut()
            .on_task_started(move || player.play(SoundCue::Click));
        let player = Arc::clone(&sounds);
        app.effects_mut()
            .on_line_revealed(move || player.play(SoundCue::Typing));
        let player = Arc::clone(&sounds);
        app.effects_mut()
            .on_task_completed(move || player.play(SoundCue::Success));
    }

    let controller = PlaybackController::new(Arc::clone(&app), Arc::new(CommandLibrary), log);
    let mut host = Arc::clone(&controller);

    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))?;

    let input_rx = spawn_stdin_reader();
    let interactive = stdin_is_tty();
    let color_enabled = interactive && !config.no_color;
    let width = terminal_width();
    let mut input_open = true;

    draw(&app, color_enabled, interactive, width);

    loop {
        if lock_unpoisoned(&app).should_exit || controller.stop_requested() {
            break;
        }
        if interrupted.swap(false, Ordering::SeqCst) {
            lock_unpoisoned(&app).on_control_c(&mut host);
        }
        let drained = controller.flush_pending_events();
        if drained > 0 || controller.take_render_request() {
            draw(&app, color_enabled, interactive, width);
        }
        if input_open {
            match input_rx.recv_timeout(POLL_INTERVAL) {
                Ok(line) => {
                    let mut app = lock_unpoisoned(&app);
                    app.on_input_replace(line);
                    app.on_submit(&mut host);
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => input_open = false,
            }
        } else {
            // Input is gone (piped session); let running playbacks stream
            // to completion, then leave.
            thread::sleep(POLL_INTERVAL);
            let mut app = lock_unpoisoned(&app);
            if app.active_runs() == 0 && !app.should_exit {
                app.on_quit(&mut host);
            }
        }
    }

    controller.shutdown();
    Ok(())
}

fn draw(app: &Arc<Mutex<App>>, color_enabled: bool, interactive: bool, width: usize) {
    let lines = {
        let app = lock_unpoisoned(app);
        let styler = Styler::new(palette(app.prefs.theme), color_enabled);
        render_screen(&app, &styler, width)
    };
    let mut stdout = io::stdout().lock();
    if interactive && color_enabled {
        let _ = stdout.write_all(b"\x1b[2J\x1b[H");
    }
    for line in &lines {
        let _ = writeln!(stdout, "{line}");
    }
    if interactive {
        let _ = write!(stdout, "> ");
    }
    let _ = stdout.flush();
}

fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    let _ = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
    rx
}

fn stdin_is_tty() -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 40)
        .unwrap_or(DEFAULT_WIDTH)
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
