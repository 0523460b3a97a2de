use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::EnvConfig;

/// Append-only debug log, enabled by pointing `HACKER_TERMINAL_LOG` at a file.
///
/// Writes are best-effort: the first failed append latches the log off so a
/// bad path does not spam errors every frame.
#[derive(Debug)]
pub struct DebugLog {
    path: Option<PathBuf>,
    failed: AtomicBool,
}

impl DebugLog {
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            path: config.log_path.clone(),
            failed: AtomicBool::new(false),
        }
    }

    pub fn disabled() -> Self {
        Self {
            path: None,
            failed: AtomicBool::new(false),
        }
    }

    pub fn note(&self, message: &str) {
        if self.failed.load(Ordering::Relaxed) {
            return;
        }
        let Some(path) = &self.path else {
            return;
        };
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| {
                writeln!(
                    file,
                    "[{}.{:03}] {message}",
                    elapsed.as_secs(),
                    elapsed.subsec_millis()
                )
            });
        if result.is_err() {
            self.failed.store(true, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    #[test]
    fn notes_are_appended_with_timestamps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.log");
        let log = DebugLog {
            path: Some(path.clone()),
            failed: AtomicBool::new(false),
        };

        log.note("first");
        log.note("second");

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("first"));
        assert!(lines[1].ends_with("second"));
    }

    #[test]
    fn disabled_log_writes_nothing() {
        let log = DebugLog::disabled();
        log.note("ignored");
    }

    #[test]
    fn failed_write_latches_off() {
        let dir = tempfile::tempdir().unwrap();
        let log = DebugLog {
            path: Some(dir.path().join("missing").join("debug.log")),
            failed: AtomicBool::new(false),
        };

        log.note("first attempt");
        assert!(log.failed.load(Ordering::Relaxed));
        log.note("second attempt");
    }
}
