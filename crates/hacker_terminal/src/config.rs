use std::env;
use std::path::PathBuf;

pub const HOME_ENV_VAR: &str = "HACKER_TERMINAL_HOME";
pub const LOG_ENV_VAR: &str = "HACKER_TERMINAL_LOG";
pub const NO_COLOR_ENV_VAR: &str = "HACKER_TERMINAL_NO_COLOR";
pub const NO_SOUND_ENV_VAR: &str = "HACKER_TERMINAL_NO_SOUND";

/// Process-level toggles resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub home_override: Option<PathBuf>,
    pub log_path: Option<PathBuf>,
    pub no_color: bool,
    pub no_sound: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            home_override: env_path(HOME_ENV_VAR),
            log_path: env_path(LOG_ENV_VAR),
            no_color: env_flag(NO_COLOR_ENV_VAR),
            no_sound: env_flag(NO_SOUND_ENV_VAR),
        }
    }

    /// Directory under which the profile data directory is created.
    pub fn profile_base(&self) -> PathBuf {
        if let Some(path) = &self.home_override {
            return path.clone();
        }
        env_path("HOME").unwrap_or_else(|| PathBuf::from("."))
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_path(key: &str) -> Option<PathBuf> {
    let value = env::var(key).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}
