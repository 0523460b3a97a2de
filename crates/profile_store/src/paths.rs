use std::path::{Path, PathBuf};

pub const PROFILE_DIR: &str = ".hacker_terminal";

pub const ACCOUNTS_FILE: &str = "accounts.jsonl";
pub const SESSION_FILE: &str = "session.json";
pub const PREFERENCES_FILE: &str = "preferences.json";

#[must_use]
pub fn profile_root(base: &Path) -> PathBuf {
    base.join(PROFILE_DIR)
}

#[must_use]
pub fn accounts_path(root: &Path) -> PathBuf {
    root.join(ACCOUNTS_FILE)
}

#[must_use]
pub fn session_path(root: &Path) -> PathBuf {
    root.join(SESSION_FILE)
}

#[must_use]
pub fn preferences_path(root: &Path) -> PathBuf {
    root.join(PREFERENCES_FILE)
}
