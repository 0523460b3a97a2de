//! Persisted profile state: registered accounts, the login session, and
//! interface preferences.
//!
//! The accounts file is line-delimited JSON with a versioned header line and
//! is parsed strictly; the service layer on top reads leniently, treating any
//! storage failure as "no saved state".

mod error;
mod paths;
mod schema;
mod store;

pub use error::{AuthError, ProfileStoreError};
pub use paths::{
    accounts_path, preferences_path, profile_root, session_path, ACCOUNTS_FILE, PREFERENCES_FILE,
    PROFILE_DIR, SESSION_FILE,
};
pub use schema::{
    AccountRecord, AccountRecordType, Language, Preferences, ProfileHeader, ProfileRecordType,
    ThemeName,
};
pub use store::{append_account, read_accounts, rewrite_accounts, AccountStore, PreferenceStore};
