use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("I/O error while {operation} at {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading line {line} in {path}: {source}")]
    IoLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON at {path}:{line}: {source}")]
    JsonLineParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing profile header line in {path}")]
    MissingHeader { path: PathBuf },

    #[error("line {line} in {path} must be a profile header record")]
    InvalidHeaderRecord { path: PathBuf, line: usize },

    #[error("line {line} in {path} has unsupported profile version {found}; expected 1")]
    UnsupportedVersion {
        path: PathBuf,
        line: usize,
        found: u32,
    },

    #[error("line {line} in {path} must be an account record")]
    InvalidAccountRecord { path: PathBuf, line: usize },

    #[error("line {line} in {path} contains a duplicate account id '{id}'")]
    DuplicateAccountId {
        path: PathBuf,
        line: usize,
        id: String,
    },

    #[error("line {line} in {path} contains a duplicate username '{username}'")]
    DuplicateUsername {
        path: PathBuf,
        line: usize,
        username: String,
    },

    #[error("line {line} in {path} contains a duplicate email '{email}'")]
    DuplicateEmail {
        path: PathBuf,
        line: usize,
        email: String,
    },

    #[error("line {line} in {path} has invalid RFC3339 timestamp in field '{field}': {value}")]
    InvalidTimestamp {
        path: PathBuf,
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("failed to serialize profile line for {path}: {source}")]
    JsonSerialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to format current UTC timestamp as RFC3339: {0}")]
    ClockFormat(#[source] time::error::Format),
}

impl ProfileStoreError {
    #[must_use]
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn io_line(path: impl Into<PathBuf>, line: usize, source: std::io::Error) -> Self {
        Self::IoLine {
            path: path.into(),
            line,
            source,
        }
    }

    #[must_use]
    pub fn json_line(path: impl Into<PathBuf>, line: usize, source: serde_json::Error) -> Self {
        Self::JsonLineParse {
            path: path.into(),
            line,
            source,
        }
    }

    #[must_use]
    pub fn json_serialize(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::JsonSerialize {
            path: path.into(),
            source,
        }
    }
}

/// User-visible rejection raised by registration and login.
///
/// The display strings are the exact inline messages the screens render;
/// storage failures wrap their cause but keep the generic user-facing text.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Username and password required")]
    MissingCredentials,

    #[error("Username must be at least 3 characters")]
    UsernameTooShort,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Email already registered")]
    EmailTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Error creating account")]
    WriteAccount(#[source] ProfileStoreError),

    #[error("Error during login")]
    WriteSession(#[source] ProfileStoreError),
}
