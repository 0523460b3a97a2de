use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::{AuthError, ProfileStoreError};
use crate::paths::{accounts_path, preferences_path, session_path};
use crate::schema::{AccountRecord, JsonLine, Preferences, ProfileHeader};

const USERNAME_MIN_CHARS: usize = 3;
const PASSWORD_MIN_CHARS: usize = 6;

/// Registered-account service over one profile directory.
///
/// Reads are lenient: any storage failure behaves as "no saved accounts".
/// Writes surface through [`AuthError`] with the generic user-facing text.
#[derive(Debug, Clone)]
pub struct AccountStore {
    root: PathBuf,
}

impl AccountStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All registered accounts; empty when the file is missing or unreadable.
    #[must_use]
    pub fn accounts(&self) -> Vec<AccountRecord> {
        read_accounts(&accounts_path(&self.root)).unwrap_or_default()
    }

    /// Validates and persists a new account.
    ///
    /// Validation follows the fixed message order: missing fields, username
    /// length, password length, email format, duplicate username, duplicate
    /// email. Registration does not log the account in.
    pub fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AccountRecord, AuthError> {
        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        if username.chars().count() < USERNAME_MIN_CHARS {
            return Err(AuthError::UsernameTooShort);
        }
        if password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(AuthError::PasswordTooShort);
        }
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail);
        }

        let path = accounts_path(&self.root);
        let existing = read_accounts(&path).ok();

        if let Some(existing) = &existing {
            if existing.iter().any(|account| account.username == username) {
                return Err(AuthError::UsernameTaken);
            }
            if existing.iter().any(|account| account.email == email) {
                return Err(AuthError::EmailTaken);
            }
        }

        let created_at = now_utc_rfc3339().map_err(AuthError::WriteAccount)?;
        let record = AccountRecord::new(
            uuid::Uuid::new_v4().to_string(),
            username,
            email,
            password,
            created_at,
        );

        match existing {
            // A readable file is extended in place.
            Some(_) => append_account(&path, &record).map_err(AuthError::WriteAccount)?,
            // A missing or unreadable file is replaced wholesale, which is
            // how a corrupted store recovers.
            None => rewrite_accounts(&path, std::slice::from_ref(&record))
                .map_err(AuthError::WriteAccount)?,
        }

        Ok(record)
    }

    /// Checks credentials and persists the session on success.
    pub fn login(&self, username: &str, password: &str) -> Result<AccountRecord, AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let account = self
            .accounts()
            .into_iter()
            .find(|account| account.username == username && account.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        write_session(&session_path(&self.root), &account).map_err(AuthError::WriteSession)?;

        Ok(account)
    }

    /// The logged-in account; `None` covers both "logged out" and any
    /// storage failure.
    #[must_use]
    pub fn current_user(&self) -> Option<AccountRecord> {
        let raw = std::fs::read_to_string(session_path(&self.root)).ok()?;
        serde_json::from_str(&raw).ok()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Clears the persisted session; failures are swallowed.
    pub fn logout(&self) {
        let _ = std::fs::remove_file(session_path(&self.root));
    }
}

/// Preference service over the same profile directory.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    root: PathBuf,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Loaded preferences, or defaults when missing or unreadable.
    #[must_use]
    pub fn load(&self) -> Preferences {
        std::fs::read_to_string(preferences_path(&self.root))
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(&self, preferences: &Preferences) -> Result<(), ProfileStoreError> {
        let path = preferences_path(&self.root);
        ensure_parent_dir(&path)?;

        let body = serde_json::to_string(preferences)
            .map_err(|source| ProfileStoreError::json_serialize(&path, source))?;
        std::fs::write(&path, body)
            .map_err(|source| ProfileStoreError::io("writing preferences file", &path, source))
    }

    pub fn set_language(
        &self,
        language: crate::schema::Language,
    ) -> Result<(), ProfileStoreError> {
        let mut preferences = self.load();
        preferences.language = language;
        self.save(&preferences)
    }

    pub fn set_theme(&self, theme: crate::schema::ThemeName) -> Result<(), ProfileStoreError> {
        let mut preferences = self.load();
        preferences.theme = theme;
        self.save(&preferences)
    }
}

/// Strict line-validated read of the accounts file.
pub fn read_accounts(path: &Path) -> Result<Vec<AccountRecord>, ProfileStoreError> {
    let read_file = File::open(path)
        .map_err(|source| ProfileStoreError::io("opening accounts file", path, source))?;
    let reader = BufReader::new(read_file);

    let mut header: Option<ProfileHeader> = None;
    let mut accounts: Vec<AccountRecord> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    let mut seen_usernames: HashSet<String> = HashSet::new();
    let mut seen_emails: HashSet<String> = HashSet::new();

    for (line_index, line_result) in reader.lines().enumerate() {
        let line_number = line_index + 1;
        let line = line_result
            .map_err(|source| ProfileStoreError::io_line(path, line_number, source))?;
        let parsed = parse_json_line(path, line_number, &line)?;

        if line_number == 1 {
            match parsed {
                JsonLine::Profile(parsed_header) => {
                    validate_header_line(path, line_number, &parsed_header)?;
                    header = Some(parsed_header);
                }
                JsonLine::Account(_) => {
                    return Err(ProfileStoreError::InvalidHeaderRecord {
                        path: path.to_path_buf(),
                        line: line_number,
                    });
                }
            }

            continue;
        }

        match parsed {
            JsonLine::Profile(_) => {
                return Err(ProfileStoreError::InvalidAccountRecord {
                    path: path.to_path_buf(),
                    line: line_number,
                });
            }
            JsonLine::Account(record) => {
                validate_rfc3339(path, line_number, "created_at", &record.created_at)?;

                if !seen_ids.insert(record.id.clone()) {
                    return Err(ProfileStoreError::DuplicateAccountId {
                        path: path.to_path_buf(),
                        line: line_number,
                        id: record.id,
                    });
                }
                if !seen_usernames.insert(record.username.clone()) {
                    return Err(ProfileStoreError::DuplicateUsername {
                        path: path.to_path_buf(),
                        line: line_number,
                        username: record.username,
                    });
                }
                if !seen_emails.insert(record.email.clone()) {
                    return Err(ProfileStoreError::DuplicateEmail {
                        path: path.to_path_buf(),
                        line: line_number,
                        email: record.email,
                    });
                }

                accounts.push(record);
            }
        }
    }

    if header.is_none() {
        return Err(ProfileStoreError::MissingHeader {
            path: path.to_path_buf(),
        });
    }

    Ok(accounts)
}

/// Appends one record to an existing accounts file, creating it (with a
/// fresh header line) when absent.
pub fn append_account(path: &Path, record: &AccountRecord) -> Result<(), ProfileStoreError> {
    if !path.exists() {
        return rewrite_accounts(path, std::slice::from_ref(record));
    }

    let line = serialize_line(path, record)?;
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|source| {
            ProfileStoreError::io("opening accounts file for append", path, source)
        })?;
    writeln!(file, "{line}")
        .map_err(|source| ProfileStoreError::io("appending account record", path, source))
}

/// Replaces the accounts file with a fresh header plus the given records.
pub fn rewrite_accounts(path: &Path, records: &[AccountRecord]) -> Result<(), ProfileStoreError> {
    ensure_parent_dir(path)?;

    let header = ProfileHeader::v1(now_utc_rfc3339()?);
    let mut body = serde_json::to_string(&header)
        .map_err(|source| ProfileStoreError::json_serialize(path, source))?;
    body.push('\n');

    for record in records {
        body.push_str(&serialize_line(path, record)?);
        body.push('\n');
    }

    std::fs::write(path, body)
        .map_err(|source| ProfileStoreError::io("writing accounts file", path, source))
}

fn write_session(path: &Path, record: &AccountRecord) -> Result<(), ProfileStoreError> {
    ensure_parent_dir(path)?;

    let body = serde_json::to_string(record)
        .map_err(|source| ProfileStoreError::json_serialize(path, source))?;
    std::fs::write(path, body)
        .map_err(|source| ProfileStoreError::io("writing session file", path, source))
}

fn ensure_parent_dir(path: &Path) -> Result<(), ProfileStoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| {
            ProfileStoreError::io("creating profile directory", parent, source)
        })?;
    }

    Ok(())
}

fn serialize_line(path: &Path, record: &AccountRecord) -> Result<String, ProfileStoreError> {
    serde_json::to_string(record)
        .map_err(|source| ProfileStoreError::json_serialize(path, source))
}

fn parse_json_line(
    path: &Path,
    line_number: usize,
    line: &str,
) -> Result<JsonLine, ProfileStoreError> {
    serde_json::from_str::<JsonLine>(line)
        .map_err(|source| ProfileStoreError::json_line(path, line_number, source))
}

fn validate_header_line(
    path: &Path,
    line_number: usize,
    header: &ProfileHeader,
) -> Result<(), ProfileStoreError> {
    if header.version != 1 {
        return Err(ProfileStoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            line: line_number,
            found: header.version,
        });
    }

    validate_rfc3339(path, line_number, "created_at", &header.created_at)
}

fn validate_rfc3339(
    path: &Path,
    line_number: usize,
    field: &'static str,
    value: &str,
) -> Result<(), ProfileStoreError> {
    if OffsetDateTime::parse(value, &Rfc3339).is_err() {
        return Err(ProfileStoreError::InvalidTimestamp {
            path: path.to_path_buf(),
            line: line_number,
            field,
            value: value.to_string(),
        });
    }

    Ok(())
}

fn now_utc_rfc3339() -> Result<String, ProfileStoreError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(ProfileStoreError::ClockFormat)
}

/// Matches the registration form's email shape: one `@`, a non-empty local
/// part, and a domain with a dot that has characters on both sides. No
/// whitespace anywhere.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn email_shape_matches_the_registration_form() {
        assert!(is_valid_email("admin@system.local"));
        assert!(is_valid_email("user.name@sub.domain.dev"));

        assert!(!is_valid_email("adminsystem.local"));
        assert!(!is_valid_email("admin@systemlocal"));
        assert!(!is_valid_email("@system.local"));
        assert!(!is_valid_email("admin@"));
        assert!(!is_valid_email("admin@system."));
        assert!(!is_valid_email("admin@.local"));
        assert!(!is_valid_email("ad min@system.local"));
        assert!(!is_valid_email("admin@system@local.dev"));
    }
}
