use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileRecordType {
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountRecordType {
    Account,
}

/// First line of the accounts file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileHeader {
    #[serde(rename = "type")]
    pub record_type: ProfileRecordType,
    pub version: u32,
    pub created_at: String,
}

impl ProfileHeader {
    #[must_use]
    pub fn v1(created_at: impl Into<String>) -> Self {
        Self {
            record_type: ProfileRecordType::Profile,
            version: 1,
            created_at: created_at.into(),
        }
    }
}

/// One registered account.
///
/// The password is stored verbatim: these accounts are a local simulation
/// with no security value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountRecord {
    #[serde(rename = "type")]
    pub record_type: AccountRecordType,
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: String,
}

impl AccountRecord {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            record_type: AccountRecordType::Account,
            id: id.into(),
            username: username.into(),
            email: email.into(),
            password: password.into(),
            created_at: created_at.into(),
        }
    }
}

/// One parsed line of the accounts file. Untagged so each record keeps its
/// own `type` field; the closed record-type enums make the variants
/// unambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub(crate) enum JsonLine {
    Profile(ProfileHeader),
    Account(AccountRecord),
}

/// Closed set of interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    En,
    Es,
}

impl Default for Language {
    fn default() -> Self {
        Self::Pt
    }
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Pt, Language::En, Language::Es];

    /// Persisted identifier for this language.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
            Self::Es => "es",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" => Some(Self::Pt),
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }
}

/// Closed set of color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Green,
    Cyan,
    Purple,
    Red,
}

impl Default for ThemeName {
    fn default() -> Self {
        Self::Green
    }
}

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Green,
        ThemeName::Cyan,
        ThemeName::Purple,
        ThemeName::Red,
    ];

    /// Persisted identifier for this theme.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Red => "red",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "green" => Some(Self::Green),
            "cyan" => Some(Self::Cyan),
            "purple" => Some(Self::Purple),
            "red" => Some(Self::Red),
            _ => None,
        }
    }
}

/// Persisted interface preferences.
///
/// Fields default individually so an older document missing a key still
/// loads; an unparseable document falls back to all defaults at the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: ThemeName,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: ThemeName::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AccountRecord, Language, Preferences, ProfileHeader, ThemeName};

    #[test]
    fn account_record_serializes_with_type_tag() {
        let record = AccountRecord::new(
            "id-1",
            "admin",
            "admin@system.local",
            "secret",
            "2026-02-14T00:00:00Z",
        );
        let json = serde_json::to_value(&record).expect("record should serialize");

        assert_eq!(json["type"], "account");
        assert_eq!(json["username"], "admin");
    }

    #[test]
    fn header_constructor_pins_version_one() {
        let header = ProfileHeader::v1("2026-02-14T00:00:00Z");
        assert_eq!(header.version, 1);
    }

    #[test]
    fn language_and_theme_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()), Some(language));
        }
        for theme in ThemeName::ALL {
            assert_eq!(ThemeName::from_code(theme.code()), Some(theme));
        }
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(ThemeName::from_code("blue"), None);
    }

    #[test]
    fn preferences_tolerate_missing_fields() {
        let partial: Preferences =
            serde_json::from_str(r#"{"theme":"purple"}"#).expect("partial document should load");

        assert_eq!(partial.language, Language::Pt);
        assert_eq!(partial.theme, ThemeName::Purple);
    }

    #[test]
    fn preferences_serialize_with_lowercase_codes() {
        let prefs = Preferences {
            language: Language::Es,
            theme: ThemeName::Cyan,
        };
        let json = serde_json::to_value(prefs).expect("preferences should serialize");

        assert_eq!(json["language"], "es");
        assert_eq!(json["theme"], "cyan");
    }
}
