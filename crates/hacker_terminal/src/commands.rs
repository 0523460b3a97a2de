//! Parsing of typed input into application commands.

use command_catalog::CommandKind;

/// Everything the user can type at the prompt, across all screens.
///
/// Parsing is screen-agnostic; the application decides which commands are
/// valid on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Login { username: String, password: String },
    SignupForm,
    Signup {
        username: String,
        email: String,
        password: String,
        confirm: String,
    },
    /// Play a command's console script on the terminal screen.
    Run(CommandKind),
    /// Open a command's detail screen without starting anything.
    Open(CommandKind),
    /// Start the detail screen's own action.
    Start,
    /// Trace a specific IP, or the default target when none is given.
    Trace { ip: Option<String> },
    /// Run a database query, raw text preserved.
    Query { sql: Option<String> },
    Cancel,
    Back,
    Settings,
    SetLanguage(String),
    SetTheme(String),
    Logout,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

impl AppCommand {
    /// Keyword to echo back in rejection messages.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::SignupForm | Self::Signup { .. } => "signup",
            Self::Run(kind) => kind.id(),
            Self::Open(_) => "open",
            Self::Start => "start",
            Self::Trace { .. } => "trace",
            Self::Query { .. } => "query",
            Self::Cancel => "cancel",
            Self::Back => "back",
            Self::Settings => "settings",
            Self::SetLanguage(_) => "lang",
            Self::SetTheme(_) => "theme",
            Self::Logout => "logout",
            Self::Clear => "clear",
            Self::Help => "help",
            Self::Quit => "quit",
            Self::Unknown(_) => "unknown",
        }
    }
}

pub fn parse_command(input: &str) -> Option<AppCommand> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };
    let keyword = head.to_ascii_lowercase();

    let command = match keyword.as_str() {
        "login" => {
            let mut words = rest.split_whitespace();
            AppCommand::Login {
                username: words.next().unwrap_or_default().to_string(),
                password: words.next().unwrap_or_default().to_string(),
            }
        }
        "signup" => {
            if rest.is_empty() {
                AppCommand::SignupForm
            } else {
                let mut words = rest.split_whitespace();
                AppCommand::Signup {
                    username: words.next().unwrap_or_default().to_string(),
                    email: words.next().unwrap_or_default().to_string(),
                    password: words.next().unwrap_or_default().to_string(),
                    confirm: words.next().unwrap_or_default().to_string(),
                }
            }
        }
        // `trace` doubles as a console command and as the lookup action; an
        // argument means the user wants the targeted lookup.
        "trace" => {
            if rest.is_empty() {
                AppCommand::Run(CommandKind::Trace)
            } else {
                AppCommand::Trace {
                    ip: rest.split_whitespace().next().map(str::to_string),
                }
            }
        }
        "query" => AppCommand::Query {
            sql: if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            },
        },
        "open" => match rest.split_whitespace().next().and_then(CommandKind::from_id) {
            Some(kind) => AppCommand::Open(kind),
            None => AppCommand::Unknown(trimmed.to_string()),
        },
        "start" => AppCommand::Start,
        "cancel" => AppCommand::Cancel,
        "back" => AppCommand::Back,
        "settings" => AppCommand::Settings,
        "lang" | "language" => match rest.split_whitespace().next() {
            Some(code) => AppCommand::SetLanguage(code.to_ascii_lowercase()),
            None => AppCommand::Unknown(trimmed.to_string()),
        },
        "theme" => match rest.split_whitespace().next() {
            Some(code) => AppCommand::SetTheme(code.to_ascii_lowercase()),
            None => AppCommand::Unknown(trimmed.to_string()),
        },
        "logout" => AppCommand::Logout,
        "clear" => AppCommand::Clear,
        "help" | "?" => AppCommand::Help,
        "quit" | "exit" => AppCommand::Quit,
        other => match CommandKind::from_id(other) {
            Some(kind) => AppCommand::Run(kind),
            None => AppCommand::Unknown(head.to_string()),
        },
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_parses_to_nothing() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn login_collects_username_and_password() {
        assert_eq!(
            parse_command("login neo s3cret"),
            Some(AppCommand::Login {
                username: "neo".to_string(),
                password: "s3cret".to_string(),
            })
        );
        assert_eq!(
            parse_command("login neo"),
            Some(AppCommand::Login {
                username: "neo".to_string(),
                password: String::new(),
            })
        );
    }

    #[test]
    fn bare_signup_opens_the_form() {
        assert_eq!(parse_command("signup"), Some(AppCommand::SignupForm));
    }

    #[test]
    fn signup_with_arguments_fills_every_field() {
        assert_eq!(
            parse_command("signup neo neo@zion.net pass pass"),
            Some(AppCommand::Signup {
                username: "neo".to_string(),
                email: "neo@zion.net".to_string(),
                password: "pass".to_string(),
                confirm: "pass".to_string(),
            })
        );
    }

    #[test]
    fn command_ids_parse_to_run() {
        assert_eq!(parse_command("scan"), Some(AppCommand::Run(CommandKind::Scan)));
        assert_eq!(parse_command("sysinfo"), Some(AppCommand::Run(CommandKind::Sysinfo)));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(parse_command("SCAN"), Some(AppCommand::Run(CommandKind::Scan)));
        assert_eq!(parse_command("Quit"), Some(AppCommand::Quit));
    }

    #[test]
    fn bare_trace_runs_the_console_script() {
        assert_eq!(parse_command("trace"), Some(AppCommand::Run(CommandKind::Trace)));
    }

    #[test]
    fn trace_with_an_argument_targets_the_lookup() {
        assert_eq!(
            parse_command("trace 10.0.0.7"),
            Some(AppCommand::Trace {
                ip: Some("10.0.0.7".to_string()),
            })
        );
    }

    #[test]
    fn query_preserves_sql_spacing() {
        assert_eq!(
            parse_command("query SELECT * FROM users"),
            Some(AppCommand::Query {
                sql: Some("SELECT * FROM users".to_string()),
            })
        );
        assert_eq!(parse_command("query"), Some(AppCommand::Query { sql: None }));
    }

    #[test]
    fn open_requires_a_known_command_id() {
        assert_eq!(parse_command("open firewall"), Some(AppCommand::Open(CommandKind::Firewall)));
        assert_eq!(
            parse_command("open mainframe"),
            Some(AppCommand::Unknown("open mainframe".to_string()))
        );
    }

    #[test]
    fn lang_and_theme_require_an_argument() {
        assert_eq!(parse_command("lang es"), Some(AppCommand::SetLanguage("es".to_string())));
        assert_eq!(parse_command("language EN"), Some(AppCommand::SetLanguage("en".to_string())));
        assert_eq!(parse_command("theme red"), Some(AppCommand::SetTheme("red".to_string())));
        assert_eq!(
            parse_command("lang"),
            Some(AppCommand::Unknown("lang".to_string()))
        );
    }

    #[test]
    fn unknown_words_are_reported_verbatim() {
        assert_eq!(
            parse_command("frobnicate the mainframe"),
            Some(AppCommand::Unknown("frobnicate".to_string()))
        );
    }
}
