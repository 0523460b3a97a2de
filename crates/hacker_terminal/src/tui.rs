//! Plain-text screen renderer.
//!
//! Every screen renders to a `Vec<String>` of styled lines; the main loop
//! decides how to put them on the terminal. Styling is 24-bit SGR through
//! [`Styler`], which degrades to pass-through when colour is disabled, so
//! piped output stays clean.

use command_catalog::{
    CommandKind, ThreatLevel, DATABASE_ROWS, FIREWALL_LAYERS, SCAN_DEVICES, SYSTEM_REPORT,
};
use playback_engine::{Severity, TaskStatus};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, DetailState, Notice, Screen};
use crate::i18n::{self, Strings};
use crate::theme::{Palette, Rgb};

const MIN_WIDTH: usize = 10;
const COMMAND_ID_COLUMN: usize = 10;
const COMMAND_TITLE_COLUMN: usize = 26;
const STATUS_COLUMN: usize = 16;
const DETAIL_BAR_WIDTH: usize = 30;
const FILE_BAR_WIDTH: usize = 20;

/// Applies one screen's palette to text fragments.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    palette: &'static Palette,
    color_enabled: bool,
}

impl Styler {
    pub fn new(palette: &'static Palette, color_enabled: bool) -> Self {
        Self {
            palette,
            color_enabled,
        }
    }

    fn wrap(&self, text: &str, colour: Rgb) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        ansi_wrap(
            text,
            &format!("\x1b[38;2;{};{};{}m", colour.0, colour.1, colour.2),
            "\x1b[39m",
        )
    }

    pub fn primary(&self, text: &str) -> String {
        self.wrap(text, self.palette.primary)
    }

    pub fn secondary(&self, text: &str) -> String {
        self.wrap(text, self.palette.secondary)
    }

    pub fn muted(&self, text: &str) -> String {
        self.wrap(text, self.palette.muted)
    }

    pub fn success(&self, text: &str) -> String {
        self.wrap(text, self.palette.success)
    }

    pub fn warning(&self, text: &str) -> String {
        self.wrap(text, self.palette.warning)
    }

    pub fn error(&self, text: &str) -> String {
        self.wrap(text, self.palette.error)
    }

    /// Paints with an explicit colour, used by the theme sample rows.
    pub fn paint(&self, text: &str, colour: Rgb) -> String {
        self.wrap(text, colour)
    }

    pub fn bold(&self, text: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        ansi_wrap(text, "\x1b[1m", "\x1b[22m")
    }

    pub fn dim(&self, text: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        ansi_wrap(text, "\x1b[2m", "\x1b[22m")
    }

    /// Colours a console line by its severity prefix.
    pub fn console_line(&self, line: &str) -> String {
        match Severity::of(line) {
            Severity::Success => self.success(line),
            Severity::Warning => self.warning(line),
            Severity::Error => self.error(line),
            Severity::Normal => self.primary(line),
        }
    }
}

fn ansi_wrap(text: &str, prefix: &str, suffix: &str) -> String {
    let mut wrapped = String::with_capacity(prefix.len() + text.len() + suffix.len());
    wrapped.push_str(prefix);
    wrapped.push_str(text);
    wrapped.push_str(suffix);
    wrapped
}

/// Removes CSI escape sequences, leaving printable text.
pub fn strip_ansi(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut plain = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        if bytes[index] == 0x1b && index + 1 < bytes.len() && bytes[index + 1] == b'[' {
            index += 2;
            while index < bytes.len() && !(b'@'..=b'~').contains(&bytes[index]) {
                index += 1;
            }
            index += 1;
            continue;
        }
        plain.push(bytes[index]);
        index += 1;
    }
    String::from_utf8_lossy(&plain).into_owned()
}

/// Display width of the visible portion of a styled string.
pub fn visible_text_width(text: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(text).as_str())
}

/// Pads with trailing spaces until the visible width reaches `target`.
fn pad_visible(text: &str, target: usize) -> String {
    let width = visible_text_width(text);
    let mut padded = text.to_string();
    for _ in width..target {
        padded.push(' ');
    }
    padded
}

fn separator_line(styler: &Styler, width: usize) -> String {
    styler.dim(&"─".repeat(width.max(MIN_WIDTH)))
}

/// Fixed-width bar with a right-aligned percentage, e.g. `███░░░░  43%`.
fn progress_bar(progress: f64, width: usize, styler: &Styler) -> String {
    let clamped = progress.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    format!("{} {:>3.0}%", styler.primary(&bar), clamped)
}

/// Renders the active screen plus the trailing notice line.
pub fn render_screen(app: &App, styler: &Styler, width: usize) -> Vec<String> {
    let strings = i18n::strings(app.prefs.language);
    let mut lines = match app.screen {
        Screen::Login => render_login(strings, styler, width),
        Screen::Signup => render_signup(strings, styler, width),
        Screen::Terminal => render_terminal(app, strings, styler, width),
        Screen::Settings => render_settings(app, strings, styler, width),
        Screen::Detail(kind) => render_detail(app, kind, strings, styler, width),
    };
    match &app.notice {
        Some(Notice::Error(text)) => lines.push(styler.error(&format!("! {text}"))),
        Some(Notice::Success(text)) => lines.push(styler.success(&format!("* {text}"))),
        Some(Notice::Info(text)) => lines.push(styler.secondary(&format!("* {text}"))),
        None => {}
    }
    lines
}

fn command_row(styler: &Styler, usage: &str, label: &str) -> String {
    format!(
        "  {}{}",
        pad_visible(&styler.primary(usage), 36),
        styler.muted(label)
    )
}

fn render_login(strings: &Strings, styler: &Styler, width: usize) -> Vec<String> {
    vec![
        styler.bold(&styler.primary(strings.login_title)),
        styler.muted(strings.login_subtitle),
        separator_line(styler, width),
        command_row(
            styler,
            &format!("login <{}> <{}>", strings.login_username, strings.login_password),
            strings.login_button,
        ),
        command_row(
            styler,
            "signup",
            &format!(
                "{} {}",
                strings.login_new_to_network, strings.login_create_account
            ),
        ),
        separator_line(styler, width),
        styler.warning(strings.login_unauthorized),
        styler.warning(strings.login_monitored),
    ]
}

fn render_signup(strings: &Strings, styler: &Styler, width: usize) -> Vec<String> {
    vec![
        styler.bold(&styler.primary(strings.signup_title)),
        styler.muted(strings.signup_subtitle),
        separator_line(styler, width),
        command_row(
            styler,
            &format!(
                "signup <{}> <{}> <{}> <{}>",
                strings.signup_username,
                strings.signup_email,
                strings.signup_password,
                strings.signup_confirm_password
            ),
            strings.signup_button,
        ),
        command_row(
            styler,
            "login",
            &format!(
                "{} {}",
                strings.signup_already_have_account, strings.signup_login_here
            ),
        ),
        separator_line(styler, width),
    ]
}

fn render_terminal(app: &App, strings: &Strings, styler: &Styler, width: usize) -> Vec<String> {
    let username = app
        .session
        .as_ref()
        .map(|record| record.username.as_str())
        .unwrap_or("ghost");
    let mut lines = vec![
        format!(
            "{}  {}",
            styler.bold(&styler.primary(&format!("{username}@hacker:~$"))),
            styler.muted(&format!("[logout = {}]", strings.terminal_logout)),
        ),
        separator_line(styler, width),
        styler.secondary(strings.terminal_available_commands),
    ];
    for slot in app.commands() {
        let title = i18n::command_title(app.prefs.language, slot.kind);
        let description = i18n::command_description(app.prefs.language, slot.kind);
        let status = render_status_tag(slot.status, strings, styler);
        lines.push(format!(
            "  {} {}{}{}{}",
            slot.kind.icon(),
            pad_visible(&styler.primary(slot.kind.id()), COMMAND_ID_COLUMN),
            pad_visible(&styler.secondary(title), COMMAND_TITLE_COLUMN),
            pad_visible(&status, STATUS_COLUMN),
            styler.muted(description),
        ));
    }
    lines.push(separator_line(styler, width));
    lines.push(styler.secondary(strings.terminal_console_output));
    for line in app.console.iter() {
        lines.push(format!("  {}", styler.console_line(line)));
    }
    lines
}

fn render_status_tag(status: TaskStatus, strings: &Strings, styler: &Styler) -> String {
    let tag = match status {
        TaskStatus::Ready => strings.status_ready,
        TaskStatus::Running => strings.status_running,
        TaskStatus::Complete => strings.status_complete,
    };
    let bracketed = format!("[{tag}]");
    match status {
        TaskStatus::Ready => styler.muted(&bracketed),
        TaskStatus::Running => styler.warning(&bracketed),
        TaskStatus::Complete => styler.success(&bracketed),
    }
}

fn render_settings(app: &App, strings: &Strings, styler: &Styler, width: usize) -> Vec<String> {
    let mut lines = vec![
        styler.bold(&styler.primary(strings.settings_title)),
        separator_line(styler, width),
        styler.secondary(strings.settings_language),
    ];
    for language in profile_store::Language::ALL {
        let marker = if language == app.prefs.language { ">" } else { " " };
        lines.push(format!(
            "  {marker} {}  {}",
            pad_visible(&styler.primary(&format!("lang {}", language.code())), 12),
            styler.muted(i18n::language_label(app.prefs.language, language)),
        ));
    }
    lines.push(styler.secondary(strings.settings_theme));
    for theme in profile_store::ThemeName::ALL {
        let marker = if theme == app.prefs.theme { ">" } else { " " };
        let sample = crate::theme::palette(theme).primary;
        lines.push(format!(
            "  {marker} {}  {}",
            pad_visible(&styler.primary(&format!("theme {}", theme.code())), 14),
            styler.paint(i18n::theme_label(app.prefs.language, theme), sample),
        ));
    }
    lines.push(separator_line(styler, width));
    lines.push(styler.muted("back | logout | quit"));
    lines
}

fn render_detail(
    app: &App,
    kind: CommandKind,
    strings: &Strings,
    styler: &Styler,
    width: usize,
) -> Vec<String> {
    let title = i18n::command_title(app.prefs.language, kind);
    let description = i18n::command_description(app.prefs.language, kind);
    let mut lines = vec![
        format!(
            "{} {}  {}",
            kind.icon(),
            styler.bold(&styler.primary(title)),
            styler.muted(description),
        ),
        separator_line(styler, width),
    ];
    match &app.detail {
        Some(DetailState::Scan { sweep, run }) => {
            if sweep.is_done() {
                for device in &SCAN_DEVICES {
                    let status = if device.online {
                        styler.success(strings.status_online)
                    } else {
                        styler.error(strings.status_offline)
                    };
                    lines.push(format!(
                        "  {}{}{}{}{status}",
                        pad_visible(&styler.primary(device.ip), 16),
                        pad_visible(&styler.secondary(device.name), 14),
                        pad_visible(&styler.muted(device.kind), 10),
                        pad_visible(&format!("{:>3}%", device.signal), 6),
                    ));
                }
                lines.push(styler.success(strings.status_complete));
            } else {
                lines.push(format!(
                    "  {}",
                    progress_bar(sweep.progress(), DETAIL_BAR_WIDTH, styler)
                ));
                if run.is_some() {
                    lines.push(styler.warning(strings.status_connecting));
                } else {
                    lines.push(styler.muted(strings.status_ready));
                }
            }
        }
        Some(DetailState::Decrypt { files, runs }) => {
            for (index, subtask) in files.subtasks().iter().enumerate() {
                let size = command_catalog::ENCRYPTED_FILES[index].size;
                let tag = if subtask.is_done() {
                    styler.success(strings.status_complete)
                } else if runs.is_empty() {
                    styler.muted(strings.status_ready)
                } else {
                    styler.warning(strings.status_running)
                };
                lines.push(format!(
                    "  {}{}{} {tag}",
                    pad_visible(&styler.primary(subtask.name()), 20),
                    pad_visible(&styler.muted(size), 10),
                    progress_bar(subtask.progress(), FILE_BAR_WIDTH, styler),
                ));
            }
            lines.push(separator_line(styler, width));
            lines.push(format!(
                "  {}",
                progress_bar(files.overall(), DETAIL_BAR_WIDTH, styler)
            ));
            if files.all_done() {
                lines.push(styler.success(strings.status_complete));
            }
        }
        Some(DetailState::Firewall { layers, run }) => {
            for (index, layer) in FIREWALL_LAYERS.iter().enumerate() {
                let breached = index < layers.breached();
                let current = run.is_some() && index == layers.breached();
                let (marker, name) = if breached {
                    ("✔", styler.success(layer.name))
                } else if current {
                    ("➤", styler.warning(layer.name))
                } else {
                    ("·", styler.primary(layer.name))
                };
                lines.push(format!("  {marker} {name}"));
                lines.push(format!("      {}", styler.muted(&layer.exploits.join(" / "))));
            }
            lines.push(format!(
                "  {}",
                progress_bar(layers.overall(), DETAIL_BAR_WIDTH, styler)
            ));
            if layers.is_done() {
                lines.push(styler.success(strings.status_complete));
            }
        }
        Some(DetailState::Trace { ip, run, report }) => {
            lines.push(format!("  {} {}", styler.muted("IP:"), styler.primary(ip)));
            match report {
                Some(report) => {
                    let threat = match report.threat {
                        ThreatLevel::Low => styler.success("LOW"),
                        ThreatLevel::Medium => styler.warning("MEDIUM"),
                        ThreatLevel::High => styler.error("HIGH"),
                    };
                    let rows = [
                        ("country:", report.country.to_string()),
                        ("city:", report.city.to_string()),
                        ("isp:", report.isp.to_string()),
                        (
                            "coords:",
                            format!("{}, {}", report.latitude, report.longitude),
                        ),
                        ("timezone:", report.timezone.to_string()),
                    ];
                    for (label, value) in rows {
                        lines.push(format!(
                            "  {}{}",
                            pad_visible(&styler.muted(label), 11),
                            styler.primary(&value),
                        ));
                    }
                    lines.push(format!(
                        "  {}{threat}",
                        pad_visible(&styler.muted("threat:"), 11)
                    ));
                }
                None if run.is_some() => lines.push(styler.warning(strings.status_connecting)),
                None => lines.push(styler.muted(strings.status_ready)),
            }
        }
        Some(DetailState::Database {
            query,
            run,
            revealed,
        }) => {
            lines.push(format!(
                "  {} {}",
                styler.muted("query:"),
                styler.secondary(query)
            ));
            if *revealed {
                for row in &DATABASE_ROWS {
                    lines.push(format!(
                        "  {}{}{}{} {}",
                        pad_visible(&styler.primary(&format!("#{}", row.id)), 5),
                        pad_visible(&styler.secondary(row.user), 10),
                        pad_visible(&styler.muted(row.email), 24),
                        pad_visible(&styler.warning(&format!("lvl {}", row.level)), 8),
                        styler.muted(row.last_login),
                    ));
                }
            } else if run.is_some() {
                lines.push(styler.warning(strings.status_connecting));
            } else {
                lines.push(styler.muted(strings.status_ready));
            }
        }
        Some(DetailState::Sysinfo { run, revealed }) => {
            if *revealed {
                let rows = [
                    ("os:", std::env::consts::OS),
                    ("platform:", std::env::consts::ARCH),
                    ("cpu:", SYSTEM_REPORT.cpu),
                    ("ram:", SYSTEM_REPORT.ram),
                    ("storage:", SYSTEM_REPORT.storage),
                    ("uptime:", SYSTEM_REPORT.uptime),
                    ("hostname:", SYSTEM_REPORT.hostname),
                    ("arch:", SYSTEM_REPORT.architecture),
                ];
                for (label, value) in rows {
                    lines.push(format!(
                        "  {}{}",
                        pad_visible(&styler.muted(label), 11),
                        styler.primary(value),
                    ));
                }
            } else if run.is_some() {
                lines.push(styler.warning(strings.status_connecting));
            } else {
                lines.push(styler.muted(strings.status_ready));
            }
        }
        None => {}
    }
    lines.push(separator_line(styler, width));
    lines.push(styler.muted(detail_hint(kind)));
    lines
}

fn detail_hint(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Scan | CommandKind::Sysinfo => "start • back",
        CommandKind::Decrypt | CommandKind::Firewall => "start • cancel • back",
        CommandKind::Trace => "trace <ip> • cancel • back",
        CommandKind::Database => "query <sql> • cancel • back",
    }
}
