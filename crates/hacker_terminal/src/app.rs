//! Application state and command dispatch.
//!
//! [`App`] owns every screen's state and mutates it in response to parsed
//! commands and playback events. It never blocks: playback runs on worker
//! threads behind [`HostOps`], and events come back through the `on_*`
//! handlers on the driving thread.

use std::collections::HashMap;
use std::mem;

use command_catalog::{
    CommandKind, TraceReport, DEFAULT_DATABASE_QUERY, DEFAULT_TRACE_IP, ENCRYPTED_FILES,
    FIREWALL_LAYERS, TRACE_REPORT,
};
use playback_engine::{
    EffectDispatcher, LayerBoard, ProgressBoard, RunId, ScrollbackBuffer, Subtask, TaskStatus,
};
use profile_store::{
    AccountRecord, AccountStore, Language, PreferenceStore, Preferences, ThemeName,
};

use crate::commands::{parse_command, AppCommand};
use crate::i18n;

const LOGIN_HELP: &str = "Commands: login <user> <pass> | signup | help | quit";
const SIGNUP_HELP: &str =
    "Commands: signup <user> <email> <pass> <confirm> | login <user> <pass> | back | quit";
const TERMINAL_HELP: &str = "Commands: scan | decrypt | firewall | database | trace | sysinfo | \
     open <id> | trace <ip> | query <sql> | cancel | clear | settings | logout | quit";
const SETTINGS_HELP: &str =
    "Commands: lang pt|en|es | theme green|cyan|purple|red | back | logout | quit";
const DETAIL_HELP: &str = "Commands: start | trace <ip> | query <sql> | cancel | back | quit";

/// Which screen the interface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Signup,
    Terminal,
    Settings,
    Detail(CommandKind),
}

/// What a playback worker should play.
///
/// The runtime resolves requests into routines through the playback
/// library; the app keeps the request per run to route events back to the
/// right piece of state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackRequest {
    /// Reveal a command's console script line by line.
    Console(CommandKind),
    ScanSweep,
    /// One run per encrypted file; the index selects the file row.
    DecryptFile(usize),
    FirewallBreach,
    /// Delayed one-shot reveal for trace, database and sysinfo screens.
    Lookup(CommandKind),
}

/// Dashboard row for one of the six commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandState {
    pub kind: CommandKind,
    pub status: TaskStatus,
    pub run: Option<RunId>,
}

/// Per-command state behind the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Scan {
        sweep: Subtask,
        run: Option<RunId>,
    },
    Decrypt {
        files: ProgressBoard,
        runs: Vec<RunId>,
    },
    Firewall {
        layers: LayerBoard,
        run: Option<RunId>,
    },
    Trace {
        ip: String,
        run: Option<RunId>,
        report: Option<TraceReport>,
    },
    Database {
        query: String,
        run: Option<RunId>,
        revealed: bool,
    },
    Sysinfo {
        run: Option<RunId>,
        revealed: bool,
    },
}

/// Transient status line rendered under the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Success(String),
    Error(String),
}

/// Operations the app requests from its host instead of performing itself.
///
/// The production host is the playback runtime; tests substitute spies.
pub trait HostOps {
    fn start_playback(&mut self, request: PlaybackRequest) -> Result<RunId, String>;
    fn cancel_playback(&mut self, run_id: RunId);
    fn request_render(&mut self);
    fn request_stop(&mut self);
}

#[derive(Debug)]
pub struct App {
    pub screen: Screen,
    pub input: String,
    pub session: Option<AccountRecord>,
    pub prefs: Preferences,
    pub console: ScrollbackBuffer,
    pub detail: Option<DetailState>,
    pub notice: Option<Notice>,
    pub should_exit: bool,
    commands: Vec<CommandState>,
    runs: HashMap<RunId, PlaybackRequest>,
    accounts: AccountStore,
    prefs_store: PreferenceStore,
    effects: EffectDispatcher,
}

impl App {
    /// Restores the persisted session and preferences, landing on the
    /// terminal screen when a user is still logged in.
    pub fn new(accounts: AccountStore, prefs_store: PreferenceStore) -> Self {
        let prefs = prefs_store.load();
        let session = accounts.current_user();
        let mut app = Self {
            screen: if session.is_some() {
                Screen::Terminal
            } else {
                Screen::Login
            },
            input: String::new(),
            session,
            prefs,
            console: ScrollbackBuffer::new(),
            detail: None,
            notice: None,
            should_exit: false,
            commands: CommandKind::ALL
                .iter()
                .map(|kind| CommandState {
                    kind: *kind,
                    status: TaskStatus::Ready,
                    run: None,
                })
                .collect(),
            runs: HashMap::new(),
            accounts,
            prefs_store,
            effects: EffectDispatcher::new(),
        };
        if app.screen == Screen::Terminal {
            app.seed_boot_lines();
        }
        app
    }

    pub fn on_input_replace(&mut self, line: String) {
        self.input = line;
    }

    /// Parses the pending input line and dispatches it to the current
    /// screen. Blank lines only trigger a repaint.
    pub fn on_submit(&mut self, host: &mut impl HostOps) {
        let text = mem::take(&mut self.input);
        let Some(command) = parse_command(&text) else {
            host.request_render();
            return;
        };
        self.notice = None;
        self.handle_command(command, host);
        host.request_render();
    }

    fn handle_command(&mut self, command: AppCommand, host: &mut impl HostOps) {
        if matches!(command, AppCommand::Quit) {
            self.on_quit(host);
            return;
        }
        if matches!(command, AppCommand::Help) {
            self.notice = Some(Notice::Info(help_text(self.screen).to_string()));
            return;
        }
        match self.screen {
            Screen::Login => self.handle_login_command(command),
            Screen::Signup => self.handle_signup_command(command),
            Screen::Terminal => self.handle_terminal_command(command, host),
            Screen::Settings => self.handle_settings_command(command, host),
            Screen::Detail(kind) => self.handle_detail_command(kind, command, host),
        }
    }

    fn handle_login_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Login { username, password } => self.attempt_login(&username, &password),
            AppCommand::SignupForm => self.screen = Screen::Signup,
            AppCommand::Signup {
                username,
                email,
                password,
                confirm,
            } => self.attempt_signup(&username, &email, &password, &confirm),
            other => self.reject_command(&other),
        }
    }

    fn handle_signup_command(&mut self, command: AppCommand) {
        match command {
            AppCommand::Signup {
                username,
                email,
                password,
                confirm,
            } => self.attempt_signup(&username, &email, &password, &confirm),
            AppCommand::Login { username, password } => self.attempt_login(&username, &password),
            AppCommand::SignupForm => {}
            AppCommand::Back => self.screen = Screen::Login,
            other => self.reject_command(&other),
        }
    }

    fn handle_terminal_command(&mut self, command: AppCommand, host: &mut impl HostOps) {
        match command {
            AppCommand::Run(kind) => self.run_console_command(kind, host),
            AppCommand::Open(kind) => self.open_detail(kind, host),
            AppCommand::Trace { ip } => {
                self.open_detail(CommandKind::Trace, host);
                self.start_trace(ip, host);
            }
            AppCommand::Query { sql } => {
                self.open_detail(CommandKind::Database, host);
                self.start_query(sql, host);
            }
            AppCommand::Cancel => self.on_cancel(host),
            AppCommand::Settings => self.screen = Screen::Settings,
            AppCommand::Logout => self.logout(host),
            AppCommand::Clear => self.console.clear(),
            other => self.reject_command(&other),
        }
    }

    fn handle_settings_command(&mut self, command: AppCommand, host: &mut impl HostOps) {
        match command {
            AppCommand::SetLanguage(code) => self.set_language(&code),
            AppCommand::SetTheme(code) => self.set_theme(&code),
            AppCommand::Settings => {}
            AppCommand::Back => self.screen = Screen::Terminal,
            AppCommand::Logout => self.logout(host),
            AppCommand::Cancel => self.on_cancel(host),
            other => self.reject_command(&other),
        }
    }

    fn handle_detail_command(
        &mut self,
        kind: CommandKind,
        command: AppCommand,
        host: &mut impl HostOps,
    ) {
        match command {
            AppCommand::Back => self.close_detail(host),
            AppCommand::Start => self.start_detail_action(kind, host),
            AppCommand::Run(requested) if requested == kind => {
                self.start_detail_action(kind, host)
            }
            AppCommand::Trace { ip } if kind == CommandKind::Trace => self.start_trace(ip, host),
            AppCommand::Query { sql } if kind == CommandKind::Database => {
                self.start_query(sql, host)
            }
            AppCommand::Cancel => self.on_cancel(host),
            AppCommand::Open(next) => self.open_detail(next, host),
            other => self.reject_command(&other),
        }
    }

    fn reject_command(&mut self, command: &AppCommand) {
        let message = match command {
            AppCommand::Unknown(word) => format!("Unknown command: {word}"),
            other => format!("Command not available here: {}", other.keyword()),
        };
        self.notice = Some(Notice::Error(message));
    }

    fn attempt_login(&mut self, username: &str, password: &str) {
        if username.is_empty() || password.is_empty() {
            let strings = i18n::strings(self.prefs.language);
            self.notice = Some(Notice::Error(
                strings.login_credentials_required.to_string(),
            ));
            return;
        }
        match self.accounts.login(username, password) {
            Ok(record) => {
                self.session = Some(record);
                self.enter_terminal();
            }
            Err(error) => self.notice = Some(Notice::Error(error.to_string())),
        }
    }

    fn attempt_signup(&mut self, username: &str, email: &str, password: &str, confirm: &str) {
        let strings = i18n::strings(self.prefs.language);
        if username.is_empty() || email.is_empty() || password.is_empty() || confirm.is_empty() {
            self.notice = Some(Notice::Error(
                strings.signup_all_fields_required.to_string(),
            ));
            return;
        }
        if password != confirm {
            self.notice = Some(Notice::Error(
                strings.signup_passwords_mismatch.to_string(),
            ));
            return;
        }
        match self.accounts.register(username, email, password) {
            Ok(_) => {
                self.screen = Screen::Login;
                self.notice = Some(Notice::Success(strings.signup_account_created.to_string()));
            }
            Err(error) => self.notice = Some(Notice::Error(error.to_string())),
        }
    }

    fn enter_terminal(&mut self) {
        for slot in &mut self.commands {
            slot.status = TaskStatus::Ready;
            slot.run = None;
        }
        self.detail = None;
        self.notice = None;
        self.seed_boot_lines();
        self.screen = Screen::Terminal;
    }

    fn seed_boot_lines(&mut self) {
        let strings = i18n::strings(self.prefs.language);
        self.console.clear();
        self.console.append(strings.terminal_system_initialized);
        self.console.append(strings.terminal_welcome);
        self.console.append(strings.terminal_type_command);
    }

    fn logout(&mut self, host: &mut impl HostOps) {
        self.cancel_all(host);
        self.accounts.logout();
        self.session = None;
        self.console.clear();
        self.detail = None;
        self.notice = None;
        self.screen = Screen::Login;
    }

    fn set_language(&mut self, code: &str) {
        let Some(language) = Language::from_code(code) else {
            self.notice = Some(Notice::Error(format!("Unknown language: {code}")));
            return;
        };
        self.prefs.language = language;
        if let Err(error) = self.prefs_store.set_language(language) {
            self.notice = Some(Notice::Error(error.to_string()));
        }
    }

    fn set_theme(&mut self, code: &str) {
        let Some(theme) = ThemeName::from_code(code) else {
            self.notice = Some(Notice::Error(format!("Unknown theme: {code}")));
            return;
        };
        self.prefs.theme = theme;
        if let Err(error) = self.prefs_store.set_theme(theme) {
            self.notice = Some(Notice::Error(error.to_string()));
        }
    }

    /// Starts a console playback for `kind`. A second start while the
    /// command is already running is a silent no-op.
    fn run_console_command(&mut self, kind: CommandKind, host: &mut impl HostOps) {
        let Some(index) = self.commands.iter().position(|slot| slot.kind == kind) else {
            return;
        };
        if !self.commands[index].status.can_start() {
            return;
        }
        let strings = i18n::strings(self.prefs.language);
        let title = i18n::command_title(self.prefs.language, kind);
        self.console
            .append(format!("{} {title}...", strings.terminal_executing));
        match host.start_playback(PlaybackRequest::Console(kind)) {
            Ok(run_id) => {
                self.runs.insert(run_id, PlaybackRequest::Console(kind));
                self.commands[index].status = TaskStatus::Running;
                self.commands[index].run = Some(run_id);
            }
            Err(error) => self.console.append(format!("[ERROR] {error}")),
        }
    }

    /// Switches to a command's detail screen. Scan and sysinfo start their
    /// action immediately; the rest wait for `start`.
    fn open_detail(&mut self, kind: CommandKind, host: &mut impl HostOps) {
        self.close_detail(host);
        self.detail = Some(initial_detail_state(kind));
        self.screen = Screen::Detail(kind);
        match kind {
            CommandKind::Scan => self.start_scan_sweep(host),
            CommandKind::Sysinfo => self.start_sysinfo(host),
            _ => {}
        }
    }

    /// Cancels any detail-screen runs and returns to the terminal. Console
    /// playbacks keep streaming.
    fn close_detail(&mut self, host: &mut impl HostOps) {
        let stale: Vec<RunId> = self
            .runs
            .iter()
            .filter(|(_, request)| !matches!(request, PlaybackRequest::Console(_)))
            .map(|(run_id, _)| *run_id)
            .collect();
        for run_id in stale {
            self.runs.remove(&run_id);
            host.cancel_playback(run_id);
        }
        self.detail = None;
        self.screen = Screen::Terminal;
    }

    fn start_detail_action(&mut self, kind: CommandKind, host: &mut impl HostOps) {
        match kind {
            CommandKind::Scan => self.start_scan_sweep(host),
            CommandKind::Decrypt => self.start_decrypt_all(host),
            CommandKind::Firewall => self.start_firewall_attack(host),
            CommandKind::Trace => self.start_trace(None, host),
            CommandKind::Database => self.start_query(None, host),
            CommandKind::Sysinfo => self.start_sysinfo(host),
        }
    }

    fn start_scan_sweep(&mut self, host: &mut impl HostOps) {
        let Some(DetailState::Scan { sweep, run }) = &mut self.detail else {
            return;
        };
        if run.is_some() {
            return;
        }
        sweep.reset();
        match host.start_playback(PlaybackRequest::ScanSweep) {
            Ok(run_id) => {
                *run = Some(run_id);
                self.runs.insert(run_id, PlaybackRequest::ScanSweep);
            }
            Err(error) => self.notice = Some(Notice::Error(error)),
        }
    }

    /// Starts one decrypt run per encrypted file. Partial spawn failures
    /// cancel the runs already started and report the error.
    fn start_decrypt_all(&mut self, host: &mut impl HostOps) {
        {
            let Some(DetailState::Decrypt { files, runs }) = &mut self.detail else {
                return;
            };
            if !runs.is_empty() {
                return;
            }
            files.reset();
        }
        let mut started: Vec<(RunId, usize)> = Vec::new();
        for index in 0..ENCRYPTED_FILES.len() {
            match host.start_playback(PlaybackRequest::DecryptFile(index)) {
                Ok(run_id) => started.push((run_id, index)),
                Err(error) => {
                    for (run_id, _) in started {
                        host.cancel_playback(run_id);
                    }
                    self.notice = Some(Notice::Error(error));
                    return;
                }
            }
        }
        let Some(DetailState::Decrypt { runs, .. }) = &mut self.detail else {
            return;
        };
        for (run_id, index) in started {
            self.runs.insert(run_id, PlaybackRequest::DecryptFile(index));
            runs.push(run_id);
        }
    }

    fn start_firewall_attack(&mut self, host: &mut impl HostOps) {
        let Some(DetailState::Firewall { layers, run }) = &mut self.detail else {
            return;
        };
        if run.is_some() {
            return;
        }
        layers.reset();
        match host.start_playback(PlaybackRequest::FirewallBreach) {
            Ok(run_id) => {
                *run = Some(run_id);
                self.runs.insert(run_id, PlaybackRequest::FirewallBreach);
            }
            Err(error) => self.notice = Some(Notice::Error(error)),
        }
    }

    fn start_trace(&mut self, target: Option<String>, host: &mut impl HostOps) {
        let Some(DetailState::Trace { ip, run, report }) = &mut self.detail else {
            return;
        };
        if run.is_some() {
            return;
        }
        if let Some(target) = target {
            let trimmed = target.trim();
            if !trimmed.is_empty() {
                *ip = trimmed.to_string();
            }
        }
        *report = None;
        match host.start_playback(PlaybackRequest::Lookup(CommandKind::Trace)) {
            Ok(run_id) => {
                *run = Some(run_id);
                self.runs
                    .insert(run_id, PlaybackRequest::Lookup(CommandKind::Trace));
            }
            Err(error) => self.notice = Some(Notice::Error(error)),
        }
    }

    fn start_query(&mut self, sql: Option<String>, host: &mut impl HostOps) {
        let Some(DetailState::Database {
            query,
            run,
            revealed,
        }) = &mut self.detail
        else {
            return;
        };
        if run.is_some() {
            return;
        }
        if let Some(sql) = sql {
            let trimmed = sql.trim();
            if !trimmed.is_empty() {
                *query = trimmed.to_string();
            }
        }
        *revealed = false;
        match host.start_playback(PlaybackRequest::Lookup(CommandKind::Database)) {
            Ok(run_id) => {
                *run = Some(run_id);
                self.runs
                    .insert(run_id, PlaybackRequest::Lookup(CommandKind::Database));
            }
            Err(error) => self.notice = Some(Notice::Error(error)),
        }
    }

    fn start_sysinfo(&mut self, host: &mut impl HostOps) {
        let Some(DetailState::Sysinfo { run, revealed }) = &mut self.detail else {
            return;
        };
        if run.is_some() {
            return;
        }
        *revealed = false;
        match host.start_playback(PlaybackRequest::Lookup(CommandKind::Sysinfo)) {
            Ok(run_id) => {
                *run = Some(run_id);
                self.runs
                    .insert(run_id, PlaybackRequest::Lookup(CommandKind::Sysinfo));
            }
            Err(error) => self.notice = Some(Notice::Error(error)),
        }
    }

    /// Cancels every live run and detaches it from its screen state.
    ///
    /// Deregistration happens immediately; the workers' `Cancelled` events
    /// arrive later and are ignored as stale, so the interface freezes at
    /// the moment of cancellation.
    fn cancel_all(&mut self, host: &mut impl HostOps) {
        let active: Vec<(RunId, PlaybackRequest)> = self.runs.drain().collect();
        for (run_id, request) in active {
            self.release_target(request, run_id);
            host.cancel_playback(run_id);
        }
    }

    pub fn on_cancel(&mut self, host: &mut impl HostOps) {
        if self.runs.is_empty() {
            self.notice = Some(Notice::Info("No active playback".to_string()));
            host.request_render();
            return;
        }
        self.cancel_all(host);
        self.notice = Some(Notice::Info("Playback cancelled".to_string()));
        host.request_render();
    }

    /// Returns a run's screen target to its idle shape.
    fn release_target(&mut self, request: PlaybackRequest, run_id: RunId) {
        match request {
            PlaybackRequest::Console(kind) => {
                if let Some(slot) = self.commands.iter_mut().find(|slot| slot.kind == kind) {
                    if slot.run == Some(run_id) {
                        slot.status = TaskStatus::Ready;
                        slot.run = None;
                    }
                }
            }
            PlaybackRequest::ScanSweep => {
                if let Some(DetailState::Scan { run, .. }) = &mut self.detail {
                    if *run == Some(run_id) {
                        *run = None;
                    }
                }
            }
            PlaybackRequest::FirewallBreach => {
                if let Some(DetailState::Firewall { run, .. }) = &mut self.detail {
                    if *run == Some(run_id) {
                        *run = None;
                    }
                }
            }
            PlaybackRequest::Lookup(_) => match &mut self.detail {
                Some(DetailState::Trace { run, .. })
                | Some(DetailState::Database { run, .. })
                | Some(DetailState::Sysinfo { run, .. }) => {
                    if *run == Some(run_id) {
                        *run = None;
                    }
                }
                _ => {}
            },
            PlaybackRequest::DecryptFile(_) => {
                if let Some(DetailState::Decrypt { runs, .. }) = &mut self.detail {
                    runs.retain(|candidate| *candidate != run_id);
                }
            }
        }
    }

    pub fn on_task_started(&mut self, run_id: RunId) {
        if self.should_exit {
            return;
        }
        if self.runs.contains_key(&run_id) {
            self.effects.task_started();
        }
    }

    pub fn on_task_line(&mut self, run_id: RunId, text: String) {
        if self.should_exit {
            return;
        }
        if matches!(self.runs.get(&run_id), Some(PlaybackRequest::Console(_))) {
            self.console.append(text);
            self.effects.line_revealed();
        }
    }

    pub fn on_task_meter(&mut self, run_id: RunId, progress: f64) {
        if self.should_exit {
            return;
        }
        match self.runs.get(&run_id).copied() {
            Some(PlaybackRequest::ScanSweep) => {
                if let Some(DetailState::Scan { sweep, .. }) = &mut self.detail {
                    sweep.update(progress);
                }
            }
            Some(PlaybackRequest::DecryptFile(index)) => {
                if let Some(DetailState::Decrypt { files, .. }) = &mut self.detail {
                    files.update(index, progress);
                }
            }
            _ => {}
        }
    }

    pub fn on_layer_breached(&mut self, run_id: RunId, layer: usize) {
        if self.should_exit {
            return;
        }
        if !matches!(self.runs.get(&run_id), Some(PlaybackRequest::FirewallBreach)) {
            return;
        }
        if let Some(DetailState::Firewall { layers, .. }) = &mut self.detail {
            layers.record_breach(layer);
        }
    }

    pub fn on_task_finished(&mut self, run_id: RunId) {
        if self.should_exit {
            return;
        }
        let Some(request) = self.runs.remove(&run_id) else {
            return;
        };
        match request {
            PlaybackRequest::Console(kind) => {
                if let Some(slot) = self.commands.iter_mut().find(|slot| slot.kind == kind) {
                    if slot.run == Some(run_id) {
                        slot.status = TaskStatus::Complete;
                        slot.run = None;
                    }
                }
                self.effects.task_completed();
            }
            PlaybackRequest::ScanSweep => {
                if let Some(DetailState::Scan { sweep, run }) = &mut self.detail {
                    if *run == Some(run_id) {
                        sweep.update(100.0);
                        *run = None;
                    }
                }
                self.effects.task_completed();
            }
            PlaybackRequest::DecryptFile(index) => {
                if let Some(DetailState::Decrypt { files, runs }) = &mut self.detail {
                    files.update(index, 100.0);
                    runs.retain(|candidate| *candidate != run_id);
                    // The completion effect fires once, when the last file
                    // lands.
                    if runs.is_empty() && files.all_done() {
                        self.effects.task_completed();
                    }
                }
            }
            PlaybackRequest::FirewallBreach => {
                if let Some(DetailState::Firewall { run, .. }) = &mut self.detail {
                    if *run == Some(run_id) {
                        *run = None;
                    }
                }
                self.effects.task_completed();
            }
            PlaybackRequest::Lookup(_) => {
                self.reveal_lookup(run_id);
                self.effects.task_completed();
            }
        }
    }

    fn reveal_lookup(&mut self, run_id: RunId) {
        match &mut self.detail {
            Some(DetailState::Trace { run, report, .. }) => {
                if *run == Some(run_id) {
                    *run = None;
                    *report = Some(TRACE_REPORT);
                }
            }
            Some(DetailState::Database { run, revealed, .. }) => {
                if *run == Some(run_id) {
                    *run = None;
                    *revealed = true;
                }
            }
            Some(DetailState::Sysinfo { run, revealed }) => {
                if *run == Some(run_id) {
                    *run = None;
                    *revealed = true;
                }
            }
            _ => {}
        }
    }

    pub fn on_task_failed(&mut self, run_id: RunId, error: String) {
        if self.should_exit {
            return;
        }
        let Some(request) = self.runs.remove(&run_id) else {
            return;
        };
        self.release_target(request, run_id);
        match request {
            PlaybackRequest::Console(_) => self.console.append(format!("[ERROR] {error}")),
            _ => self.notice = Some(Notice::Error(error)),
        }
    }

    pub fn on_task_cancelled(&mut self, run_id: RunId) {
        if self.should_exit {
            return;
        }
        let Some(request) = self.runs.remove(&run_id) else {
            return;
        };
        self.release_target(request, run_id);
    }

    /// First Ctrl-C cancels running playbacks; with nothing running it
    /// quits.
    pub fn on_control_c(&mut self, host: &mut impl HostOps) {
        self.input.clear();
        if self.runs.is_empty() {
            self.on_quit(host);
        } else {
            self.on_cancel(host);
        }
    }

    pub fn on_quit(&mut self, host: &mut impl HostOps) {
        self.cancel_all(host);
        self.should_exit = true;
        host.request_stop();
        host.request_render();
    }

    pub fn commands(&self) -> &[CommandState] {
        &self.commands
    }

    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }

    pub fn effects_mut(&mut self) -> &mut EffectDispatcher {
        &mut self.effects
    }
}

fn initial_detail_state(kind: CommandKind) -> DetailState {
    match kind {
        CommandKind::Scan => DetailState::Scan {
            sweep: Subtask::new("sweep"),
            run: None,
        },
        CommandKind::Decrypt => DetailState::Decrypt {
            files: ProgressBoard::new(ENCRYPTED_FILES.iter().map(|file| file.name)),
            runs: Vec::new(),
        },
        CommandKind::Firewall => DetailState::Firewall {
            layers: LayerBoard::new(FIREWALL_LAYERS.len()),
            run: None,
        },
        CommandKind::Trace => DetailState::Trace {
            ip: DEFAULT_TRACE_IP.to_string(),
            run: None,
            report: None,
        },
        CommandKind::Database => DetailState::Database {
            query: DEFAULT_DATABASE_QUERY.to_string(),
            run: None,
            revealed: false,
        },
        CommandKind::Sysinfo => DetailState::Sysinfo {
            run: None,
            revealed: false,
        },
    }
}

pub fn help_text(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => LOGIN_HELP,
        Screen::Signup => SIGNUP_HELP,
        Screen::Terminal => TERMINAL_HELP,
        Screen::Settings => SETTINGS_HELP,
        Screen::Detail(_) => DETAIL_HELP,
    }
}
