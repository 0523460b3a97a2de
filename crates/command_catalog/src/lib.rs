//! Canned data for the six built-in commands: console scripts, tick
//! cadences, detail-screen datasets, and icons.
//!
//! Everything here is demo fixture data. Scripts play back through
//! `playback_engine`; nothing performs real scanning, decryption, or
//! lookups.

use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;

use playback_engine::{LineScript, TaskBody, TaskSpec, TaskSpecError};

/// Console scripts reveal one line per tick.
pub const CONSOLE_TICK_MS: u64 = 400;
/// The scan sweep meter ticks faster with larger steps.
pub const SCAN_TICK_MS: u64 = 300;
pub const SCAN_MAX_STEP: f64 = 25.0;
/// Each decrypting file runs its own meter.
pub const DECRYPT_TICK_MS: u64 = 400;
pub const DECRYPT_MAX_STEP: f64 = 20.0;
/// Firewall layers fall one per tick.
pub const FIREWALL_TICK_MS: u64 = 600;
/// One-shot lookup delays.
pub const TRACE_DELAY_MS: u64 = 2_000;
pub const QUERY_DELAY_MS: u64 = 1_500;
pub const SYSINFO_DELAY_MS: u64 = 1_500;

pub const DEFAULT_TRACE_IP: &str = "203.0.113.42";
pub const DEFAULT_DATABASE_QUERY: &str = "SELECT * FROM users WHERE admin=1";

/// The six built-in commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Scan,
    Decrypt,
    Firewall,
    Database,
    Trace,
    Sysinfo,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Scan,
        CommandKind::Decrypt,
        CommandKind::Firewall,
        CommandKind::Database,
        CommandKind::Trace,
        CommandKind::Sysinfo,
    ];

    /// Stable identifier, used for command input and lookups.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Scan => "scan",
            Self::Decrypt => "decrypt",
            Self::Firewall => "firewall",
            Self::Database => "database",
            Self::Trace => "trace",
            Self::Sysinfo => "sysinfo",
        }
    }

    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }

    fn icon_shortcode(self) -> &'static str {
        match self {
            Self::Scan => "satellite",
            Self::Decrypt => "unlock",
            Self::Firewall => "shield",
            Self::Database => "floppy_disk",
            Self::Trace => "earth_africa",
            Self::Sysinfo => "gear",
        }
    }

    /// Emoji icon rendered on the command card.
    #[must_use]
    pub fn icon(self) -> &'static str {
        static ICONS: Lazy<HashMap<CommandKind, &'static str>> = Lazy::new(|| {
            CommandKind::ALL
                .into_iter()
                .map(|kind| {
                    let glyph = emojis::get_by_shortcode(kind.icon_shortcode())
                        .map(emojis::Emoji::as_str)
                        .unwrap_or("▪");
                    (kind, glyph)
                })
                .collect()
        });

        ICONS.get(&self).copied().unwrap_or("▪")
    }
}

const SCAN_OUTPUT: [&str; 6] = [
    "> Initializing network scan...",
    "> Scanning subnet 192.168.1.0/24",
    "> Found device: 192.168.1.1 (Router)",
    "> Found device: 192.168.1.105 (Phone)",
    "> Found device: 192.168.1.142 (Laptop)",
    "[SUCCESS] Scan complete - 3 devices found",
];

const DECRYPT_OUTPUT: [&str; 7] = [
    "> Loading encrypted files...",
    "> Attempting decryption with AES-256",
    "> Progress: 25%",
    "> Progress: 50%",
    "> Progress: 75%",
    "> Progress: 100%",
    "[SUCCESS] Files decrypted successfully",
];

const FIREWALL_OUTPUT: [&str; 6] = [
    "> Analyzing firewall configuration...",
    "> Searching for vulnerabilities...",
    "> Exploit found: CVE-2024-1337",
    "> Injecting payload...",
    "> Bypassing authentication...",
    "[SUCCESS] Firewall breached",
];

const DATABASE_OUTPUT: [&str; 6] = [
    "> Connecting to database server...",
    "> SELECT * FROM users WHERE admin=1",
    "> ID: 1 | User: admin | Level: 10",
    "> ID: 7 | User: sysadmin | Level: 9",
    "> ID: 23 | User: root | Level: 10",
    "[SUCCESS] Query executed - 3 results",
];

const TRACE_OUTPUT: [&str; 6] = [
    "> Tracing IP: 203.0.113.42",
    "> Resolving geolocation...",
    "> Country: United States",
    "> City: San Francisco, CA",
    "> ISP: CloudNet Systems",
    "[SUCCESS] Trace complete",
];

/// Console output for one command, in reveal order.
///
/// The system-info script interpolates the build platform, so lines are
/// materialized per call.
#[must_use]
pub fn console_lines(kind: CommandKind) -> Vec<String> {
    let fixed: &[&str] = match kind {
        CommandKind::Scan => &SCAN_OUTPUT,
        CommandKind::Decrypt => &DECRYPT_OUTPUT,
        CommandKind::Firewall => &FIREWALL_OUTPUT,
        CommandKind::Database => &DATABASE_OUTPUT,
        CommandKind::Trace => &TRACE_OUTPUT,
        CommandKind::Sysinfo => {
            return vec![
                "> Gathering system information...".to_string(),
                format!("> OS: {}", std::env::consts::OS),
                format!("> Platform: {}", std::env::consts::ARCH),
                "> CPU: 8 cores @ 2.4GHz".to_string(),
                "> RAM: 8GB".to_string(),
                "> Storage: 256GB SSD".to_string(),
                "[SUCCESS] System info retrieved".to_string(),
            ];
        }
    };

    fixed.iter().map(|line| (*line).to_string()).collect()
}

/// Line-revealing playback of a command's console script.
pub fn console_playback(kind: CommandKind) -> Result<TaskSpec, TaskSpecError> {
    let script = LineScript::new(console_lines(kind))?;
    TaskSpec::new(
        Duration::from_millis(CONSOLE_TICK_MS),
        TaskBody::Lines(script),
    )
}

/// The scan screen's single sweep meter.
pub fn scan_sweep_playback() -> Result<TaskSpec, TaskSpecError> {
    TaskSpec::new(
        Duration::from_millis(SCAN_TICK_MS),
        TaskBody::Meter {
            max_step: SCAN_MAX_STEP,
        },
    )
}

/// One decrypting file's meter; the decrypt screen runs one per file.
pub fn decrypt_file_playback() -> Result<TaskSpec, TaskSpecError> {
    TaskSpec::new(
        Duration::from_millis(DECRYPT_TICK_MS),
        TaskBody::Meter {
            max_step: DECRYPT_MAX_STEP,
        },
    )
}

/// The firewall attack: one layer breached per tick.
pub fn firewall_playback() -> Result<TaskSpec, TaskSpecError> {
    TaskSpec::new(
        Duration::from_millis(FIREWALL_TICK_MS),
        TaskBody::Layers {
            count: FIREWALL_LAYERS.len(),
        },
    )
}

/// One-shot delay for the trace, database, and sysinfo lookups.
pub fn lookup_playback(kind: CommandKind) -> Result<TaskSpec, TaskSpecError> {
    let delay_ms = match kind {
        CommandKind::Trace => TRACE_DELAY_MS,
        CommandKind::Database => QUERY_DELAY_MS,
        _ => SYSINFO_DELAY_MS,
    };
    TaskSpec::new(Duration::from_millis(delay_ms), TaskBody::Delay)
}

/// An encrypted file shown on the decrypt screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptedFile {
    pub name: &'static str,
    pub size: &'static str,
}

pub const ENCRYPTED_FILES: [EncryptedFile; 3] = [
    EncryptedFile {
        name: "database.sql.enc",
        size: "2.5 MB",
    },
    EncryptedFile {
        name: "config.json.enc",
        size: "156 KB",
    },
    EncryptedFile {
        name: "backup.zip.enc",
        size: "45.3 MB",
    },
];

/// A device revealed once the scan sweep completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Device {
    pub ip: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub signal: u8,
    pub online: bool,
}

pub const SCAN_DEVICES: [Device; 5] = [
    Device {
        ip: "192.168.1.1",
        name: "Roteador",
        kind: "Router",
        signal: 95,
        online: true,
    },
    Device {
        ip: "192.168.1.105",
        name: "Smartphone",
        kind: "Mobile",
        signal: 87,
        online: true,
    },
    Device {
        ip: "192.168.1.142",
        name: "Notebook",
        kind: "Computer",
        signal: 92,
        online: true,
    },
    Device {
        ip: "192.168.1.200",
        name: "Smart TV",
        kind: "Device",
        signal: 78,
        online: true,
    },
    Device {
        ip: "192.168.1.250",
        name: "Impressora",
        kind: "Printer",
        signal: 65,
        online: false,
    },
];

/// One firewall layer and the exploits listed against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirewallLayer {
    pub name: &'static str,
    pub exploits: [&'static str; 2],
}

pub const FIREWALL_LAYERS: [FirewallLayer; 4] = [
    FirewallLayer {
        name: "Camada 1: Filtro de Pacotes",
        exploits: ["Buffer Overflow", "Port Scanning"],
    },
    FirewallLayer {
        name: "Camada 2: Proxy",
        exploits: ["HTTP Tunneling", "SOCKS Proxy"],
    },
    FirewallLayer {
        name: "Camada 3: Detecção de Intrusão",
        exploits: ["Evasão de IDS", "Fragmentação"],
    },
    FirewallLayer {
        name: "Camada 4: Autenticação",
        exploits: ["SQL Injection", "Brute Force"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
}

/// The canned geolocation answer for any traced address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceReport {
    pub country: &'static str,
    pub city: &'static str,
    pub isp: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub timezone: &'static str,
    pub threat: ThreatLevel,
}

pub const TRACE_REPORT: TraceReport = TraceReport {
    country: "Brasil",
    city: "São Paulo, SP",
    isp: "CloudNet Systems",
    latitude: "-23.5505",
    longitude: "-46.6333",
    timezone: "America/Sao_Paulo",
    threat: ThreatLevel::High,
};

/// One row returned by the fake admin query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseRow {
    pub id: u32,
    pub user: &'static str,
    pub email: &'static str,
    pub level: u8,
    pub last_login: &'static str,
}

pub const DATABASE_ROWS: [DatabaseRow; 3] = [
    DatabaseRow {
        id: 1,
        user: "admin",
        email: "admin@system.local",
        level: 10,
        last_login: "2024-01-16 13:20",
    },
    DatabaseRow {
        id: 7,
        user: "sysadmin",
        email: "sysadmin@system.local",
        level: 9,
        last_login: "2024-01-16 12:45",
    },
    DatabaseRow {
        id: 23,
        user: "root",
        email: "root@system.local",
        level: 10,
        last_login: "2024-01-16 11:30",
    },
];

/// The canned system report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemReport {
    pub cpu: &'static str,
    pub ram: &'static str,
    pub storage: &'static str,
    pub uptime: &'static str,
    pub hostname: &'static str,
    pub architecture: &'static str,
}

pub const SYSTEM_REPORT: SystemReport = SystemReport {
    cpu: "8 cores @ 2.4GHz",
    ram: "8GB",
    storage: "256GB SSD",
    uptime: "45 dias, 12 horas",
    hostname: "hacker-terminal-01",
    architecture: "ARM64",
};
