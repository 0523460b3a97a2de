//! Static localization tables for the three supported languages.
//!
//! Every user-facing label lives here; screens never hardcode copy. Tables
//! are plain statics so lookups are free and the strings live for the whole
//! process.

use command_catalog::CommandKind;
use profile_store::{Language, ThemeName};

/// One language's complete set of interface strings.
///
/// Command titles and descriptions are indexed in [`CommandKind::ALL`] order.
#[derive(Debug)]
pub struct Strings {
    pub login_title: &'static str,
    pub login_subtitle: &'static str,
    pub login_username: &'static str,
    pub login_password: &'static str,
    pub login_button: &'static str,
    pub login_credentials_required: &'static str,
    pub login_new_to_network: &'static str,
    pub login_create_account: &'static str,
    pub login_unauthorized: &'static str,
    pub login_monitored: &'static str,

    pub signup_title: &'static str,
    pub signup_subtitle: &'static str,
    pub signup_username: &'static str,
    pub signup_email: &'static str,
    pub signup_password: &'static str,
    pub signup_confirm_password: &'static str,
    pub signup_button: &'static str,
    pub signup_all_fields_required: &'static str,
    pub signup_passwords_mismatch: &'static str,
    pub signup_account_created: &'static str,
    pub signup_already_have_account: &'static str,
    pub signup_login_here: &'static str,

    pub terminal_logout: &'static str,
    pub terminal_available_commands: &'static str,
    pub terminal_console_output: &'static str,
    pub terminal_system_initialized: &'static str,
    pub terminal_welcome: &'static str,
    pub terminal_type_command: &'static str,
    pub terminal_executing: &'static str,

    pub settings_title: &'static str,
    pub settings_language: &'static str,
    pub settings_theme: &'static str,
    pub settings_portuguese: &'static str,
    pub settings_english: &'static str,
    pub settings_spanish: &'static str,
    pub settings_theme_green: &'static str,
    pub settings_theme_cyan: &'static str,
    pub settings_theme_purple: &'static str,
    pub settings_theme_red: &'static str,

    pub status_ready: &'static str,
    pub status_running: &'static str,
    pub status_complete: &'static str,
    pub status_online: &'static str,
    pub status_offline: &'static str,
    pub status_connecting: &'static str,

    pub command_titles: [&'static str; 6],
    pub command_descriptions: [&'static str; 6],
}

static PT: Strings = Strings {
    login_title: "TERMINAL HACKER",
    login_subtitle: "v1.0.0 - ACESSO SEGURO REQUERIDO",
    login_username: "usuário",
    login_password: "senha",
    login_button: "ACESSO CONCEDIDO",
    login_credentials_required: "CREDENCIAIS OBRIGATÓRIAS",
    login_new_to_network: "NOVO NA REDE?",
    login_create_account: "CRIAR CONTA",
    login_unauthorized: "ACESSO NÃO AUTORIZADO É PROIBIDO",
    login_monitored: "TODAS AS ATIVIDADES SÃO MONITORADAS",

    signup_title: "CRIAR CONTA",
    signup_subtitle: "JUNTE-SE À REDE",
    signup_username: "usuário",
    signup_email: "email@dominio.com",
    signup_password: "senha",
    signup_confirm_password: "confirmar senha",
    signup_button: "CRIAR CONTA",
    signup_all_fields_required: "TODOS OS CAMPOS SÃO OBRIGATÓRIOS",
    signup_passwords_mismatch: "AS SENHAS NÃO CORRESPONDEM",
    signup_account_created: "CONTA CRIADA COM SUCESSO",
    signup_already_have_account: "JÁ TEM UMA CONTA?",
    signup_login_here: "ENTRAR AQUI",

    terminal_logout: "SAIR",
    terminal_available_commands: "COMANDOS DISPONÍVEIS",
    terminal_console_output: "SAÍDA DO CONSOLE",
    terminal_system_initialized: "> Sistema inicializado...",
    terminal_welcome: "> Bem-vindo ao Terminal Hacker v1.0.0",
    terminal_type_command: "> Digite um comando para começar",
    terminal_executing: "> Executando",

    settings_title: "CONFIGURAÇÕES",
    settings_language: "IDIOMA",
    settings_theme: "TEMA",
    settings_portuguese: "Português",
    settings_english: "English",
    settings_spanish: "Español",
    settings_theme_green: "Verde Neon",
    settings_theme_cyan: "Ciano",
    settings_theme_purple: "Roxo",
    settings_theme_red: "Vermelho",

    status_ready: "PRONTO",
    status_running: "EXECUTANDO...",
    status_complete: "COMPLETO",
    status_online: "ONLINE",
    status_offline: "OFFLINE",
    status_connecting: "CONECTANDO",

    command_titles: [
        "ESCANEAR REDE",
        "DECRIPTAR ARQUIVOS",
        "QUEBRAR FIREWALL",
        "ACESSAR BANCO DE DADOS",
        "RASTREAR IP",
        "INFORMAÇÕES DO SISTEMA",
    ],
    command_descriptions: [
        "Descobrir dispositivos na rede local",
        "Decriptar dados criptografados",
        "Penetrar firewall de segurança",
        "Consultar banco de dados remoto",
        "Localizar endereço IP",
        "Exibir informações do sistema",
    ],
};

static EN: Strings = Strings {
    login_title: "HACKER TERMINAL",
    login_subtitle: "v1.0.0 - SECURE ACCESS REQUIRED",
    login_username: "username",
    login_password: "password",
    login_button: "ACCESS GRANTED",
    login_credentials_required: "CREDENTIALS REQUIRED",
    login_new_to_network: "NEW TO THE NETWORK?",
    login_create_account: "CREATE ACCOUNT",
    login_unauthorized: "UNAUTHORIZED ACCESS IS PROHIBITED",
    login_monitored: "ALL ACTIVITIES ARE MONITORED",

    signup_title: "CREATE ACCOUNT",
    signup_subtitle: "JOIN THE NETWORK",
    signup_username: "username",
    signup_email: "email@domain.com",
    signup_password: "password",
    signup_confirm_password: "confirm password",
    signup_button: "CREATE ACCOUNT",
    signup_all_fields_required: "ALL FIELDS ARE REQUIRED",
    signup_passwords_mismatch: "PASSWORDS DO NOT MATCH",
    signup_account_created: "ACCOUNT CREATED SUCCESSFULLY",
    signup_already_have_account: "ALREADY HAVE AN ACCOUNT?",
    signup_login_here: "LOGIN HERE",

    terminal_logout: "LOGOUT",
    terminal_available_commands: "AVAILABLE COMMANDS",
    terminal_console_output: "CONSOLE OUTPUT",
    terminal_system_initialized: "> System initialized...",
    terminal_welcome: "> Welcome to Hacker Terminal v1.0.0",
    terminal_type_command: "> Type a command to begin",
    terminal_executing: "> Executing",

    settings_title: "SETTINGS",
    settings_language: "LANGUAGE",
    settings_theme: "THEME",
    settings_portuguese: "Português",
    settings_english: "English",
    settings_spanish: "Español",
    settings_theme_green: "Neon Green",
    settings_theme_cyan: "Cyan",
    settings_theme_purple: "Purple",
    settings_theme_red: "Red",

    status_ready: "READY",
    status_running: "RUNNING...",
    status_complete: "COMPLETE",
    status_online: "ONLINE",
    status_offline: "OFFLINE",
    status_connecting: "CONNECTING",

    command_titles: [
        "SCAN NETWORK",
        "DECRYPT FILES",
        "BREACH FIREWALL",
        "ACCESS DATABASE",
        "TRACE IP",
        "SYSTEM INFO",
    ],
    command_descriptions: [
        "Discover devices on local network",
        "Decrypt encrypted data files",
        "Penetrate security firewall",
        "Query remote database",
        "Geolocate IP address",
        "Display system information",
    ],
};

static ES: Strings = Strings {
    login_title: "TERMINAL HACKER",
    login_subtitle: "v1.0.0 - ACCESO SEGURO REQUERIDO",
    login_username: "usuario",
    login_password: "contraseña",
    login_button: "ACCESO CONCEDIDO",
    login_credentials_required: "CREDENCIALES REQUERIDAS",
    login_new_to_network: "¿NUEVO EN LA RED?",
    login_create_account: "CREAR CUENTA",
    login_unauthorized: "EL ACCESO NO AUTORIZADO ESTÁ PROHIBIDO",
    login_monitored: "TODAS LAS ACTIVIDADES SON MONITOREADAS",

    signup_title: "CREAR CUENTA",
    signup_subtitle: "ÚNETE A LA RED",
    signup_username: "usuario",
    signup_email: "email@dominio.com",
    signup_password: "contraseña",
    signup_confirm_password: "confirmar contraseña",
    signup_button: "CREAR CUENTA",
    signup_all_fields_required: "TODOS LOS CAMPOS SON REQUERIDOS",
    signup_passwords_mismatch: "LAS CONTRASEÑAS NO COINCIDEN",
    signup_account_created: "CUENTA CREADA EXITOSAMENTE",
    signup_already_have_account: "¿YA TIENES UNA CUENTA?",
    signup_login_here: "INICIA SESIÓN AQUÍ",

    terminal_logout: "CERRAR SESIÓN",
    terminal_available_commands: "COMANDOS DISPONIBLES",
    terminal_console_output: "SALIDA DE CONSOLA",
    terminal_system_initialized: "> Sistema inicializado...",
    terminal_welcome: "> Bienvenido a Terminal Hacker v1.0.0",
    terminal_type_command: "> Escribe un comando para comenzar",
    terminal_executing: "> Ejecutando",

    settings_title: "CONFIGURACIÓN",
    settings_language: "IDIOMA",
    settings_theme: "TEMA",
    settings_portuguese: "Português",
    settings_english: "English",
    settings_spanish: "Español",
    settings_theme_green: "Verde Neón",
    settings_theme_cyan: "Cian",
    settings_theme_purple: "Púrpura",
    settings_theme_red: "Rojo",

    status_ready: "LISTO",
    status_running: "EJECUTANDO...",
    status_complete: "COMPLETADO",
    status_online: "EN LÍNEA",
    status_offline: "DESCONECTADO",
    status_connecting: "CONECTANDO",

    command_titles: [
        "ESCANEAR RED",
        "DESENCRIPTAR ARCHIVOS",
        "ROMPER FIREWALL",
        "ACCEDER A BASE DE DATOS",
        "RASTREAR IP",
        "INFORMACIÓN DEL SISTEMA",
    ],
    command_descriptions: [
        "Descubrir dispositivos en la red local",
        "Desencriptar datos encriptados",
        "Penetrar firewall de seguridad",
        "Consultar base de datos remota",
        "Geolocalizar dirección IP",
        "Mostrar información del sistema",
    ],
};

pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::Pt => &PT,
        Language::En => &EN,
        Language::Es => &ES,
    }
}

fn command_slot(kind: CommandKind) -> usize {
    CommandKind::ALL
        .iter()
        .position(|candidate| *candidate == kind)
        .unwrap_or(0)
}

pub fn command_title(language: Language, kind: CommandKind) -> &'static str {
    strings(language).command_titles[command_slot(kind)]
}

pub fn command_description(language: Language, kind: CommandKind) -> &'static str {
    strings(language).command_descriptions[command_slot(kind)]
}

/// Label for a selectable language row. Language names stay in their own
/// language on every table, so the `language` argument only picks the table.
pub fn language_label(language: Language, target: Language) -> &'static str {
    let table = strings(language);
    match target {
        Language::Pt => table.settings_portuguese,
        Language::En => table.settings_english,
        Language::Es => table.settings_spanish,
    }
}

pub fn theme_label(language: Language, target: ThemeName) -> &'static str {
    let table = strings(language);
    match target {
        ThemeName::Green => table.settings_theme_green,
        ThemeName::Cyan => table.settings_theme_cyan,
        ThemeName::Purple => table.settings_theme_purple,
        ThemeName::Red => table.settings_theme_red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_language_has_its_own_title_row() {
        assert_eq!(strings(Language::Pt).login_title, "TERMINAL HACKER");
        assert_eq!(strings(Language::En).login_title, "HACKER TERMINAL");
        assert_eq!(strings(Language::Es).login_subtitle, "v1.0.0 - ACCESO SEGURO REQUERIDO");
    }

    #[test]
    fn command_titles_follow_the_catalog_order() {
        assert_eq!(command_title(Language::En, CommandKind::Scan), "SCAN NETWORK");
        assert_eq!(command_title(Language::Pt, CommandKind::Sysinfo), "INFORMAÇÕES DO SISTEMA");
        assert_eq!(
            command_description(Language::Es, CommandKind::Trace),
            "Geolocalizar dirección IP"
        );
    }

    #[test]
    fn executing_lines_carry_the_prompt_prefix() {
        for language in Language::ALL {
            let table = strings(language);
            assert!(table.terminal_executing.starts_with("> "));
            assert!(table.terminal_system_initialized.starts_with("> "));
        }
    }

    #[test]
    fn language_names_are_shown_in_their_own_language() {
        for language in Language::ALL {
            assert_eq!(language_label(language, Language::Pt), "Português");
            assert_eq!(language_label(language, Language::Es), "Español");
        }
    }

    #[test]
    fn theme_labels_are_localized() {
        assert_eq!(theme_label(Language::Pt, ThemeName::Green), "Verde Neon");
        assert_eq!(theme_label(Language::En, ThemeName::Green), "Neon Green");
        assert_eq!(theme_label(Language::Es, ThemeName::Purple), "Púrpura");
    }
}
