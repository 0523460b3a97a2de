//! Hacker-terminal simulator.
//!
//! A retro terminal playground: local accounts, a six-command dashboard,
//! and scripted playbacks that fake scans, decryptions and breaches with
//! timed reveals. Wiring lives in `main`; everything here is testable
//! without a terminal.

pub mod app;
pub mod commands;
pub mod config;
pub mod i18n;
pub mod library;
pub mod logging;
pub mod runtime;
pub mod sound;
pub mod theme;
pub mod tui;
