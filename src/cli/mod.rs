//! CLI command handlers
//!
//! Bridges the clap argument parsing in `main` with the session and the
//! interactive menu.

pub mod commands;
pub mod menu;

pub use commands::{handle_config_command, handle_summary_command};
pub use menu::{MenuChoice, MenuController};
