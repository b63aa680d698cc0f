//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the restore layer.

pub mod restore;
pub mod validate;

pub use restore::{handle_restore_command, RestoreOptions};
pub use validate::handle_validate_command;
