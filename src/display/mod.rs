//! Display formatting for terminal output
//!
//! Turns run reports and bundle checks into text for the CLI.

pub mod report;

pub use report::{format_bundle_checks, format_run_report};
