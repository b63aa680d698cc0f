//! Restore CLI command
//!
//! Runs a restore over the backup folder into the JSON store, prints the
//! outcome and writes the run report.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::paths::RestorePaths;
use crate::config::settings::Settings;
use crate::display::format_run_report;
use crate::error::RestoreResult;
use crate::report::RunReport;
use crate::restore::{JsonBundleLoader, RestoreOrchestrator};
use crate::storage::JsonStore;

/// Resolved options for one restore run
#[derive(Debug, Clone)]
pub struct RestoreOptions {
    pub backup_dir: PathBuf,
    pub store_dir: PathBuf,
    /// Where to write the report; `None` means the reports directory
    pub report_path: Option<PathBuf>,
    pub write_report: bool,
}

impl RestoreOptions {
    /// Combine settings with command-line overrides
    ///
    /// An explicit report path is always written, even when settings
    /// disable the default report.
    pub fn resolve(
        paths: &RestorePaths,
        settings: &Settings,
        backup_dir: Option<PathBuf>,
        store_dir: Option<PathBuf>,
        report_path: Option<PathBuf>,
        no_report: bool,
    ) -> Self {
        Self {
            backup_dir: backup_dir.unwrap_or_else(|| settings.backup_dir(paths)),
            store_dir: store_dir.unwrap_or_else(|| settings.store_dir(paths)),
            write_report: report_path.is_some() || (settings.write_report && !no_report),
            report_path,
        }
    }
}

/// Handle the restore command
///
/// Only opening the store can fail. Everything that goes wrong during the
/// run itself is recorded in the returned report.
pub fn handle_restore_command(
    paths: &RestorePaths,
    options: &RestoreOptions,
) -> RestoreResult<RunReport> {
    let store = JsonStore::open(&options.store_dir)?;
    info!(
        "Restoring {} into {}",
        options.backup_dir.display(),
        options.store_dir.display()
    );

    let report = RestoreOrchestrator::new(&store, &JsonBundleLoader).run(&options.backup_dir);
    print!("{}", format_run_report(&report));

    if options.write_report {
        let path = options
            .report_path
            .clone()
            .unwrap_or_else(|| paths.reports_dir().join(report.file_name()));
        match report.write_json(&path) {
            Ok(()) => println!("Report written to {}", path.display()),
            Err(e) => warn!("Could not write run report to {}: {}", path.display(), e),
        }
    }

    Ok(report)
}
