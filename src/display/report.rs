//! Run report and bundle check formatting

use std::path::Path;

use crate::report::{FileOutcome, RunReport};
use crate::restore::BundleCheck;

/// Format a run report: one line per file, one indented line per failure
pub fn format_run_report(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Restore run {}\n", report.run_id));
    output.push_str(&format!("Backup folder: {}\n", report.backup_root.display()));

    if report.files.is_empty() && report.source_failures.is_empty() {
        output.push_str("No backup files found.\n");
    }

    for failure in &report.source_failures {
        output.push_str(&format!(
            "  [{}] unreadable source: {}\n",
            failure.source, failure.message
        ));
    }

    for file in &report.files {
        let name = display_name(&file.path);
        match &file.outcome {
            FileOutcome::Restored { categories } => {
                let created: usize = categories.iter().map(|c| c.created).sum();
                let failures: usize = categories.iter().map(|c| c.failures.len()).sum();
                output.push_str(&format!(
                    "  [{}] {}: {} record(s) created, {} failure(s)\n",
                    file.source, name, created, failures
                ));
                for category in categories {
                    for failure in &category.failures {
                        output.push_str(&format!(
                            "      {} ({}): {}: {}\n",
                            category.category, failure.kind, failure.context, failure.message
                        ));
                    }
                }
            }
            FileOutcome::LoadFailed { message } => {
                output.push_str(&format!(
                    "  [{}] {}: not loaded: {}\n",
                    file.source, name, message
                ));
            }
        }
    }

    output.push_str(&format!("{}\n", report.summary()));
    output
}

/// Format the result of validating bundles
pub fn format_bundle_checks(checks: &[BundleCheck]) -> String {
    if checks.is_empty() {
        return "No backup files found.\n".to_string();
    }

    let name_width = checks
        .iter()
        .map(|c| c.source.len() + display_name(&c.path).len() + 1)
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    for check in checks {
        let name = format!("{}/{}", check.source, display_name(&check.path));
        match &check.result {
            Ok(summary) => output.push_str(&format!(
                "{:<name_width$}  OK       {}\n",
                name,
                summary.describe(),
                name_width = name_width
            )),
            Err(message) => output.push_str(&format!(
                "{:<name_width$}  INVALID  {}\n",
                name,
                message,
                name_width = name_width
            )),
        }
    }

    let invalid = checks.iter().filter(|c| !c.is_valid()).count();
    output.push_str(&format!(
        "{} bundle(s) checked, {} invalid\n",
        checks.len(),
        invalid
    ));
    output
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
