//! Validate CLI command
//!
//! Loads every bundle in the backup folder and reports what it holds,
//! without opening or writing the store.

use std::path::Path;

use crate::display::format_bundle_checks;
use crate::restore::{validate_bundles, BundleCheck, JsonBundleLoader};

/// Handle the validate command, returning the checks that were printed
pub fn handle_validate_command(backup_dir: &Path) -> Vec<BundleCheck> {
    println!("Validating bundles in {}", backup_dir.display());
    let checks = validate_bundles(backup_dir, &JsonBundleLoader);
    print!("{}", format_bundle_checks(&checks));
    checks
}
