//! Restore orchestrator
//!
//! Walks the backup root source by source and file by file, loads each file
//! into a bundle, and persists the bundle's non-empty categories in restore
//! order. A failure in one file never stops the files after it.

use std::mem;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::models::{Category, DataBundle};
use crate::persist::Persister;
use crate::report::{CategoryOutcome, FileOutcome, FileReport, RunReport, SourceFailure};
use crate::storage::StoreClient;

use super::discovery::{list_bundle_files, list_sources, BackupSource};
use super::loader::BundleLoader;

/// Drives a restore run over a backup root
pub struct RestoreOrchestrator<'a, S: ?Sized, L: ?Sized> {
    store: &'a S,
    loader: &'a L,
}

impl<'a, S, L> RestoreOrchestrator<'a, S, L>
where
    S: StoreClient + ?Sized,
    L: BundleLoader + ?Sized,
{
    /// Create an orchestrator; the store handle is reused for the whole run
    pub fn new(store: &'a S, loader: &'a L) -> Self {
        Self { store, loader }
    }

    /// Restore every bundle file of every source below `root`
    ///
    /// Always returns a report; failures are recorded in it, never raised.
    pub fn run(&self, root: &Path) -> RunReport {
        let mut report = RunReport::new(root);
        info!(root = %root.display(), run_id = %report.run_id, "Starting restore");

        if !root.is_dir() {
            warn!(root = %root.display(), "Backup folder not found, nothing to restore");
            report.finish();
            return report;
        }

        match list_sources(root) {
            Ok(sources) => {
                for source in &sources {
                    self.restore_source(source, &mut report);
                }
            }
            Err(err) => {
                warn!(root = %root.display(), "Error in reading backup folder: {}", err);
                report.source_failures.push(SourceFailure {
                    source: root.display().to_string(),
                    message: err.to_string(),
                });
            }
        }

        report.finish();
        info!("Restore finished: {}", report.summary());
        report
    }

    fn restore_source(&self, source: &BackupSource, report: &mut RunReport) {
        let files = match list_bundle_files(&source.path) {
            Ok(files) => files,
            Err(err) => {
                warn!(source = %source.name, "Error in reading backup source: {}", err);
                report.source_failures.push(SourceFailure {
                    source: source.name.clone(),
                    message: err.to_string(),
                });
                return;
            }
        };

        debug!(source = %source.name, files = files.len(), "Restoring source");
        for file in &files {
            report.files.push(self.restore_file(&source.name, file));
        }
    }

    /// Load one file and persist its bundle
    pub fn restore_file(&self, source: &str, path: &Path) -> FileReport {
        let outcome = match self.loader.load(path) {
            Ok(bundle) => {
                info!(
                    source = %source,
                    file = %path.display(),
                    records = bundle.total_records(),
                    "Restoring bundle"
                );
                FileOutcome::Restored {
                    categories: self.restore_bundle(bundle),
                }
            }
            Err(err) => {
                warn!(source = %source, file = %path.display(), "Error in uploading files: {}", err);
                FileOutcome::LoadFailed {
                    message: err.to_string(),
                }
            }
        };

        FileReport {
            source: source.to_string(),
            path: path.to_path_buf(),
            outcome,
        }
    }

    /// Persist a bundle's non-empty categories in restore order
    pub fn restore_bundle(&self, mut bundle: DataBundle) -> Vec<CategoryOutcome> {
        let persister = Persister::new(self.store);
        let mut outcomes = Vec::new();

        for category in Category::RESTORE_ORDER {
            if bundle.is_empty(category) {
                continue;
            }

            let outcome = match category {
                Category::Account => persister.persist_accounts(mem::take(&mut bundle.accounts)),
                Category::Course => persister.persist_courses(mem::take(&mut bundle.courses)),
                Category::Instructor => {
                    persister.persist_instructors(mem::take(&mut bundle.instructors))
                }
                Category::Student => persister.persist_students(mem::take(&mut bundle.students)),
                Category::Evaluation => {
                    persister.persist_evaluations(mem::take(&mut bundle.evaluations))
                }
                Category::FeedbackSession => {
                    persister.persist_feedback_sessions(mem::take(&mut bundle.feedback_sessions))
                }
                Category::FeedbackQuestion => {
                    persister.persist_feedback_questions(mem::take(&mut bundle.feedback_questions))
                }
                Category::FeedbackResponse => {
                    persister.persist_feedback_responses(mem::take(&mut bundle.feedback_responses))
                }
                Category::FeedbackResponseComment => persister
                    .persist_feedback_response_comments(mem::take(
                        &mut bundle.feedback_response_comments,
                    )),
                Category::Submission => {
                    persister.persist_submissions(mem::take(&mut bundle.submissions))
                }
                Category::Comment => persister.persist_comments(mem::take(&mut bundle.comments)),
            };

            outcomes.push(outcome);
        }

        outcomes
    }
}
