//! bundle-restore - Restore backed-up course data bundles into a store
//!
//! This library walks a backup folder, loads each serialized data bundle and
//! re-creates its records through a storage client. Failures are caught per
//! record or per category and collected in a run report; one bad file or
//! record never stops the rest of the run.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and settings
//! - `error`: Custom error types
//! - `models`: Entity records and the data bundle
//! - `storage`: Store client contract and the JSON file store
//! - `persist`: Per-category persisters
//! - `restore`: Backup discovery, bundle loading and the restore run
//! - `report`: Structured run report
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//! - `telemetry`: Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,ignore
//! use bundle_restore::config::{RestorePaths, Settings};
//! use bundle_restore::restore::{JsonBundleLoader, RestoreOrchestrator};
//! use bundle_restore::storage::JsonStore;
//!
//! let paths = RestorePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = JsonStore::open(settings.store_dir(&paths))?;
//! let report = RestoreOrchestrator::new(&store, &JsonBundleLoader).run(&settings.backup_dir(&paths));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod persist;
pub mod report;
pub mod restore;
pub mod storage;
pub mod telemetry;

pub use error::{RestoreError, RestoreResult, StoreError, StoreResult};
pub use report::RunReport;
