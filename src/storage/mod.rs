//! Storage layer for bundle-restore
//!
//! The `StoreClient` contract the restore path writes through, and a JSON
//! file store implementing it with atomic writes.

pub mod client;
pub mod file_io;
pub mod json_store;
pub mod table;

pub use client::StoreClient;
pub use file_io::{read_json, read_json_required, write_json_atomic};
pub use json_store::JsonStore;
pub use table::Table;
