// File: crates/race-data/src/lib.rs
// Summary: Data crate entry point; exports the record model and loader.

pub mod loader;
pub mod model;

pub use loader::{fetch_records, parse_records, DataError, LoadState, Loader, DATASET_URL};
pub use model::RaceRecord;
