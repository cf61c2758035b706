// File: crates/race-data/src/loader.rs
// Summary: One-shot dataset loader with a loading/ready/failed state machine.

use thiserror::Error;
use tracing::{debug, info};

use crate::model::RaceRecord;

/// Fixed upstream dataset location.
pub const DATASET_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

/// Failures caught at the loader boundary. Callers never see these
/// propagate; they are folded into `LoadState::Failed` with a message.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("server returned {status}")]
    Response { status: reqwest::StatusCode },
    #[error("malformed dataset: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Loader states. `Ready` and `Failed` are terminal; no retry.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<RaceRecord>),
    Failed(String),
}

/// Single-fetch loader. Constructed in `Loading`, transitions exactly once.
#[derive(Debug)]
pub struct Loader {
    url: String,
    state: LoadState,
}

impl Loader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), state: LoadState::Loading }
    }

    /// Loader pointed at the fixed upstream dataset.
    pub fn for_dataset() -> Self {
        Self::new(DATASET_URL)
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Records are visible only in the `Ready` state.
    pub fn records(&self) -> Option<&[RaceRecord]> {
        match &self.state {
            LoadState::Ready(records) => Some(records),
            _ => None,
        }
    }

    /// Run the fetch. Terminal states are sticky: calling again after
    /// completion leaves the state untouched.
    pub fn load(&mut self) -> &LoadState {
        if matches!(self.state, LoadState::Loading) {
            let result = fetch_records(&self.url);
            self.complete(result);
        }
        &self.state
    }

    /// Complete the loader from an already-obtained result. Used by tests
    /// and by hosts that drive the fetch on their own schedule.
    pub fn complete(&mut self, result: Result<Vec<RaceRecord>, DataError>) -> &LoadState {
        if matches!(self.state, LoadState::Loading) {
            self.state = match result {
                Ok(records) => LoadState::Ready(records),
                Err(err) => LoadState::Failed(err.to_string()),
            };
        }
        &self.state
    }
}

/// One blocking GET for the dataset; every failure maps into `DataError`.
pub fn fetch_records(url: &str) -> Result<Vec<RaceRecord>, DataError> {
    debug!(url, "fetching dataset");
    let response = reqwest::blocking::get(url).map_err(DataError::Fetch)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DataError::Response { status });
    }
    let body = response.text().map_err(DataError::Fetch)?;
    let records = parse_records(&body)?;
    info!(count = records.len(), "dataset loaded");
    Ok(records)
}

/// JSON stage, split out so parsing is testable without a network.
pub fn parse_records(body: &str) -> Result<Vec<RaceRecord>, DataError> {
    serde_json::from_str(body).map_err(DataError::Parse)
}
