// File: crates/scatter-core/src/point.rs
// Summary: Derived plot points; "MM:SS" parsing into a clock value.

use chrono::{NaiveTime, Timelike};
use race_data::RaceRecord;
use tracing::warn;

/// Race record plus its parsed ascent time, ready for plotting.
/// Recomputed on every render pass; never persisted.
#[derive(Clone, Debug)]
pub struct DerivedPoint {
    pub record: RaceRecord,
    pub clock: NaiveTime,
}

impl DerivedPoint {
    /// Clock value as seconds of day (the Y domain unit).
    pub fn clock_seconds(&self) -> f64 {
        f64::from(self.clock.num_seconds_from_midnight())
    }

    /// ISO timestamp anchored at 1900-01-01, the upstream convention
    /// for the `data-yvalue` attribute.
    pub fn clock_iso(&self) -> String {
        format!("1900-01-01T{}.000Z", self.clock.format("%H:%M:%S"))
    }
}

/// Parse a `"MM:SS"` race time into a time of day. Minutes past 59
/// carry into the hour field; seconds must stay below 60.
pub fn parse_race_time(text: &str) -> Option<NaiveTime> {
    let (m, s) = text.trim().split_once(':')?;
    let minutes: u32 = m.parse().ok()?;
    let seconds: u32 = s.parse().ok()?;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, seconds)
}

/// Project records into plot points. Records whose time fails to parse
/// are dropped here, before any domain computation, and logged.
pub fn derive_points(records: &[RaceRecord]) -> Vec<DerivedPoint> {
    records
        .iter()
        .filter_map(|record| match parse_race_time(&record.time) {
            Some(clock) => Some(DerivedPoint { record: record.clone(), clock }),
            None => {
                warn!(name = %record.name, time = %record.time, "unparsable race time, skipping record");
                None
            }
        })
        .collect()
}
