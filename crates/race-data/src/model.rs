// File: crates/race-data/src/model.rs
// Summary: Race record model matching the upstream cyclist dataset JSON.

use serde::Deserialize;

/// One rider's timed ascent entry, exactly as published upstream.
/// JSON keys are PascalCase (`Time`, `Place`, ..., `URL`).
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RaceRecord {
    /// Clock duration as `"MM:SS"`.
    pub time: String,
    /// Finishing rank.
    pub place: u32,
    /// Duration in seconds.
    pub seconds: f64,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    /// Allegation description; empty string means no allegation.
    pub doping: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl RaceRecord {
    /// True when the record carries a doping allegation.
    pub fn doping_alleged(&self) -> bool {
        !self.doping.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_pascal_case_keys() {
        let json = r#"{
            "Time": "36:50",
            "Place": 1,
            "Seconds": 2210,
            "Name": "Marco Pantani",
            "Year": 1995,
            "Nationality": "ITA",
            "Doping": "Alleged drug use during 1995 due to high hematocrit levels",
            "URL": "https://en.wikipedia.org/wiki/Marco_Pantani#Alleged_drug_use"
        }"#;
        let record: RaceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.time, "36:50");
        assert_eq!(record.place, 1);
        assert_eq!(record.seconds, 2210.0);
        assert_eq!(record.year, 1995);
        assert_eq!(record.nationality, "ITA");
        assert!(record.doping_alleged());
    }

    #[test]
    fn empty_doping_means_no_allegation() {
        let json = r#"{
            "Time": "36:55",
            "Place": 2,
            "Seconds": 2215,
            "Name": "Nairo Quintana",
            "Year": 2015,
            "Nationality": "COL",
            "Doping": "",
            "URL": ""
        }"#;
        let record: RaceRecord = serde_json::from_str(json).unwrap();
        assert!(!record.doping_alleged());
    }
}
