// File: crates/scatter-core/src/tooltip.rs
// Summary: Tooltip overlay model; content, position, visibility.

use race_data::RaceRecord;

/// Fallback line shown when a record carries no allegation text.
pub const NO_ALLEGATION: &str = "No doping allegations";

/// Text block shown for a hovered marker.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    /// `"Name: Nationality"`.
    pub headline: String,
    /// `"Year: YYYY, Time: MM:SS"`.
    pub year_time: String,
    /// `"Rank: N"`.
    pub rank: String,
    /// Allegation text, verbatim; `None` when the record is clean.
    pub allegation: Option<String>,
}

impl TooltipContent {
    pub fn for_record(record: &RaceRecord) -> Self {
        Self {
            headline: format!("{}: {}", record.name, record.nationality),
            year_time: format!("Year: {}, Time: {}", record.year, record.time),
            rank: format!("Rank: {}", record.place),
            allegation: record
                .doping_alleged()
                .then(|| record.doping.clone()),
        }
    }

    /// Lines in display order; the last line falls back to the
    /// no-allegation message.
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.headline.clone(),
            self.year_time.clone(),
            self.rank.clone(),
            self.allegation
                .clone()
                .unwrap_or_else(|| NO_ALLEGATION.to_string()),
        ]
    }
}

/// The one tooltip overlay for a chart surface. The hover controller
/// creates it once and reuses it; it is hidden rather than removed when
/// no marker is hovered, and released only when the controller drops.
#[derive(Clone, Debug)]
pub struct Tooltip {
    visible: bool,
    x: f32,
    y: f32,
    content: Option<TooltipContent>,
    data_year: Option<i32>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self { visible: false, x: 0.0, y: 0.0, content: None, data_year: None }
    }

    pub fn show(&mut self, content: TooltipContent, year: i32, x: f32, y: f32) {
        self.visible = true;
        self.content = Some(content);
        self.data_year = Some(year);
        self.x = x;
        self.y = y;
    }

    /// Track the pointer while visible; ignored otherwise.
    pub fn follow(&mut self, x: f32, y: f32) {
        if self.visible {
            self.x = x;
            self.y = y;
        }
    }

    /// Hide without discarding the overlay. The year exposure is
    /// cleared; stale content may remain until the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
        self.data_year = None;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    /// Hovered record's year, exposed only while visible.
    pub fn data_year(&self) -> Option<i32> {
        self.data_year
    }
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}
