// File: crates/scatter-core/src/axis.rs
// Summary: Axis model with labels, ranges, and tick layout.

/// Axis with a label and a data-domain range.
#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Year", 1990.0, 2020.0)
    }

    pub fn default_y() -> Self {
        // Domain unit is seconds of day.
        Self::new("Time in Minutes", 2100.0, 2400.0)
    }
}

/// Integer year ticks at a step keeping the count near `target`.
pub fn year_ticks(min: f64, max: f64, target: usize) -> Vec<i32> {
    const STEPS: [i32; 6] = [1, 2, 5, 10, 20, 50];
    let lo = min.floor() as i32;
    let hi = max.ceil() as i32;
    let span = (hi - lo).max(1);
    let target = target.max(2) as i32;
    let step = STEPS
        .iter()
        .copied()
        .find(|s| span / s <= target - 1)
        .unwrap_or(50);
    let first = lo + (step - lo.rem_euclid(step)) % step;
    let mut out = Vec::new();
    let mut t = first;
    while t <= hi {
        out.push(t);
        t += step;
    }
    out
}

/// Clock ticks (seconds of day) at a step from common time intervals.
pub fn clock_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    const STEPS: [f64; 6] = [5.0, 15.0, 30.0, 60.0, 120.0, 300.0];
    let span = (max - min).max(1.0);
    let target = target.max(2) as f64;
    let step = STEPS
        .iter()
        .copied()
        .find(|s| span / s <= target - 1.0)
        .unwrap_or(300.0);
    let mut out = Vec::new();
    let mut t = (min / step).ceil() * step;
    while t <= max + 1e-9 {
        out.push(t);
        t += step;
    }
    out
}

/// Format a seconds-of-day tick as `MM:SS`.
pub fn format_clock(secs: f64) -> String {
    let total = secs.round() as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
