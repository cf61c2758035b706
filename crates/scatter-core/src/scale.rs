// File: crates/scatter-core/src/scale.rs
// Summary: Linear (year) and clock-time scale transforms for the plot.

/// Horizontal linear scale mapping a year domain to [left, right] pixels.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub left_px: f32,
    pub right_px: f32,
    pub dmin: f64,
    pub dmax: f64,
}

impl LinearScale {
    pub fn new(left_px: f32, right_px: f32, dmin: f64, dmax: f64) -> Self {
        let mut s = Self { left_px, right_px, dmin, dmax };
        if (s.dmax - s.dmin).abs() < 1e-9 { s.dmax = s.dmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, x: f64) -> f32 {
        let span = (self.dmax - self.dmin).max(1e-9);
        self.left_px + ((x - self.dmin) / span) as f32 * (self.right_px - self.left_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.dmax - self.dmin).max(1e-9);
        self.dmin + ((px - self.left_px) / (self.right_px - self.left_px)) as f64 * span
    }
}

/// Vertical clock scale mapping seconds-of-day to [top, bottom] pixels.
/// Smaller (faster) times sit at the top of the plot.
#[derive(Clone, Copy, Debug)]
pub struct ClockScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub tmin: f64,
    pub tmax: f64,
}

impl ClockScale {
    pub fn new(top_px: f32, bottom_px: f32, tmin: f64, tmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, tmin, tmax };
        if (s.tmax - s.tmin).abs() < 1e-9 { s.tmax = s.tmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, secs: f64) -> f32 {
        let span = (self.tmax - self.tmin).max(1e-9);
        self.top_px + ((secs - self.tmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.tmax - self.tmin).max(1e-9);
        self.tmin + ((py - self.top_px) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
