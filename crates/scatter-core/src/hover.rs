// File: crates/scatter-core/src/hover.rs
// Summary: Per-marker hover state machine driven by pointer events.

use crate::tooltip::{Tooltip, TooltipContent};

/// Baseline marker geometry.
pub const IDLE_RADIUS: f32 = 6.0;
pub const IDLE_OPACITY: f32 = 0.8;
/// Hovered marker geometry.
pub const HOVER_RADIUS: f32 = 8.0;
pub const HOVER_OPACITY: f32 = 1.0;

/// Tooltip offset from the pointer, in pixels.
const TOOLTIP_DX: f32 = 10.0;
const TOOLTIP_DY: f32 = -10.0;

/// Externally visible per-marker states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerState {
    Idle,
    Hovered,
}

/// Pointer events in surface pixel coordinates.
#[derive(Clone, Copy, Debug)]
pub enum PointerEvent {
    Enter { marker: usize, x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Leave,
}

/// Hit geometry and tooltip payload for one marker, in draw order.
#[derive(Clone, Debug)]
pub struct MarkerTarget {
    pub cx: f32,
    pub cy: f32,
    pub year: i32,
    pub content: TooltipContent,
}

/// Tracks which marker (if any) is hovered and owns the tooltip
/// overlay. Exactly one tooltip exists per controller; it is created
/// here and released when the controller drops.
#[derive(Debug)]
pub struct HoverController {
    markers: Vec<MarkerTarget>,
    hovered: Option<usize>,
    tooltip: Tooltip,
}

impl HoverController {
    pub fn new() -> Self {
        Self { markers: Vec::new(), hovered: None, tooltip: Tooltip::new() }
    }

    /// Replace marker geometry after a redraw. A hovered marker that
    /// vanished resets the state to idle.
    pub fn set_markers(&mut self, markers: Vec<MarkerTarget>) {
        if self.hovered.is_some_and(|i| i >= markers.len()) {
            self.hovered = None;
            self.tooltip.hide();
        }
        self.markers = markers;
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn marker_state(&self, index: usize) -> MarkerState {
        if self.hovered == Some(index) {
            MarkerState::Hovered
        } else {
            MarkerState::Idle
        }
    }

    pub fn marker_radius(&self, index: usize) -> f32 {
        match self.marker_state(index) {
            MarkerState::Hovered => HOVER_RADIUS,
            MarkerState::Idle => IDLE_RADIUS,
        }
    }

    pub fn marker_opacity(&self, index: usize) -> f32 {
        match self.marker_state(index) {
            MarkerState::Hovered => HOVER_OPACITY,
            MarkerState::Idle => IDLE_OPACITY,
        }
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Index of the marker under the pointer, if any.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        self.markers.iter().position(|m| {
            let dx = x - m.cx;
            let dy = y - m.cy;
            dx * dx + dy * dy <= IDLE_RADIUS * IDLE_RADIUS
        })
    }

    /// Drive the state machine. `Enter` populates and shows the
    /// tooltip, `Move` makes it follow the pointer, `Leave` hides it
    /// and reverts the marker to idle.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter { marker, x, y } => {
                let Some(target) = self.markers.get(marker) else { return };
                self.hovered = Some(marker);
                self.tooltip.show(
                    target.content.clone(),
                    target.year,
                    x + TOOLTIP_DX,
                    y + TOOLTIP_DY,
                );
            }
            PointerEvent::Move { x, y } => {
                if self.hovered.is_some() {
                    self.tooltip.follow(x + TOOLTIP_DX, y + TOOLTIP_DY);
                }
            }
            PointerEvent::Leave => {
                self.hovered = None;
                self.tooltip.hide();
            }
        }
    }
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new()
    }
}
