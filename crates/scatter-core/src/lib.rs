// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the scatterplot API.

pub mod axis;
pub mod chart;
pub mod hover;
pub mod point;
pub mod scale;
pub mod theme;
pub mod tooltip;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use hover::{HoverController, MarkerState, MarkerTarget, PointerEvent};
pub use point::{derive_points, parse_race_time, DerivedPoint};
pub use scale::{ClockScale, LinearScale};
pub use theme::Theme;
pub use tooltip::{Tooltip, TooltipContent};
pub use types::{Color, Insets, HEIGHT, WIDTH};
