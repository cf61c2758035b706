// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::types::Color;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub title: Color,
    pub marker_clean: Color,
    pub marker_flagged: Color,
    pub marker_stroke: Color,
    pub legend_label: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub tooltip_allegation: Color,
    pub tooltip_clean: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_line: Color::from_argb(255, 0x64, 0x74, 0x8b),
            axis_label: Color::from_argb(255, 0x47, 0x55, 0x69),
            tick: Color::from_argb(255, 0x64, 0x74, 0x8b),
            title: Color::from_argb(255, 0x1e, 0x29, 0x3b),
            marker_clean: Color::from_argb(255, 0x22, 0xc5, 0x5e),
            marker_flagged: Color::from_argb(255, 0xf9, 0x73, 0x16),
            marker_stroke: Color::from_argb(255, 0xff, 0xff, 0xff),
            legend_label: Color::from_argb(255, 0x47, 0x55, 0x69),
            tooltip_background: Color::from_argb(230, 0, 0, 0),
            tooltip_text: Color::from_argb(255, 0xff, 0xff, 0xff),
            tooltip_allegation: Color::from_argb(255, 0xfb, 0xbf, 0x24),
            tooltip_clean: Color::from_argb(255, 0x86, 0xef, 0xac),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 210, 210, 220),
            tick: Color::from_argb(255, 150, 150, 160),
            title: Color::from_argb(255, 235, 235, 245),
            marker_clean: Color::from_argb(255, 0x22, 0xc5, 0x5e),
            marker_flagged: Color::from_argb(255, 0xf9, 0x73, 0x16),
            marker_stroke: Color::from_argb(255, 18, 18, 20),
            legend_label: Color::from_argb(255, 210, 210, 220),
            tooltip_background: Color::from_argb(230, 250, 250, 252),
            tooltip_text: Color::from_argb(255, 20, 20, 30),
            tooltip_allegation: Color::from_argb(255, 0xb4, 0x5d, 0x09),
            tooltip_clean: Color::from_argb(255, 0x15, 0x80, 0x3d),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
