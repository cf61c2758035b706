// File: crates/scatter-core/src/chart.rs
// Summary: Chart struct and SVG rendering pipeline (axes, markers, legend, tooltip).

use anyhow::Result;
use svg::node::element::{Circle, Group, Line, Rectangle, Style, Text};
use svg::Document;

use crate::axis::{clock_ticks, format_clock, year_ticks, Axis};
use crate::hover::{HoverController, MarkerTarget};
use crate::point::{derive_points, DerivedPoint};
use crate::scale::{ClockScale, LinearScale};
use crate::theme::Theme;
use crate::tooltip::{Tooltip, TooltipContent};
use crate::types::{Insets, HEIGHT, WIDTH};
use race_data::RaceRecord;

/// Hover transition for markers; the hover controller swaps r/opacity,
/// the stylesheet eases the change.
const DOT_STYLE: &str =
    "circle.dot { transition: r 200ms ease, opacity 200ms ease; cursor: pointer; }";

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    /// Draw title, subtitle, and axis labels. Tick text always draws.
    pub draw_labels: bool,
    pub title: String,
    pub subtitle: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            draw_labels: true,
            title: "Doping in Professional Bicycle Racing".to_string(),
            subtitle: "35 Fastest times up Alpe d'Huez".to_string(),
        }
    }
}

pub struct Chart {
    pub records: Vec<RaceRecord>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub theme: Theme,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            theme: Theme::light(),
        }
    }

    /// Chart over the given records with domains already autoscaled.
    pub fn with_records(records: Vec<RaceRecord>) -> Self {
        let mut chart = Self::new();
        chart.records = records;
        chart.autoscale_axes();
        chart
    }

    /// Set axis domains to the exact min/max of the plottable points.
    /// Records with unparsable times are already excluded here. Leaves
    /// the domains untouched when nothing parses.
    pub fn autoscale_axes(&mut self) {
        let points = derive_points(&self.records);
        if points.is_empty() {
            return;
        }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in &points {
            let year = f64::from(p.record.year);
            let secs = p.clock_seconds();
            x_min = x_min.min(year);
            x_max = x_max.max(year);
            y_min = y_min.min(secs);
            y_max = y_max.max(secs);
        }
        self.x_axis.min = x_min;
        self.x_axis.max = x_max;
        self.y_axis.min = y_min;
        self.y_axis.max = y_max;
    }

    /// Marker geometry and tooltip payloads for the hover controller,
    /// in the same order markers are drawn.
    pub fn marker_targets(&self, opts: &RenderOptions) -> Vec<MarkerTarget> {
        let points = derive_points(&self.records);
        let (xs, ys) = self.scales(opts);
        points
            .iter()
            .map(|p| MarkerTarget {
                cx: xs.to_px(f64::from(p.record.year)),
                cy: ys.to_px(p.clock_seconds()),
                year: p.record.year,
                content: TooltipContent::for_record(&p.record),
            })
            .collect()
    }

    /// Render the chart to an SVG string. The surface is rebuilt from
    /// scratch on every call; identical inputs produce identical output.
    /// An empty record set yields a bare `<svg>` root: no axes, no error.
    pub fn render_to_svg_string(&self, opts: &RenderOptions, hover: &HoverController) -> String {
        let doc = Document::new()
            .set("width", opts.width)
            .set("height", opts.height)
            .set("viewBox", (0, 0, opts.width, opts.height));

        let points = derive_points(&self.records);
        if points.is_empty() {
            return doc.to_string();
        }

        let (xs, ys) = self.scales(opts);
        let mut doc = doc
            .add(Style::new(DOT_STYLE))
            .add(
                Rectangle::new()
                    .set("width", opts.width)
                    .set("height", opts.height)
                    .set("fill", self.theme.background.css()),
            );

        if opts.draw_labels {
            doc = doc.add(draw_titles(opts, &self.theme));
        }
        doc = doc
            .add(draw_x_axis(opts, &self.x_axis, &xs, &self.theme))
            .add(draw_y_axis(opts, &self.y_axis, &ys, &self.theme))
            .add(draw_markers(&points, &xs, &ys, hover, &self.theme))
            .add(draw_legend(opts, &self.theme))
            .add(draw_tooltip(hover.tooltip(), &self.theme));

        doc.to_string()
    }

    /// Render to an SVG file, creating parent directories as needed.
    pub fn render_to_svg(
        &self,
        opts: &RenderOptions,
        hover: &HoverController,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let body = self.render_to_svg_string(opts, hover);
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, body)?;
        Ok(())
    }

    fn scales(&self, opts: &RenderOptions) -> (LinearScale, ClockScale) {
        let left = opts.insets.left as f32;
        let right = (opts.width - opts.insets.right as i32) as f32;
        let top = opts.insets.top as f32;
        let bottom = (opts.height - opts.insets.bottom as i32) as f32;
        (
            LinearScale::new(left, right, self.x_axis.min, self.x_axis.max),
            ClockScale::new(top, bottom, self.y_axis.min, self.y_axis.max),
        )
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_titles(opts: &RenderOptions, theme: &Theme) -> Group {
    let cx = opts.width / 2;
    let mut g = Group::new();
    if !opts.title.is_empty() {
        g = g.add(
            Text::new(opts.title.clone())
                .set("id", "title")
                .set("x", cx)
                .set("y", 28)
                .set("text-anchor", "middle")
                .set("font-size", 22)
                .set("font-weight", "bold")
                .set("fill", theme.title.css()),
        );
    }
    if !opts.subtitle.is_empty() {
        g = g.add(
            Text::new(opts.subtitle.clone())
                .set("x", cx)
                .set("y", 50)
                .set("text-anchor", "middle")
                .set("font-size", 15)
                .set("fill", theme.axis_label.css()),
        );
    }
    g
}

fn draw_x_axis(opts: &RenderOptions, axis: &Axis, xs: &LinearScale, theme: &Theme) -> Group {
    let left = opts.insets.left as f32;
    let right = (opts.width - opts.insets.right as i32) as f32;
    let bottom = (opts.height - opts.insets.bottom as i32) as f32;

    let mut g = Group::new().set("id", "x-axis").add(
        Line::new()
            .set("x1", left)
            .set("y1", bottom)
            .set("x2", right)
            .set("y2", bottom)
            .set("stroke", theme.axis_line.css())
            .set("stroke-width", 1.5),
    );

    for year in year_ticks(axis.min, axis.max, 10) {
        let x = xs.to_px(f64::from(year));
        g = g
            .add(
                Line::new()
                    .set("x1", x)
                    .set("y1", bottom)
                    .set("x2", x)
                    .set("y2", bottom + 6.0)
                    .set("stroke", theme.axis_line.css()),
            )
            .add(
                Text::new(year.to_string())
                    .set("x", x)
                    .set("y", bottom + 20.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 12)
                    .set("fill", theme.tick.css()),
            );
    }

    if opts.draw_labels {
        g = g.add(
            Text::new(axis.label.clone())
                .set("x", (left + right) / 2.0)
                .set("y", bottom + 45.0)
                .set("text-anchor", "middle")
                .set("font-size", 14)
                .set("fill", theme.axis_label.css()),
        );
    }
    g
}

fn draw_y_axis(opts: &RenderOptions, axis: &Axis, ys: &ClockScale, theme: &Theme) -> Group {
    let left = opts.insets.left as f32;
    let top = opts.insets.top as f32;
    let bottom = (opts.height - opts.insets.bottom as i32) as f32;

    let mut g = Group::new().set("id", "y-axis").add(
        Line::new()
            .set("x1", left)
            .set("y1", top)
            .set("x2", left)
            .set("y2", bottom)
            .set("stroke", theme.axis_line.css())
            .set("stroke-width", 1.5),
    );

    for tick in clock_ticks(axis.min, axis.max, 10) {
        let y = ys.to_px(tick);
        g = g
            .add(
                Line::new()
                    .set("x1", left - 6.0)
                    .set("y1", y)
                    .set("x2", left)
                    .set("y2", y)
                    .set("stroke", theme.axis_line.css()),
            )
            .add(
                Text::new(format_clock(tick))
                    .set("x", left - 10.0)
                    .set("y", y + 4.0)
                    .set("text-anchor", "end")
                    .set("font-size", 12)
                    .set("fill", theme.tick.css()),
            );
    }

    if opts.draw_labels {
        g = g.add(
            Text::new(axis.label.clone())
                .set("transform", "rotate(-90)")
                .set("x", -(top + bottom) / 2.0)
                .set("y", 20)
                .set("text-anchor", "middle")
                .set("font-size", 14)
                .set("fill", theme.axis_label.css()),
        );
    }
    g
}

fn draw_markers(
    points: &[DerivedPoint],
    xs: &LinearScale,
    ys: &ClockScale,
    hover: &HoverController,
    theme: &Theme,
) -> Group {
    let mut g = Group::new();
    for (i, p) in points.iter().enumerate() {
        let fill = if p.record.doping_alleged() {
            theme.marker_flagged
        } else {
            theme.marker_clean
        };
        g = g.add(
            Circle::new()
                .set("class", "dot")
                .set("cx", xs.to_px(f64::from(p.record.year)))
                .set("cy", ys.to_px(p.clock_seconds()))
                .set("r", hover.marker_radius(i))
                .set("data-xvalue", p.record.year)
                .set("data-yvalue", p.clock_iso())
                .set("fill", fill.css())
                .set("stroke", theme.marker_stroke.css())
                .set("stroke-width", 2)
                .set("opacity", hover.marker_opacity(i)),
        );
    }
    g
}

fn draw_legend(opts: &RenderOptions, theme: &Theme) -> Group {
    let right = (opts.width - opts.insets.right as i32) as f32;
    let top = opts.insets.top as f32;
    let bottom = (opts.height - opts.insets.bottom as i32) as f32;
    let mut g = Group::new().set("id", "legend").set(
        "transform",
        format!("translate({}, {})", right + 20.0, (top + bottom) / 2.0 - 30.0),
    );

    let entries = [
        (theme.marker_clean, "No doping allegations"),
        (theme.marker_flagged, "Riders with doping allegations"),
    ];
    for (i, (color, label)) in entries.iter().enumerate() {
        let y = i as f32 * 25.0;
        g = g
            .add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", y)
                    .set("width", 18)
                    .set("height", 18)
                    .set("fill", color.css())
                    .set("stroke", theme.marker_stroke.css()),
            )
            .add(
                Text::new(*label)
                    .set("x", 24)
                    .set("y", y + 13.0)
                    .set("font-size", 14)
                    .set("fill", theme.legend_label.css()),
            );
    }
    g
}

fn draw_tooltip(tooltip: &Tooltip, theme: &Theme) -> Group {
    let (x, y) = tooltip.position();
    let mut g = Group::new()
        .set("id", "tooltip")
        .set(
            "visibility",
            if tooltip.is_visible() { "visible" } else { "hidden" },
        )
        .set("transform", format!("translate({x}, {y})"));
    if let Some(year) = tooltip.data_year() {
        g = g.set("data-year", year);
    }

    let Some(content) = tooltip.content() else {
        return g;
    };
    let lines = content.lines();
    let longest = lines.iter().map(String::len).max().unwrap_or(0);
    let width = (longest as f32 * 7.0 + 24.0).min(300.0);
    let height = lines.len() as f32 * 18.0 + 14.0;
    g = g.add(
        Rectangle::new()
            .set("width", width)
            .set("height", height)
            .set("rx", 6)
            .set("fill", theme.tooltip_background.css()),
    );
    for (i, line) in lines.iter().enumerate() {
        let fill = if i + 1 == lines.len() {
            if content.allegation.is_some() {
                theme.tooltip_allegation
            } else {
                theme.tooltip_clean
            }
        } else {
            theme.tooltip_text
        };
        let mut text = Text::new(line.clone())
            .set("x", 12)
            .set("y", 22.0 + i as f32 * 18.0)
            .set("font-size", 14)
            .set("fill", fill.css());
        if i == 0 {
            text = text.set("font-weight", "bold");
        }
        g = g.add(text);
    }
    g
}
