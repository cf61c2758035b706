// File: crates/scatter-core/tests/markers.rs
// Purpose: Marker count, colors, and exposed data attributes.

use race_data::RaceRecord;
use scatter_core::{Chart, HoverController, RenderOptions};

fn record(time: &str, year: i32, name: &str, doping: &str) -> RaceRecord {
    RaceRecord {
        time: time.to_string(),
        place: 1,
        seconds: 0.0,
        name: name.to_string(),
        year,
        nationality: "X".to_string(),
        doping: doping.to_string(),
        url: String::new(),
    }
}

fn render(records: Vec<RaceRecord>) -> String {
    let chart = Chart::with_records(records);
    chart.render_to_svg_string(&RenderOptions::default(), &HoverController::new())
}

#[test]
fn one_marker_per_parsable_record() {
    let svg = render(vec![
        record("36:50", 1995, "A", ""),
        record("bogus", 1996, "B", ""),
        record("37:15", 1997, "C", "EPO use"),
    ]);
    assert_eq!(svg.matches("class=\"dot\"").count(), 2);
}

#[test]
fn fill_color_keyed_by_doping_text() {
    let svg = render(vec![
        record("36:50", 1995, "A", ""),
        record("37:15", 1997, "C", "EPO use"),
    ]);
    assert!(svg.contains("fill=\"#22c55e\""));
    assert!(svg.contains("fill=\"#f97316\""));

    let flagged_only = render(vec![record("37:15", 1997, "C", "EPO use")]);
    // One flagged marker plus the legend swatches.
    assert!(flagged_only.contains("fill=\"#f97316\""));
    let circle = flagged_only
        .split("<circle")
        .nth(1)
        .expect("one marker circle");
    assert!(circle.contains("fill=\"#f97316\""));
}

#[test]
fn single_record_scenario() {
    // A lone 36:00 ascent in 1994 maps to the plot origin corner: the
    // degenerate domains pin it to the left edge and the top.
    let svg = render(vec![record("36:00", 1994, "A", "")]);
    assert_eq!(svg.matches("class=\"dot\"").count(), 1);

    let circle = svg.split("<circle").nth(1).expect("marker circle");
    let circle = circle.split("/>").next().expect("circle attributes");
    assert!(circle.contains("fill=\"#22c55e\""));
    assert!(circle.contains("data-xvalue=\"1994\""));
    assert!(circle.contains("data-yvalue=\"1900-01-01T00:36:00.000Z\""));
    assert!(circle.contains("cx=\"80\""));
    assert!(circle.contains("cy=\"70\""));
    assert!(circle.contains("r=\"6\""));
    assert!(circle.contains("opacity=\"0.8\""));
}

#[test]
fn markers_expose_year_and_parsed_time() {
    let svg = render(vec![
        record("36:50", 1995, "A", ""),
        record("37:15", 1997, "C", "EPO use"),
    ]);
    assert!(svg.contains("data-xvalue=\"1995\""));
    assert!(svg.contains("data-yvalue=\"1900-01-01T00:36:50.000Z\""));
    assert!(svg.contains("data-xvalue=\"1997\""));
    assert!(svg.contains("data-yvalue=\"1900-01-01T00:37:15.000Z\""));
}
