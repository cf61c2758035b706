// File: crates/scatter-core/tests/svg_output.rs
// Purpose: Surface structure, idempotence, and empty-input behavior.

use race_data::RaceRecord;
use scatter_core::{Chart, HoverController, RenderOptions};

fn record(time: &str, year: i32, doping: &str) -> RaceRecord {
    RaceRecord {
        time: time.to_string(),
        place: 1,
        seconds: 0.0,
        name: "Rider".to_string(),
        year,
        nationality: "FRA".to_string(),
        doping: doping.to_string(),
        url: String::new(),
    }
}

#[test]
fn surface_has_identifiable_sub_elements() {
    let chart = Chart::with_records(vec![
        record("36:50", 1995, ""),
        record("37:30", 2004, "Blood doping"),
    ]);
    let svg = chart.render_to_svg_string(&RenderOptions::default(), &HoverController::new());

    assert!(svg.contains("id=\"title\""));
    assert!(svg.contains("id=\"x-axis\""));
    assert!(svg.contains("id=\"y-axis\""));
    assert!(svg.contains("id=\"legend\""));
    assert!(svg.contains("id=\"tooltip\""));
    assert!(svg.contains("No doping allegations"));
    assert!(svg.contains("Riders with doping allegations"));
    assert!(svg.contains("Time in Minutes"));
    assert!(svg.contains(">Year<"));
    // Hover easing is declared on the surface.
    assert!(svg.contains("transition: r 200ms ease"));
}

#[test]
fn tick_labels_use_expected_formats() {
    let chart = Chart::with_records(vec![
        record("36:50", 1990, ""),
        record("39:50", 2010, ""),
    ]);
    let svg = chart.render_to_svg_string(&RenderOptions::default(), &HoverController::new());

    // Integer years, no separators.
    assert!(svg.contains(">1990<"));
    assert!(svg.contains(">2010<"));
    // MM:SS clock ticks; the 180 s span steps at 30 s.
    assert!(svg.contains(">37:00<"));
    assert!(svg.contains(">39:30<"));
}

#[test]
fn empty_input_draws_nothing_and_does_not_fail() {
    let chart = Chart::new();
    let svg = chart.render_to_svg_string(&RenderOptions::default(), &HoverController::new());

    assert!(svg.starts_with("<svg"));
    assert!(!svg.contains("x-axis"));
    assert!(!svg.contains("y-axis"));
    assert!(!svg.contains("legend"));
    assert!(!svg.contains("class=\"dot\""));
}

#[test]
fn rendering_is_idempotent() {
    let chart = Chart::with_records(vec![
        record("36:50", 1995, ""),
        record("37:30", 2004, "Blood doping"),
        record("38:05", 2013, ""),
    ]);
    let opts = RenderOptions::default();
    let hover = HoverController::new();

    let first = chart.render_to_svg_string(&opts, &hover);
    let second = chart.render_to_svg_string(&opts, &hover);
    assert_eq!(first, second);
}

#[test]
fn label_drawing_can_be_disabled() {
    let chart = Chart::with_records(vec![record("36:50", 1995, "")]);
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let svg = chart.render_to_svg_string(&opts, &HoverController::new());

    assert!(!svg.contains("id=\"title\""));
    assert!(!svg.contains("Time in Minutes"));
    // Tick text still draws.
    assert!(svg.contains(">1995<"));
}
