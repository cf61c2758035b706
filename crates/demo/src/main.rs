// File: crates/demo/src/main.rs
// Summary: Demo binary; fetches the cyclist dataset and writes the chart SVG.

use std::path::PathBuf;

use anyhow::{Context, Result};
use race_data::{LoadState, Loader};
use scatter_core::{Chart, HoverController, RenderOptions};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Accept an output path or fall back to target/out.
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/alpe_dhuez.svg"));

    let mut loader = Loader::for_dataset();
    match loader.load() {
        LoadState::Ready(records) => {
            info!(count = records.len(), "dataset ready");
            let chart = Chart::with_records(records.clone());
            let opts = RenderOptions::default();
            let hover = HoverController::new();
            chart
                .render_to_svg(&opts, &hover, &out)
                .with_context(|| format!("writing chart to {}", out.display()))?;
            info!(path = %out.display(), "chart written");
            Ok(())
        }
        LoadState::Failed(message) => {
            error!(%message, "dataset load failed");
            anyhow::bail!("dataset load failed: {message}");
        }
        LoadState::Loading => anyhow::bail!("loader did not complete"),
    }
}
