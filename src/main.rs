use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use scan_layout::data::loader;
use scan_layout::label::AxisLabel;
use scan_layout::PlotLayout;

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    layout: PlotLayout,
    axis_labels: Vec<AxisLabel>,
}

fn main() -> Result<()> {
    env_logger::init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: scan-layout <metadata.json>")?;

    let channels = loader::load_file(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    log::info!("Loaded {} channels from {}", channels.len(), path.display());

    let layout = PlotLayout::from_channels(&channels)?;
    let axis_labels = layout.axis_labels(&channels);

    let report = Report {
        layout,
        axis_labels,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
