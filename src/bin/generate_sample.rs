use anyhow::{Context, Result};
use serde_json::json;

use scan_layout::{ChannelKind, ChannelMap, ChannelSpec, LinkKeyword};

/// Channels of a typical readout scan: a bright fraction with error bars,
/// a second readout sharing its axis, photon counts in the same pane, fit
/// results with units, and a hidden debug channel.
fn sample_channels() -> ChannelMap {
    let float = |path: &str, description: &str| {
        let mut spec = ChannelSpec::new(ChannelKind::Float, path);
        spec.description = description.to_string();
        spec
    };

    let entries = vec![
        ("p", float("readout/p", "Bright fraction").with_priority(1)),
        (
            "p_err",
            float("readout/p_err", "Bright fraction error")
                .with_link(LinkKeyword::ErrorBarFor, "readout/p"),
        ),
        (
            "p_dark",
            float("readout/p_dark", "Dark fraction")
                .with_link(LinkKeyword::ShareAxisWith, "readout/p"),
        ),
        (
            "counts",
            ChannelSpec::new(ChannelKind::Int, "readout/counts")
                .with_link(LinkKeyword::SharePaneWith, "readout/p"),
        ),
        (
            "detuning",
            float("fit/detuning", "Fitted detuning").with_units("MHz", 1e6),
        ),
        (
            "detuning_err",
            float("fit/detuning_err", "")
                .with_units("MHz", 1e6)
                .with_link(LinkKeyword::ErrorBarFor, "fit/detuning"),
        ),
        (
            "pulse_time",
            float("fit/pulse_time", "Pulse time")
                .with_units("us", 1e-6)
                .with_link(LinkKeyword::SharePaneWith, "fit/detuning"),
        ),
        ("raw_trace", ChannelSpec::new(ChannelKind::Other, "readout/trace")),
        (
            "histogram_chi2",
            float("debug/histogram_chi2", "Histogram fit χ²").with_priority(-1),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, spec)| (name.to_string(), spec))
        .collect()
}

fn main() -> Result<()> {
    let channels = sample_channels();
    let document = json!({
        "fragment_fqn": "demo.fragments.ReadoutScan",
        "channels": &channels,
    });

    let output_path = "sample_channels.json";
    let text = serde_json::to_string_pretty(&document).context("serializing channels")?;
    std::fs::write(output_path, text).context("writing output file")?;

    println!("Wrote {} channels to {output_path}", channels.len());
    Ok(())
}
