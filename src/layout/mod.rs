/// Layout layer: which channels are plotted, and on which axes and panes.
///
/// ```text
///   ChannelMap
///        │
///        ▼
///   ┌──────────┐
///   │ classify │  scalar series in priority order + error bar map
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   axes   │  share_axis_with → Vec<axis>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  panes   │  share_pane_with → Vec<pane>
///   └──────────┘
/// ```
///
/// Both groupers treat the directional hints as undirected links and take the
/// connected components of a [`disjoint_set::DisjointSet`].

pub mod axes;
pub mod classify;
pub mod disjoint_set;
pub mod panes;

pub use axes::group_channels_into_axes;
pub use classify::{extract_scalar_channels, ErrorBarMap};
pub use panes::group_axes_into_panes;

use std::collections::HashMap;

use serde::Serialize;

use crate::color::{series_color, to_rgba_hex};
use crate::data::model::{ChannelMap, LinkKeyword};
use crate::error::LayoutError;
use crate::label::{compose_axis_label, AxisLabel, AxisSeries};

/// Look up the `keyword` link target of channel `name` in `targets`
/// (keyed by path). Unresolvable targets are logged and treated as no link.
fn resolve_link<T: Copy>(
    channels: &ChannelMap,
    name: &str,
    keyword: LinkKeyword,
    targets: &HashMap<&str, T>,
) -> Option<T> {
    let Some(spec) = channels.get(name) else {
        log::warn!("No metadata for channel '{name}'");
        return None;
    };
    let path = spec.display_hints.link(keyword)?;
    match targets.get(path) {
        Some(&target) => Some(target),
        None => {
            log::warn!("{keyword} target path '{path}' does not exist");
            None
        }
    }
}

// ---------------------------------------------------------------------------
// PlotLayout – the full derived view
// ---------------------------------------------------------------------------

/// Series, error bars and pane/axis grouping derived from channel metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLayout {
    /// Plotted channels in priority order.
    pub series: Vec<String>,
    /// Series name → error bar channel name.
    pub error_bars: ErrorBarMap,
    /// Panes → axes → channel names.
    pub panes: Vec<Vec<Vec<String>>>,
}

impl PlotLayout {
    /// Classify `channels` and group the resulting series into axes and panes.
    pub fn from_channels(channels: &ChannelMap) -> Result<Self, LayoutError> {
        let (series, error_bars) = extract_scalar_channels(channels)?;
        let axes = group_channels_into_axes(channels, &series);
        let panes = group_axes_into_panes(channels, &axes);

        log::debug!(
            "{} series on {} axes in {} panes",
            series.len(),
            axes.len(),
            panes.len()
        );

        Ok(PlotLayout {
            series,
            error_bars,
            panes,
        })
    }

    /// All axes in pane order.
    pub fn axes(&self) -> impl Iterator<Item = &Vec<String>> {
        self.panes.iter().flatten()
    }

    /// Label for every axis (in [`axes`](Self::axes) order), colouring each
    /// series by its position in [`series`](Self::series).
    pub fn axis_labels(&self, channels: &ChannelMap) -> Vec<AxisLabel> {
        self.axes()
            .map(|axis| {
                let series: Vec<AxisSeries> = axis
                    .iter()
                    .filter_map(|name| {
                        let spec = channels.get(name)?;
                        let index = self.series.iter().position(|s| s == name)?;
                        let description = if spec.description.is_empty() {
                            name.clone()
                        } else {
                            spec.description.clone()
                        };
                        Some(AxisSeries {
                            description,
                            identity: spec.path.clone(),
                            color: Some(to_rgba_hex(series_color(index))),
                            units: spec.units.clone(),
                        })
                    })
                    .collect();
                compose_axis_label(&series)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ChannelKind, ChannelSpec};

    fn float(path: &str) -> ChannelSpec {
        ChannelSpec::new(ChannelKind::Float, path)
    }

    fn scan_channels() -> ChannelMap {
        [
            ("p", float("readout/p").with_priority(1)),
            ("p_err", float("readout/p_err").with_link(LinkKeyword::ErrorBarFor, "readout/p")),
            (
                "q",
                float("readout/q").with_link(LinkKeyword::ShareAxisWith, "readout/p"),
            ),
            (
                "counts",
                ChannelSpec::new(ChannelKind::Int, "readout/counts")
                    .with_link(LinkKeyword::SharePaneWith, "readout/q"),
            ),
            ("freq", float("fit/freq").with_units("MHz", 1e6)),
            ("debug", float("debug/x").with_priority(-1)),
            ("trace", ChannelSpec::new(ChannelKind::Other, "raw/trace")),
        ]
        .into_iter()
        .map(|(name, spec)| (name.to_string(), spec))
        .collect()
    }

    #[test]
    fn full_layout() {
        let layout = PlotLayout::from_channels(&scan_channels()).unwrap();
        assert_eq!(layout.series, vec!["p", "freq", "counts", "q"]);
        assert_eq!(layout.error_bars.len(), 1);
        assert_eq!(layout.error_bars["p"], "p_err");

        let s = |v: &[&str]| v.iter().map(|x| x.to_string()).collect::<Vec<_>>();
        assert_eq!(
            layout.panes,
            vec![
                vec![s(&["p", "q"]), s(&["counts"])],
                vec![s(&["freq"])],
            ]
        );
    }

    #[test]
    fn partition_is_complete() {
        let layout = PlotLayout::from_channels(&scan_channels()).unwrap();
        let mut placed: Vec<&String> = layout.axes().flatten().collect();
        placed.sort();
        let mut series: Vec<&String> = layout.series.iter().collect();
        series.sort();
        assert_eq!(placed, series);
    }

    #[test]
    fn labels_follow_axes() {
        let channels = scan_channels();
        let layout = PlotLayout::from_channels(&channels).unwrap();
        let labels = layout.axis_labels(&channels);
        assert_eq!(labels.len(), 3);

        // Shared axis: no unit scaling.
        assert_eq!(labels[0].scale, None);
        assert_eq!(labels[0].tooltip, "readout/p\nreadout/q");

        let freq = &labels[2];
        assert_eq!(freq.unit_suffix(), " MHz");
        assert!((freq.data_to_display_scale() - 1e-6).abs() < 1e-18);
        // Second series colour, re-ordered to ARGB.
        assert!(freq.label_html.starts_with("<span style='color: \"#bbfdb462\"'>"));
    }

    #[test]
    fn duplicate_error_bars_fail_the_layout() {
        let mut channels = scan_channels();
        channels.insert(
            "p_err2".to_string(),
            float("readout/p_err2").with_link(LinkKeyword::ErrorBarFor, "readout/p"),
        );
        assert!(matches!(
            PlotLayout::from_channels(&channels),
            Err(LayoutError::DuplicateErrorBar { .. })
        ));
    }
}
