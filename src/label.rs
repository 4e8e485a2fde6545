use serde::Serialize;

use crate::color::{parse_rgba_hex, to_argb_hex};
use crate::data::model::Units;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// One logical series drawn against a shared axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSeries {
    /// Human-readable name shown in the label.
    pub description: String,
    /// Source identity shown in the tooltip (may be empty).
    pub identity: String,
    /// Series colour as hex (`#RRGGBBAA` is re-ordered for the renderer).
    pub color: Option<String>,
    pub units: Units,
}

/// The renderer's axis, as far as labelling is concerned.
pub trait AxisItem {
    fn set_label(&mut self, html: &str);
    fn set_tooltip(&mut self, text: &str);
    fn set_scale(&mut self, data_to_display_scale: f64);
    fn set_auto_si_prefix(&mut self, enabled: bool);
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Unit suffix and rescaling applied to an axis carrying a single series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisScale {
    pub unit_suffix: String,
    pub data_to_display_scale: f64,
}

/// Composed label of one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub label_html: String,
    pub tooltip: String,
    /// `None` when several series share the axis, as their units may differ.
    pub scale: Option<AxisScale>,
}

impl AxisLabel {
    /// Suffix for coordinates on this axis, e.g. `" MHz"`.
    pub fn unit_suffix(&self) -> &str {
        self.scale.as_ref().map_or("", |s| s.unit_suffix.as_str())
    }

    /// Factor converting data values into displayed values.
    pub fn data_to_display_scale(&self) -> f64 {
        self.scale.as_ref().map_or(1.0, |s| s.data_to_display_scale)
    }
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose the label, tooltip and (for single-series axes) unit scaling for an
/// axis showing `series`.
pub fn compose_axis_label(series: &[AxisSeries]) -> AxisLabel {
    let label_html = series
        .iter()
        .map(series_label_html)
        .collect::<Vec<_>>()
        .join("<br>");

    let tooltip = series
        .iter()
        .map(|s| s.identity.as_str())
        .filter(|identity| !identity.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let scale = match series {
        [only] => Some(single_series_scale(&only.units)),
        _ => None,
    };

    AxisLabel {
        label_html,
        tooltip,
        scale,
    }
}

/// Apply the composed label to `axis`; returns `(unit_suffix, data_to_display_scale)`.
pub fn setup_axis_item<A: AxisItem + ?Sized>(axis: &mut A, series: &[AxisSeries]) -> (String, f64) {
    let label = compose_axis_label(series);
    axis.set_label(&label.label_html);
    axis.set_tooltip(&label.tooltip);

    if let Some(scale) = &label.scale {
        axis.set_scale(scale.data_to_display_scale);
        axis.set_auto_si_prefix(false);
    }
    (label.unit_suffix().to_string(), label.data_to_display_scale())
}

fn single_series_scale(units: &Units) -> AxisScale {
    let unit_suffix = if units.unit.is_empty() {
        String::new()
    } else {
        format!(" {}", units.unit)
    };

    let data_to_display_scale = if units.scale != 0.0 && units.scale.is_finite() {
        1.0 / units.scale
    } else {
        log::warn!("Ignoring invalid scale {} for unit '{}'", units.scale, units.unit);
        1.0
    };

    AxisScale {
        unit_suffix,
        data_to_display_scale,
    }
}

fn series_label_html(series: &AxisSeries) -> String {
    let mut html = String::new();
    if let Some(color) = &series.color {
        let color = match parse_rgba_hex(color) {
            Some(rgba) if color.len() == 9 => to_argb_hex(rgba),
            _ => color.clone(),
        };
        html.push_str(&format!("<span style='color: \"{color}\"'>"));
    }

    let unit = if series.units.unit.is_empty() {
        String::new()
    } else {
        format!("/ {} ", series.units.unit)
    };
    html.push_str(&format!(
        "<b>{} {}</b>",
        escape_html(&series.description),
        escape_html(&unit)
    ));

    if series.color.is_some() {
        html.push_str("</span>");
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
