use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ChannelKind – the value type of a result channel
// ---------------------------------------------------------------------------

/// Value type of a channel as announced in the scan metadata (`"type"` key).
///
/// Only `int` and `float` channels are plotted as scalar series; every other
/// type string (`str`, `bool`, `array`, `subscan`, …) collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelKind {
    Int,
    Float,
    #[serde(other)]
    Other,
}

impl ChannelKind {
    /// Whether values of this kind can be drawn as a scalar series.
    pub fn is_scalar(self) -> bool {
        matches!(self, ChannelKind::Int | ChannelKind::Float)
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Int => write!(f, "int"),
            ChannelKind::Float => write!(f, "float"),
            ChannelKind::Other => write!(f, "other"),
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayHints – cross-references to other channels
// ---------------------------------------------------------------------------

/// Display annotations of a channel. Link targets are channel *paths*.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayHints {
    /// Higher priorities are listed first; negative ones are hidden by default.
    #[serde(default)]
    pub priority: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_bar_for: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_axis_with: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share_pane_with: Option<String>,
}

/// The hint keywords that reference another channel by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKeyword {
    ErrorBarFor,
    ShareAxisWith,
    SharePaneWith,
}

impl LinkKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKeyword::ErrorBarFor => "error_bar_for",
            LinkKeyword::ShareAxisWith => "share_axis_with",
            LinkKeyword::SharePaneWith => "share_pane_with",
        }
    }
}

impl fmt::Display for LinkKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DisplayHints {
    /// Target path for the given link keyword. Empty strings count as unset.
    pub fn link(&self, keyword: LinkKeyword) -> Option<&str> {
        let target = match keyword {
            LinkKeyword::ErrorBarFor => &self.error_bar_for,
            LinkKeyword::ShareAxisWith => &self.share_axis_with,
            LinkKeyword::SharePaneWith => &self.share_pane_with,
        };
        target.as_deref().filter(|p| !p.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Units – display unit and scale of a value
// ---------------------------------------------------------------------------

fn default_scale() -> f64 {
    1.0
}

/// Unit string and the scale factor relating raw values to that unit
/// (e.g. `unit = "MHz"`, `scale = 1e6`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Units {
    #[serde(default)]
    pub unit: String,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Default for Units {
    fn default() -> Self {
        Units {
            unit: String::new(),
            scale: default_scale(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChannelSpec – one entry of the channel metadata
// ---------------------------------------------------------------------------

/// Metadata of a single result channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSpec {
    #[serde(rename = "type")]
    pub kind: ChannelKind,
    /// Stable cross-reference key used by display hints of other channels.
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub units: Units,
    #[serde(default)]
    pub display_hints: DisplayHints,
}

impl ChannelSpec {
    /// A scalar channel with the given kind and path and no hints.
    pub fn new(kind: ChannelKind, path: impl Into<String>) -> Self {
        ChannelSpec {
            kind,
            path: path.into(),
            description: String::new(),
            units: Units::default(),
            display_hints: DisplayHints::default(),
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.display_hints.priority = priority;
        self
    }

    pub fn with_link(mut self, keyword: LinkKeyword, target_path: impl Into<String>) -> Self {
        let target = Some(target_path.into());
        match keyword {
            LinkKeyword::ErrorBarFor => self.display_hints.error_bar_for = target,
            LinkKeyword::ShareAxisWith => self.display_hints.share_axis_with = target,
            LinkKeyword::SharePaneWith => self.display_hints.share_pane_with = target,
        }
        self
    }

    pub fn with_units(mut self, unit: impl Into<String>, scale: f64) -> Self {
        self.units = Units {
            unit: unit.into(),
            scale,
        };
        self
    }

    pub fn priority(&self) -> i64 {
        self.display_hints.priority
    }
}

/// Channel metadata keyed by channel name.
pub type ChannelMap = BTreeMap<String, ChannelSpec>;

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Schema of a scan parameter, as far as label helpers need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSchema {
    /// Fully qualified name, e.g. `"my_lib.fragments.Readout.threshold"`.
    pub fqn: String,
    /// Textual default expression, e.g. `"dataset('cal.threshold', 3)"`.
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub description: String,
}

/// A parameter bound to a fragment path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRef {
    pub path: String,
    pub param: ParamSchema,
}
