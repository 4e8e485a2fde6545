//! Plot layout for scan results: which channels are drawn as series, which
//! carry their error bars, and how series are grouped onto axes and panes.

pub mod color;
pub mod data;
pub mod error;
pub mod label;
pub mod layout;
pub mod params;

pub use data::model::{ChannelKind, ChannelMap, ChannelSpec, DisplayHints, LinkKeyword, Units};
pub use error::LayoutError;
pub use layout::{
    extract_scalar_channels, group_axes_into_panes, group_channels_into_axes, PlotLayout,
};
