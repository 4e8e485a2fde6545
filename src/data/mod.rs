/// Data layer: channel metadata types and loading.
///
/// Architecture:
/// ```text
///   metadata .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → ChannelMap
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ ChannelMap │  name → ChannelSpec (kind, path, units, hints)
///   └────────────┘
///        │
///        ▼
///   layout::PlotLayout
/// ```

pub mod loader;
pub mod model;
