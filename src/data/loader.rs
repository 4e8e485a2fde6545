use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

use super::model::{ChannelMap, ChannelSpec};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load channel metadata from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – either the bare channel map `{ "<name>": {...}, ... }` or an
///   envelope `{ "channels": { "<name>": {...}, ... }, ... }`
pub fn load_file(path: &Path) -> Result<ChannelMap> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<ChannelMap> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    parse_channels(&text)
}

/// Parse channel metadata from JSON text.
///
/// ```json
/// {
///   "channels": {
///     "p": { "type": "float", "path": "readout/p", "display_hints": {...} },
///     ...
///   }
/// }
/// ```
pub fn parse_channels(text: &str) -> Result<ChannelMap> {
    let root: JsonValue = serde_json::from_str(text).context("parsing JSON")?;

    let obj = root
        .as_object()
        .context("Expected top-level JSON object")?;

    // A channel literally named "channels" in a bare map carries a "type" key.
    let entries = match obj.get("channels") {
        Some(JsonValue::Object(inner)) if !inner.contains_key("type") => inner,
        _ => obj,
    };

    let mut channels = ChannelMap::new();
    for (name, entry) in entries {
        let spec: ChannelSpec = serde_json::from_value(entry.clone())
            .with_context(|| format!("Channel '{name}' has invalid metadata"))?;
        channels.insert(name.clone(), spec);
    }

    log::debug!("Parsed metadata for {} channels", channels.len());
    Ok(channels)
}
