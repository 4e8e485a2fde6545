use palette::Srgba;

// ---------------------------------------------------------------------------
// Fixed series palette
// ---------------------------------------------------------------------------

/// ColorBrewer-inspired colours for data series, as RGBA hex.
pub const SERIES_COLORS: [&str; 6] = [
    "#d9d9d9bb", "#fdb462bb", "#80b1d3bb", "#fb8072bb", "#bebadabb", "#ffffb3bb",
];

/// Colour of the `index`-th series, cycling through [`SERIES_COLORS`].
pub fn series_color(index: usize) -> Srgba<u8> {
    let hex = SERIES_COLORS[index % SERIES_COLORS.len()];
    parse_rgba_hex(hex).unwrap_or_else(|| Srgba::new(0x80, 0x80, 0x80, 0xff))
}

// ---------------------------------------------------------------------------
// Hex conversions
// ---------------------------------------------------------------------------

/// Parse `#RRGGBBAA` (or `#RRGGBB`, opaque) into a colour.
pub fn parse_rgba_hex(hex: &str) -> Option<Srgba<u8>> {
    let digits = hex.strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match digits.len() {
        6 => Some(Srgba::new(byte(0)?, byte(2)?, byte(4)?, 0xff)),
        8 => Some(Srgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

/// Format as `#rrggbbaa`.
pub fn to_rgba_hex(color: Srgba<u8>) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.red, color.green, color.blue, color.alpha
    )
}

/// Format as `#aarrggbb`, the channel order Qt-style renderers expect.
pub fn to_argb_hex(color: Srgba<u8>) -> String {
    format!(
        "#{:02x}{:02x}{:02x}{:02x}",
        color.alpha, color.red, color.green, color.blue
    )
}
