#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

/// Icon outline and vector bars.
pub const TEAL: sRGB = [0x15, 0x7D, 0x83];
/// Raster bars, a shade darker so they read against the outline.
pub const TEAL_DARK: sRGB = [0x0F, 0x6E, 0x73];
/// Wordmark.
pub const NAVY: sRGB = [0x1F, 0x3A, 0x5F];
pub const BACKGROUND: sRGB = [0xFF, 0xFF, 0xFF];

pub fn as_index(c: &sRGB) -> usize {
    // RGB order, same as the hex notation.
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

/// `#RRGGBB`, uppercase. This is the textual form used in the markup and the README.
pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c)).to_uppercase()
}

/// Opaque RGBA channels for raster canvases.
pub fn with_alpha(c: &sRGB) -> [u8; 4] {
    [c[0], c[1], c[2], 0xFF]
}
