//! Raw binary mask values and their unit encodings.

/// Raw mask value meaning "pixel classified as this class".
pub const MASK_SET: u8 = 255;

/// Raw mask value conventionally used for "classified as the other class".
/// Any value other than [`MASK_SET`] is treated the same way.
pub const MASK_CLEAR: u8 = 0;

/// Maps a target mask to a signed unit sequence: `+1` where set, `-1` elsewhere.
pub fn unit_signs(mask: &[u8]) -> Vec<i8> {
    mask.iter()
        .map(|&v| if v == MASK_SET { 1 } else { -1 })
        .collect()
}

/// Maps a mask to a `{1, 0}` indicator sequence for density counting.
pub fn unit_indicator(mask: &[u8]) -> Vec<u8> {
    mask.iter().map(|&v| u8::from(v == MASK_SET)).collect()
}
