#![forbid(unsafe_code)]

//! Hex color decoding and swatch label contrast.
//!
//! Swatch labels are drawn either black or white depending on the perceived
//! luminance (ITU-R BT.601 weights) of the swatch background.

use core::fmt;

use crate::error::ColorError;

/// Weighted luminance above which labels switch to black text.
pub const TEXT_LUMINANCE_THRESHOLD: u32 = 155;

/// An opaque 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `#rrggbb`, `rrggbb`, or the `#rgb` shorthand.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2], hex)?,
                channel(&digits[2..4], hex)?,
                channel(&digits[4..6], hex)?,
            )),
            3 => {
                // Each shorthand nibble doubles: `#abc` == `#aabbcc`.
                let nibble = |i: usize| channel(&digits[i..=i], hex).map(|v| v * 17);
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(ColorError::InvalidHex(hex.to_string())),
        }
    }

    /// Perceived luminance on the 0–255 scale.
    #[must_use]
    pub fn perceived_luminance(self) -> f64 {
        f64::from(self.luminance_milli()) / 1000.0
    }

    /// Luminance scaled by 1000 so threshold checks stay exact.
    #[must_use]
    pub const fn luminance_milli(self) -> u32 {
        299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32
    }

    /// Lowercase `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn channel(pair: &str, original: &str) -> Result<u8, ColorError> {
    u8::from_str_radix(pair, 16).map_err(|_| ColorError::InvalidHex(original.to_string()))
}

/// Foreground used for a swatch label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }

    /// Pick the label color for a decoded background.
    #[must_use]
    pub fn for_background(background: Rgb) -> Self {
        if background.luminance_milli() > TEXT_LUMINANCE_THRESHOLD * 1000 {
            Self::Black
        } else {
            Self::White
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hex())
    }
}

/// Label color for a hex background string.
///
/// Strings that do not decode are treated as black backgrounds and get white
/// text.
#[must_use]
pub fn text_color(hex: &str) -> TextColor {
    match Rgb::from_hex(hex) {
        Ok(rgb) => TextColor::for_background(rgb),
        Err(err) => {
            tracing::debug!(%err, "undecodable swatch color, using white label");
            TextColor::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_long_and_short_forms() {
        assert_eq!(Rgb::from_hex("#ff8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("FF8000"), Ok(Rgb::new(255, 128, 0)));
        assert_eq!(Rgb::from_hex("#f80"), Ok(Rgb::new(255, 136, 0)));
        assert_eq!(Rgb::from_hex("  #3498db "), Ok(Rgb::new(0x34, 0x98, 0xdb)));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12345", "#1234567", "#gg0000", "#ff 000", "#ÿÿÿ"] {
            assert!(Rgb::from_hex(bad).is_err(), "{bad:?} should not decode");
        }
    }

    #[test]
    fn white_background_gets_black_text() {
        assert_eq!(text_color("#FFFFFF"), TextColor::Black);
        assert_eq!(text_color("#FFFFFF").as_hex(), "#000000");
    }

    #[test]
    fn black_background_gets_white_text() {
        assert_eq!(text_color("#000000"), TextColor::White);
        assert_eq!(text_color("#000000").as_hex(), "#FFFFFF");
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        // 155 exactly stays white, 156 flips to black.
        assert_eq!(text_color("#9b9b9b"), TextColor::White);
        assert_eq!(text_color("#9c9c9c"), TextColor::Black);
    }

    #[test]
    fn saturated_primaries() {
        // No single primary clears the threshold; red plus green does.
        assert_eq!(text_color("#00ff00"), TextColor::White);
        assert_eq!(text_color("#ffff00"), TextColor::Black);
        assert_eq!(text_color("#ff0000"), TextColor::White);
        assert_eq!(text_color("#0000ff"), TextColor::White);
    }

    #[test]
    fn garbage_falls_back_to_white() {
        assert_eq!(text_color("not-a-color"), TextColor::White);
    }

    #[test]
    fn to_hex_is_lowercase() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_hex(), "#ab01ff");
    }
}
