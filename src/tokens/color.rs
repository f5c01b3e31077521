//! Color values as they appear in style sheets.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::InvalidColorError;

/// A token color: either opaque `#rrggbb` or translucent `rgba(r, g, b, a)`.
///
/// Colors render back to exactly the form they were declared in, so a
/// palette entry written as `rgba(232, 168, 192, 0.15)` shows up in the
/// generated style sheet unchanged.
///
/// # Example
///
/// ```rust
/// use rosewood::Color;
///
/// let accent: Color = "#e8a8c0".parse().unwrap();
/// assert_eq!(accent, Color::hex(0xe8a8c0));
/// assert_eq!(accent.to_string(), "#e8a8c0");
///
/// let tint: Color = "rgba(232, 168, 192, 0.15)".parse().unwrap();
/// assert_eq!(tint.alpha(), 0.15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Opaque 24-bit color.
    Hex { r: u8, g: u8, b: u8 },
    /// Color with an alpha channel in `[0, 1]`.
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Color {
    /// Builds an opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Color::Hex {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// Builds a translucent color.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Returns the red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Hex { r, g, b } | Color::Rgba { r, g, b, .. } => (r, g, b),
        }
    }

    /// Returns the alpha channel; opaque colors report `1.0`.
    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Hex { .. } => 1.0,
            Color::Rgba { a, .. } => a,
        }
    }

    /// Returns true if the color carries a valid alpha channel.
    pub fn is_valid(&self) -> bool {
        let a = self.alpha();
        a.is_finite() && (0.0..=1.0).contains(&a)
    }

    /// Composites this color over an opaque background, returning the
    /// visible RGB triplet.
    pub fn over(&self, background: Color) -> (u8, u8, u8) {
        let (r, g, b) = self.rgb();
        let (br, bg, bb) = background.rgb();
        let a = self.alpha().clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8
        };
        (mix(r, br), mix(g, bg), mix(b, bb))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hex { r, g, b } => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
        }
    }
}

impl FromStr for Color {
    type Err = InvalidColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        let invalid = |reason: &'static str| InvalidColorError {
            value: value.to_string(),
            reason,
        };

        if let Some(digits) = value.strip_prefix('#') {
            if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid("expected six hex digits after '#'"));
            }
            let rgb = u32::from_str_radix(digits, 16)
                .map_err(|_| invalid("expected six hex digits after '#'"))?;
            return Ok(Color::hex(rgb));
        }

        let inner = value
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid("expected '#rrggbb' or 'rgba(r, g, b, a)'"))?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(invalid("rgba() takes exactly four components"));
        }

        let channel = |part: &str| -> Result<u8, InvalidColorError> {
            part.parse::<u8>()
                .map_err(|_| invalid("channels must be integers between 0 and 255"))
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = parts[3]
            .parse::<f32>()
            .map_err(|_| invalid("alpha must be a number"))?;

        let color = Color::rgba(r, g, b, a);
        if !color.is_valid() {
            return Err(invalid("alpha must be between 0 and 1"));
        }
        Ok(color)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_hex() {
        let color: Color = "#201c1a".parse().unwrap();
        assert_eq!(color, Color::Hex { r: 0x20, g: 0x1c, b: 0x1a });
        assert_eq!(color.alpha(), 1.0);
    }

    #[test]
    fn test_parse_hex_uppercase_renders_lowercase() {
        let color: Color = "#E8A8C0".parse().unwrap();
        assert_eq!(color.to_string(), "#e8a8c0");
    }

    #[test]
    fn test_parse_rgba() {
        let color: Color = "rgba(32, 28, 26, 0.72)".parse().unwrap();
        assert_eq!(color, Color::rgba(32, 28, 26, 0.72));
        assert_eq!(color.to_string(), "rgba(32, 28, 26, 0.72)");
    }

    #[test]
    fn test_parse_rgba_tolerates_tight_spacing() {
        let color: Color = "rgba(0,0,0,0.06)".parse().unwrap();
        assert_eq!(color.to_string(), "rgba(0, 0, 0, 0.06)");
    }

    #[test]
    fn test_reject_short_hex() {
        let err = "#fff".parse::<Color>().unwrap_err();
        assert_eq!(err.value, "#fff");
        assert!(err.to_string().contains("six hex digits"));
    }

    #[test]
    fn test_reject_alpha_out_of_range() {
        assert!("rgba(1, 2, 3, 1.5)".parse::<Color>().is_err());
        assert!("rgba(1, 2, 3, -0.1)".parse::<Color>().is_err());
        assert!("rgba(1, 2, 3, NaN)".parse::<Color>().is_err());
    }

    #[test]
    fn test_reject_channel_out_of_range() {
        assert!("rgba(256, 0, 0, 0.5)".parse::<Color>().is_err());
        assert!("rgba(0, 0, 0)".parse::<Color>().is_err());
    }

    #[test]
    fn test_reject_named_color() {
        assert!("transparent".parse::<Color>().is_err());
    }

    #[test]
    fn test_over_composites_alpha() {
        let white = Color::hex(0xffffff);
        let black = Color::hex(0x000000);
        assert_eq!(Color::rgba(0, 0, 0, 0.5).over(white), (128, 128, 128));
        assert_eq!(white.over(black), (255, 255, 255));
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::hex(0x70b8e8)).unwrap();
        assert_eq!(json, "\"#70b8e8\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::hex(0x70b8e8));
    }

    proptest! {
        #[test]
        fn prop_hex_display_parses_back(rgb in 0u32..=0xff_ffff) {
            let color = Color::hex(rgb);
            prop_assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }

        #[test]
        fn prop_rgba_display_parses_back(r: u8, g: u8, b: u8, hundredths in 0u32..=100) {
            let color = Color::rgba(r, g, b, hundredths as f32 / 100.0);
            prop_assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }
}
