//! Terminal swatches for inspecting a palette without a GUI toolkit.

use console::Style;

use crate::tokens::{Color, ColorToken, Palette};
use crate::util::{pad_to_width, rgb_to_ansi256};

const SWATCH: &str = "    ";

/// Lists every token in `palette`, one per line: name, color block, value.
///
/// The block is an ANSI-256 approximation and is only drawn when `colored`
/// is true. Translucent colors are shown composited over the palette's
/// `bg` (black if the palette has none).
///
/// # Example
///
/// ```rust
/// let dark = rosewood::get_palette("dark").unwrap();
/// let text = rosewood::preview::swatches(dark, false);
/// assert!(text.lines().any(|line| line.starts_with("accent ") && line.ends_with("#e8a8c0")));
/// ```
pub fn swatches(palette: &Palette, colored: bool) -> String {
    let background = palette.get(ColorToken::Bg).unwrap_or(Color::hex(0x000000));
    let name_width = palette
        .iter()
        .map(|(token, _)| token.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (token, color) in palette.iter() {
        out.push_str(&pad_to_width(token.name(), name_width));
        out.push_str("  ");
        if colored {
            let index = rgb_to_ansi256(color.over(background));
            let block = Style::new().on_color256(index).force_styling(true);
            out.push_str(&block.apply_to(SWATCH).to_string());
            out.push_str("  ");
        }
        out.push_str(&color.to_string());
        out.push('\n');
    }
    out
}
