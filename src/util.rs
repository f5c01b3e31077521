//! Terminal helpers for palette previews.

use unicode_width::UnicodeWidthStr;

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// This is the standard xterm-256 mapping: grays map onto the 24-step
/// grayscale ramp, everything else onto the 6x6x6 color cube.
///
/// # Example
///
/// ```rust
/// use rosewood::util::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let cube = |channel: u8| (channel as u16 * 5 / 255) as u8;
        16 + 36 * cube(r) + 6 * cube(g) + cube(b)
    }
}

/// Pads `s` with trailing spaces to `width` terminal columns.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + width - current);
    padded.push_str(s);
    padded.extend(std::iter::repeat(' ').take(width - current));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((0x5a, 0x5a, 0x5a));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
        // accent pink lands in the upper cube
        assert!(rgb_to_ansi256((0xe8, 0xa8, 0xc0)) > 180);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("bg", 5), "bg   ");
        assert_eq!(pad_to_width("surface", 3), "surface");
        assert_eq!(pad_to_width("", 2), "  ");
    }

    #[test]
    fn test_pad_to_width_counts_columns() {
        // wide characters take two columns each
        assert_eq!(pad_to_width("色", 4), "色  ");
    }
}
