//! Design tokens: colors, palettes, and the shared scalar scales.
//!
//! - [`Color`]: a `#rrggbb` or `rgba()` value
//! - [`ColorToken`]: the closed set of semantic color roles
//! - [`Palette`]: a named token-to-color map; [`get_palette`] returns the
//!   registered `"dark"` and `"light"` palettes
//! - [`Spacing`], [`Radius`], [`Typography`]: constant scales returned by
//!   [`spacing`], [`radius`] and [`typography`]
//!
//! Everything handed out here is `'static` and immutable.

mod color;
mod palette;
mod tables;

pub use color::Color;
pub(crate) use palette::{dark, light, ResolvedPalette};
pub use palette::{get_palette, registered_palettes, ColorToken, Palette, PALETTE_NAMES};
pub use tables::{radius, spacing, typography, Radius, Spacing, Typography};
