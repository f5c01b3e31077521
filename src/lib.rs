//! Rosewood: design tokens compiled into Qt style sheets.
//!
//! Rosewood keeps a dark and a light palette of semantic colors plus shared
//! spacing, radius and type scales. The compiler turns one palette into an
//! ordered [`StyleDocument`] covering every standard widget category, which
//! renders to style-sheet text a Qt application applies globally. Variants
//! are expressed as `[class="..."]` selectors so a widget only needs its
//! `class` property set to pick them up.
//!
//! # Modules
//!
//! - [`tokens`]: colors, palettes and the scalar scales
//! - [`compiler`]: palette to [`StyleDocument`]
//! - [`render`]: [`StyleDocument`] to text
//! - [`theme`]: [`Theme`], dark/light toggling and system detection
//! - [`host`]: toolkit traits and registration
//! - [`widgets`]: pre-styled button, label, input, card and badge adapters
//! - [`preview`]: terminal palette swatches
//!
//! # Example
//!
//! ```rust
//! use rosewood::{compile, get_palette, radius, spacing, typography, Category};
//!
//! let dark = get_palette("dark")?;
//! let doc = compile(dark, spacing(), radius(), typography())?;
//!
//! let primary = doc.resolve(Category::Button, Some("primary"));
//! assert!(primary.iter().any(|d| d.property == "background" && d.value == "#e8a8c0"));
//!
//! let qss = doc.to_stylesheet()?;
//! assert!(qss.contains(r#"QPushButton[class="primary"]"#));
//! # Ok::<(), rosewood::Error>(())
//! ```
//!
//! Applying a theme and toggling it:
//!
//! ```rust
//! use rosewood::{StyleTarget, Theme, ThemeMode};
//!
//! struct App(String);
//!
//! impl StyleTarget for App {
//!     fn set_style_sheet(&mut self, style_sheet: &str) {
//!         self.0 = style_sheet.to_string();
//!     }
//! }
//!
//! let mut app = App(String::new());
//! let mut theme = Theme::new(ThemeMode::Dark);
//! theme.apply(&mut app)?;
//! assert!(app.0.contains("#1a1614"));
//!
//! theme.toggle().apply(&mut app)?;
//! assert!(app.0.contains("#fefdfb"));
//! # Ok::<(), rosewood::Error>(())
//! ```

pub mod compiler;
pub mod error;
pub mod host;
pub mod preview;
pub mod render;
pub mod theme;
pub mod tokens;
pub mod util;
pub mod widgets;

pub use compiler::{
    compile, Category, Declaration, Selector, State, StyleDocument, StyleRule, DISABLED_OPACITY,
    VARIANT_PROPERTY,
};
pub use error::{
    Error, IncompleteTokenError, InvalidColorError, MissingHostToolkitError, PaletteError,
    UnknownPaletteError,
};
pub use host::{HostWidget, StyleTarget, Toolkit};
pub use render::{OutputStyle, StylesheetWriter};
pub use theme::{apply_theme, reset_theme_detector, set_theme_detector, Theme, ThemeMode};
pub use tokens::{
    get_palette, radius, registered_palettes, spacing, typography, Color, ColorToken, Palette,
    Radius, Spacing, Typography, PALETTE_NAMES,
};
pub use widgets::{StyledWidget, VariantDescriptor, WidgetKind};
