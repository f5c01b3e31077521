//! The stateful theme façade.

use std::borrow::Cow;

use super::adaptive::detect_mode;
use super::mode::ThemeMode;
use crate::compiler::{compile, StyleDocument};
use crate::error::{Error, IncompleteTokenError, UnknownPaletteError};
use crate::host::StyleTarget;
use crate::tokens::{radius, spacing, typography, Palette};

/// The current mode plus the palettes it switches between.
///
/// A theme never caches its style document: [`render`](Theme::render)
/// compiles from current state on every call.
///
/// # Example
///
/// ```rust
/// use rosewood::{Theme, ThemeMode};
///
/// let mut theme = Theme::default();
/// assert_eq!(theme.mode(), ThemeMode::Dark);
///
/// theme.toggle();
/// let doc = theme.render().unwrap();
/// assert_eq!(doc.palette(), "light");
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    mode: ThemeMode,
    dark: Cow<'static, Palette>,
    light: Cow<'static, Palette>,
}

impl Theme {
    /// Creates a theme using the registered palettes.
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            dark: Cow::Borrowed(ThemeMode::Dark.palette()),
            light: Cow::Borrowed(ThemeMode::Light.palette()),
        }
    }

    /// Creates a theme from a mode name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPaletteError`] for anything but `"dark"` or `"light"`.
    pub fn from_name(name: &str) -> Result<Self, UnknownPaletteError> {
        Ok(Self::new(name.parse()?))
    }

    /// Creates a theme whose initial mode follows the operating system.
    pub fn from_system() -> Self {
        Self::new(detect_mode())
    }

    /// Creates a theme that switches between caller-supplied palettes.
    ///
    /// The palettes are checked when rendering, not here.
    pub fn with_palettes(mode: ThemeMode, dark: Palette, light: Palette) -> Self {
        Self {
            mode,
            dark: Cow::Owned(dark),
            light: Cow::Owned(light),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Returns the palette for the current mode.
    pub fn palette(&self) -> &Palette {
        match self.mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }

    /// Flips between dark and light.
    pub fn toggle(&mut self) -> &mut Self {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "toggled theme");
        self
    }

    /// Compiles a fresh style document from the current palette.
    pub fn render(&self) -> Result<StyleDocument, IncompleteTokenError> {
        compile(self.palette(), spacing(), radius(), typography())
    }

    /// Compiles and writes the current style sheet.
    pub fn stylesheet(&self) -> Result<String, Error> {
        self.render()?.to_stylesheet()
    }

    /// Hands the current style sheet to a widget or application.
    ///
    /// # Errors
    ///
    /// Fails only if a caller-supplied palette is incomplete; the registered
    /// palettes always render.
    pub fn apply(&self, target: &mut dyn StyleTarget) -> Result<(), Error> {
        let stylesheet = self.stylesheet()?;
        tracing::debug!(
            mode = %self.mode,
            bytes = stylesheet.len(),
            "applying style sheet"
        );
        target.set_style_sheet(&stylesheet);
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

/// Builds a theme in `mode` and applies it to `target`.
///
/// ```rust
/// use rosewood::{apply_theme, StyleTarget, ThemeMode};
///
/// #[derive(Default)]
/// struct App {
///     sheet: String,
/// }
///
/// impl StyleTarget for App {
///     fn set_style_sheet(&mut self, style_sheet: &str) {
///         self.sheet = style_sheet.to_string();
///     }
/// }
///
/// let mut app = App::default();
/// let theme = apply_theme(&mut app, ThemeMode::Light).unwrap();
/// assert_eq!(theme.mode(), ThemeMode::Light);
/// assert!(app.sheet.contains("QPushButton"));
/// ```
pub fn apply_theme(target: &mut dyn StyleTarget, mode: ThemeMode) -> Result<Theme, Error> {
    let theme = Theme::new(mode);
    theme.apply(target)?;
    Ok(theme)
}
