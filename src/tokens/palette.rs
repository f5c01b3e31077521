//! Named color palettes and the registered dark/light pair.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::color::Color;
use crate::error::{IncompleteTokenError, PaletteError, UnknownPaletteError};

macro_rules! color_tokens {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A semantic color role. Every complete palette defines all of them.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum ColorToken {
            $($variant),*
        }

        impl ColorToken {
            /// Every token, in declaration order.
            pub const ALL: &'static [ColorToken] = &[$(ColorToken::$variant),*];

            /// Returns the snake_case token name.
            pub fn name(self) -> &'static str {
                match self {
                    $(ColorToken::$variant => $name),*
                }
            }
        }
    };
}

color_tokens! {
    // Primary accent
    Accent => "accent",
    AccentDark => "accent_dark",
    AccentLight => "accent_light",
    AccentBg => "accent_bg",
    AccentText => "accent_text",
    // Secondary
    Secondary => "secondary",
    SecondaryDark => "secondary_dark",
    SecondaryLight => "secondary_light",
    SecondaryBg => "secondary_bg",
    SecondaryText => "secondary_text",
    // Surfaces
    Bg => "bg",
    Surface => "surface",
    SurfaceHover => "surface_hover",
    SurfaceElevated => "surface_elevated",
    // Borders
    Border => "border",
    BorderLight => "border_light",
    // Text
    Text => "text",
    TextSecondary => "text_secondary",
    TextMuted => "text_muted",
    // Status
    Success => "success",
    SuccessBg => "success_bg",
    Danger => "danger",
    DangerBg => "danger_bg",
    Warning => "warning",
    WarningBg => "warning_bg",
    Info => "info",
    InfoBg => "info_bg",
    // Glass
    GlassBg => "glass_bg",
    GlassBorder => "glass_border",
}

impl ColorToken {
    /// Number of color roles a complete palette must define.
    pub const COUNT: usize = Self::ALL.len();

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorToken {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::ALL
            .iter()
            .copied()
            .find(|token| token.name() == s)
            .ok_or_else(|| PaletteError::UnknownToken {
                name: s.to_string(),
            })
    }
}

/// A named set of color tokens.
///
/// Palettes have no mutating methods. [`with`](Palette::with) and
/// [`without`](Palette::without) consume the palette and return a new one, so
/// the registered palettes handed out by [`get_palette`] stay untouched.
///
/// A palette may be missing tokens; [`compile`](crate::compile) rejects it
/// before producing any output.
///
/// # Example
///
/// ```rust
/// use rosewood::{get_palette, ColorToken};
///
/// let dark = get_palette("dark").unwrap();
/// let broken = dark.clone().without(ColorToken::Info);
/// assert_eq!(broken.missing_tokens(), vec![ColorToken::Info]);
/// assert!(dark.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    name: String,
    colors: BTreeMap<ColorToken, Color>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: BTreeMap::new(),
        }
    }

    /// Renames the palette, returning it for chaining.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets a token, returning the updated palette for chaining.
    pub fn with(mut self, token: ColorToken, color: Color) -> Self {
        self.colors.insert(token, color);
        self
    }

    /// Removes a token, returning the updated palette.
    pub fn without(mut self, token: ColorToken) -> Self {
        self.colors.remove(&token);
        self
    }

    /// Loads a palette from a YAML mapping of token name to color string.
    ///
    /// Unknown token names and malformed colors are rejected here, checking
    /// keys in sorted order so the first reported error is stable. Missing
    /// tokens are not: they surface as an
    /// [`IncompleteTokenError`] when the palette is compiled.
    ///
    /// ```rust
    /// use rosewood::{Palette, ColorToken, Color};
    ///
    /// let palette = Palette::from_yaml("mine", "accent: '#ff0000'\nbg: 'rgba(0, 0, 0, 0.5)'\n").unwrap();
    /// assert_eq!(palette.get(ColorToken::Accent), Some(Color::hex(0xff0000)));
    /// assert!(palette.validate().is_err());
    /// ```
    pub fn from_yaml(name: impl Into<String>, source: &str) -> Result<Self, PaletteError> {
        let raw: BTreeMap<String, String> = serde_yaml::from_str(source)?;
        let mut palette = Palette::new(name);
        for (key, value) in raw {
            let token: ColorToken = key.parse()?;
            let color = value
                .parse::<Color>()
                .map_err(|source| PaletteError::InvalidColor { token, source })?;
            palette.colors.insert(token, color);
        }
        Ok(palette)
    }

    /// Returns the palette name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the color for a token, if defined.
    pub fn get(&self, token: ColorToken) -> Option<Color> {
        self.colors.get(&token).copied()
    }

    /// Iterates over the defined tokens in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, Color)> + '_ {
        self.colors.iter().map(|(token, color)| (*token, *color))
    }

    /// Returns the number of defined tokens.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the tokens this palette lacks, in declaration order.
    pub fn missing_tokens(&self) -> Vec<ColorToken> {
        ColorToken::ALL
            .iter()
            .copied()
            .filter(|token| !self.colors.contains_key(token))
            .collect()
    }

    /// Returns the tokens whose color is not a valid style sheet value, in
    /// declaration order.
    pub fn invalid_tokens(&self) -> Vec<ColorToken> {
        self.colors
            .iter()
            .filter(|(_, color)| !color.is_valid())
            .map(|(token, _)| *token)
            .collect()
    }

    /// Checks that every token is defined with a valid color.
    pub fn validate(&self) -> Result<(), IncompleteTokenError> {
        self.resolve().map(|_| ())
    }

    /// Produces the fully-populated view the compiler renders from.
    pub(crate) fn resolve(&self) -> Result<ResolvedPalette, IncompleteTokenError> {
        let missing = self.missing_tokens();
        let invalid = self.invalid_tokens();
        if !missing.is_empty() || !invalid.is_empty() {
            return Err(IncompleteTokenError {
                palette: self.name.clone(),
                missing,
                invalid,
            });
        }

        let mut colors = [Color::hex(0); ColorToken::COUNT];
        for (token, color) in &self.colors {
            colors[token.index()] = *color;
        }
        Ok(ResolvedPalette { colors })
    }
}

/// A palette known to define every token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedPalette {
    colors: [Color; ColorToken::COUNT],
}

impl Index<ColorToken> for ResolvedPalette {
    type Output = Color;

    fn index(&self, token: ColorToken) -> &Color {
        &self.colors[token.index()]
    }
}

fn palette(name: &str, entries: &[(ColorToken, Color)]) -> Palette {
    entries
        .iter()
        .fold(Palette::new(name), |palette, (token, color)| {
            palette.with(*token, *color)
        })
}

static DARK: Lazy<Palette> = Lazy::new(|| {
    use ColorToken::*;
    palette(
        "dark",
        &[
            // Warm pink accent
            (Accent, Color::hex(0xe8a8c0)),
            (AccentDark, Color::hex(0xc0708a)),
            (AccentLight, Color::rgba(232, 168, 192, 0.15)),
            (AccentBg, Color::rgba(232, 168, 192, 0.08)),
            (AccentText, Color::hex(0xe8a8c0)),
            // Lavender
            (Secondary, Color::hex(0xb898d0)),
            (SecondaryDark, Color::hex(0x9878b8)),
            (SecondaryLight, Color::rgba(184, 152, 208, 0.15)),
            (SecondaryBg, Color::rgba(184, 152, 208, 0.08)),
            (SecondaryText, Color::hex(0xb898d0)),
            // Warm dark browns
            (Bg, Color::hex(0x1a1614)),
            (Surface, Color::hex(0x201c1a)),
            (SurfaceHover, Color::hex(0x352f2b)),
            (SurfaceElevated, Color::hex(0x2a2420)),
            (Border, Color::hex(0x3a3230)),
            (BorderLight, Color::hex(0x2a2420)),
            // Warm whites
            (Text, Color::hex(0xf5f0ec)),
            (TextSecondary, Color::hex(0xa89e98)),
            (TextMuted, Color::hex(0x6e6460)),
            (Success, Color::hex(0x88c8a8)),
            (SuccessBg, Color::rgba(136, 200, 168, 0.1)),
            (Danger, Color::hex(0xe87070)),
            (DangerBg, Color::rgba(232, 112, 112, 0.1)),
            (Warning, Color::hex(0xe8c070)),
            (WarningBg, Color::rgba(232, 192, 112, 0.1)),
            (Info, Color::hex(0x70b8e8)),
            (InfoBg, Color::rgba(112, 184, 232, 0.1)),
            (GlassBg, Color::rgba(32, 28, 26, 0.72)),
            (GlassBorder, Color::rgba(232, 168, 192, 0.08)),
        ],
    )
});

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    use ColorToken::*;
    palette(
        "light",
        &[
            // Deeper pink for light backgrounds
            (Accent, Color::hex(0xd4849c)),
            (AccentDark, Color::hex(0xc0708a)),
            (AccentLight, Color::hex(0xfce4ec)),
            (AccentBg, Color::hex(0xfce4ec)),
            (AccentText, Color::hex(0x8a3a52)),
            (Secondary, Color::hex(0x9878b8)),
            (SecondaryDark, Color::hex(0x7a5a9a)),
            (SecondaryLight, Color::hex(0xd8c8e8)),
            (SecondaryBg, Color::hex(0xf3e5f5)),
            (SecondaryText, Color::hex(0x5a3878)),
            // Warm cream
            (Bg, Color::hex(0xfefdfb)),
            (Surface, Color::hex(0xfff9f5)),
            (SurfaceHover, Color::hex(0xf0ebe5)),
            (SurfaceElevated, Color::hex(0xffffff)),
            (Border, Color::hex(0xe8e0dc)),
            (BorderLight, Color::hex(0xf0e8e4)),
            (Text, Color::hex(0x1d1d1f)),
            (TextSecondary, Color::hex(0x6e6e73)),
            (TextMuted, Color::hex(0xa1a1a6)),
            (Success, Color::hex(0x2ea860)),
            (SuccessBg, Color::rgba(46, 168, 96, 0.1)),
            (Danger, Color::hex(0xdc3545)),
            (DangerBg, Color::rgba(220, 53, 69, 0.1)),
            (Warning, Color::hex(0xd4a020)),
            (WarningBg, Color::rgba(212, 160, 32, 0.1)),
            (Info, Color::hex(0x2080c0)),
            (InfoBg, Color::rgba(32, 128, 192, 0.1)),
            (GlassBg, Color::rgba(255, 255, 255, 0.72)),
            (GlassBorder, Color::rgba(0, 0, 0, 0.06)),
        ],
    )
});

pub(crate) fn dark() -> &'static Palette {
    Lazy::force(&DARK)
}

pub(crate) fn light() -> &'static Palette {
    Lazy::force(&LIGHT)
}

/// Names of the registered palettes.
pub const PALETTE_NAMES: &[&str] = &["dark", "light"];

/// Returns a registered palette by name.
///
/// # Errors
///
/// Returns [`UnknownPaletteError`] for any name other than `"dark"` or `"light"`.
///
/// ```rust
/// use rosewood::{get_palette, Color, ColorToken};
///
/// let dark = get_palette("dark").unwrap();
/// assert_eq!(dark.get(ColorToken::Surface), Some(Color::hex(0x201c1a)));
/// assert!(get_palette("sepia").is_err());
/// ```
pub fn get_palette(name: &str) -> Result<&'static Palette, UnknownPaletteError> {
    match name {
        "dark" => Ok(dark()),
        "light" => Ok(light()),
        other => Err(UnknownPaletteError {
            name: other.to_string(),
        }),
    }
}

/// Returns the names of the registered palettes.
pub fn registered_palettes() -> &'static [&'static str] {
    PALETTE_NAMES
}
