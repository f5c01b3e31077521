//! The two registered color modes.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownPaletteError;
use crate::tokens::{self, Palette};

/// Which registered palette a theme uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the palette name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Returns the registered palette for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => tokens::dark(),
            ThemeMode::Light => tokens::light(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeMode {
    type Err = UnknownPaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(UnknownPaletteError {
                name: other.to_string(),
            }),
        }
    }
}
