//! Error types.
//!
//! Each failure has its own type so callers can match on exactly what went
//! wrong. [`enum@Error`] wraps all of them for code that just wants `?`.

use thiserror::Error;

use crate::tokens::ColorToken;

/// A palette name that is not registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette '{name}' (expected one of: dark, light)")]
pub struct UnknownPaletteError {
    pub name: String,
}

/// A palette that does not define every color token, or defines one with an
/// out-of-range alpha.
///
/// Returned by [`compile`](crate::compile) before any rule is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("palette '{palette}' {}", describe_problems(.missing, .invalid))]
pub struct IncompleteTokenError {
    pub palette: String,
    pub missing: Vec<ColorToken>,
    /// Tokens whose color is not a valid style sheet value.
    pub invalid: Vec<ColorToken>,
}

fn join_tokens(tokens: &[ColorToken]) -> String {
    tokens
        .iter()
        .map(|token| token.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_problems(missing: &[ColorToken], invalid: &[ColorToken]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("is missing tokens: {}", join_tokens(missing)));
    }
    if !invalid.is_empty() {
        parts.push(format!("has invalid colors for: {}", join_tokens(invalid)));
    }
    parts.join("; ")
}

/// A widget adapter was constructed with no host toolkit installed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host toolkit unavailable: cannot create {component}; install one with rosewood::host::install_toolkit")]
pub struct MissingHostToolkitError {
    pub component: &'static str,
}

/// A string that is neither `#rrggbb` nor `rgba(r, g, b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{value}': {reason}")]
pub struct InvalidColorError {
    pub value: String,
    pub reason: &'static str,
}

/// Errors from loading a user-supplied palette.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("invalid palette document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown color token '{name}'")]
    UnknownToken { name: String },

    #[error("token '{token}': {source}")]
    InvalidColor {
        token: ColorToken,
        #[source]
        source: InvalidColorError,
    },
}

/// Any error this crate produces.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    UnknownPalette(#[from] UnknownPaletteError),

    #[error(transparent)]
    IncompleteToken(#[from] IncompleteTokenError),

    #[error(transparent)]
    MissingHostToolkit(#[from] MissingHostToolkitError),

    #[error(transparent)]
    InvalidColor(#[from] InvalidColorError),

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error("failed to write style sheet: {0}")]
    Render(#[from] minijinja::Error),
}
