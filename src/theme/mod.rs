//! Theme selection and application.
//!
//! - [`Theme`]: current mode plus its two palettes; toggles, renders, applies
//! - [`ThemeMode`]: dark or light
//! - [`set_theme_detector`]: overrides OS appearance detection used by
//!   [`Theme::from_system`]
//!
//! A `Theme` is plain owned state. Confine mutation to one thread, usually
//! the host toolkit's UI thread.

mod adaptive;
mod mode;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{reset_theme_detector, set_theme_detector};
pub use mode::ThemeMode;
pub use theme::{apply_theme, Theme};
