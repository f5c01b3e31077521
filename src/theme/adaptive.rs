//! Initial mode selection from the operating system's appearance setting.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::mode::ThemeMode;

type ThemeDetector = fn() -> ThemeMode;

static THEME_DETECTOR: Lazy<Mutex<ThemeDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`Theme::from_system`](crate::Theme::from_system).
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_theme_detector(detector: ThemeDetector) {
    let mut guard = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores detection from the operating system.
pub fn reset_theme_detector() {
    set_theme_detector(os_theme_detector);
}

pub(crate) fn detect_mode() -> ThemeMode {
    let detector = THEME_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ThemeMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ThemeMode::Dark,
        OsThemeMode::Light => ThemeMode::Light,
    }
}
