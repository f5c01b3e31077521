//! Spacing, radius and typography scales shared by every palette.

use serde::Serialize;

/// Spacing scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Spacing {
    pub xs: u32,
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub xxl: u32,
    pub xxxl: u32,
}

/// Corner radius scale in pixels. `full` is large enough to produce pills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Radius {
    pub sm: u32,
    pub md: u32,
    pub lg: u32,
    pub xl: u32,
    pub full: u32,
}

/// Font families and the font size scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Typography {
    /// Comma-separated fallback list for body text.
    pub font_family: &'static str,
    /// Comma-separated fallback list for code.
    pub font_mono: &'static str,
    pub size_xs: u32,
    pub size_sm: u32,
    pub size_base: u32,
    pub size_md: u32,
    pub size_lg: u32,
    pub size_xl: u32,
    pub size_2xl: u32,
    pub size_3xl: u32,
}

impl Typography {
    /// Font sizes from smallest to largest, with their step names.
    pub fn sizes(&self) -> [(&'static str, u32); 8] {
        [
            ("xs", self.size_xs),
            ("sm", self.size_sm),
            ("base", self.size_base),
            ("md", self.size_md),
            ("lg", self.size_lg),
            ("xl", self.size_xl),
            ("2xl", self.size_2xl),
            ("3xl", self.size_3xl),
        ]
    }
}

static SPACING: Spacing = Spacing {
    xs: 4,
    sm: 8,
    md: 16,
    lg: 24,
    xl: 32,
    xxl: 48,
    xxxl: 64,
};

static RADIUS: Radius = Radius {
    sm: 8,
    md: 12,
    lg: 16,
    xl: 24,
    full: 9999,
};

static TYPOGRAPHY: Typography = Typography {
    font_family: "Inter, -apple-system, BlinkMacSystemFont, 'SF Pro Display', 'Segoe UI', sans-serif",
    font_mono: "'SF Mono', 'Fira Code', 'Cascadia Code', monospace",
    size_xs: 12,
    size_sm: 14,
    size_base: 15,
    size_md: 16,
    size_lg: 18,
    size_xl: 20,
    size_2xl: 24,
    size_3xl: 30,
};

/// Returns the shared spacing scale.
pub fn spacing() -> &'static Spacing {
    &SPACING
}

/// Returns the shared radius scale.
pub fn radius() -> &'static Radius {
    &RADIUS
}

/// Returns the shared typography table.
pub fn typography() -> &'static Typography {
    &TYPOGRAPHY
}
