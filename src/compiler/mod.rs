//! Token-to-style-sheet compiler.
//!
//! [`compile`] binds a palette to the shared scales and produces a
//! [`StyleDocument`]: an ordered list of [`StyleRule`]s covering every
//! [`Category`]. The document is plain data; turning it into text is the job
//! of [`StylesheetWriter`](crate::StylesheetWriter).
//!
//! # Ordering
//!
//! Within a category the base rule comes first, followed by state and
//! sub-control rules, then variant rules (`[class="primary"]` and friends),
//! and finally the shared disabled rule. Variant rules only restate what
//! they change; the base rule's other declarations keep applying through the
//! host's cascade. The disabled rule has the same specificity as a variant
//! rule, so coming last keeps disabled variants muted.
//!
//! # Example
//!
//! ```rust
//! use rosewood::{compile, get_palette, spacing, radius, typography};
//!
//! let doc = compile(get_palette("dark").unwrap(), spacing(), radius(), typography()).unwrap();
//! let button = doc.find("QPushButton").unwrap();
//! assert_eq!(button.get("background"), Some("#201c1a"));
//!
//! let primary = doc.find(r#"QPushButton[class="primary"]"#).unwrap();
//! assert_eq!(primary.get("background"), Some("#e8a8c0"));
//! ```

mod document;
mod rules;
mod selector;

pub use document::{Category, Declaration, StyleDocument, StyleRule};
pub(crate) use rules::{BADGE, CARD};
pub use selector::{Selector, State, VARIANT_PROPERTY};

use crate::error::IncompleteTokenError;
use crate::tokens::{Palette, Radius, Spacing, Typography};

/// Opacity applied to every disabled widget.
pub const DISABLED_OPACITY: f32 = 0.4;

/// Compiles a palette and the shared scales into a style document.
///
/// The palette is checked for completeness and color validity before
/// anything is rendered, so a bad palette never yields a partial document.
///
/// # Errors
///
/// Returns [`IncompleteTokenError`] listing every token the palette lacks
/// and every token whose color is out of range.
pub fn compile(
    palette: &Palette,
    spacing: &Spacing,
    radius: &Radius,
    typography: &Typography,
) -> Result<StyleDocument, IncompleteTokenError> {
    let resolved = palette.resolve()?;

    let mut emitter = rules::Emitter::new(&resolved, spacing, radius, typography);
    for category in Category::ALL {
        emitter.emit(*category);
    }
    let rules = emitter.finish();

    tracing::debug!(
        palette = palette.name(),
        rules = rules.len(),
        "compiled style document"
    );

    Ok(StyleDocument {
        palette: palette.name().to_string(),
        rules,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{get_palette, radius, spacing, typography, Color, ColorToken};

    fn dark() -> StyleDocument {
        compile(get_palette("dark").unwrap(), spacing(), radius(), typography()).unwrap()
    }

    #[test]
    fn test_button_base_uses_surface() {
        let doc = dark();
        let base = doc.find("QPushButton").unwrap();
        assert_eq!(base.get("background"), Some("#201c1a"));
        assert!(base.is_base());
    }

    #[test]
    fn test_primary_button_uses_accent() {
        let doc = dark();
        let primary = doc.find(r#"QPushButton[class="primary"]"#).unwrap();
        assert_eq!(primary.get("background"), Some("#e8a8c0"));
        // Only overridden properties are restated.
        assert!(primary.get("border-radius").is_none());
    }

    #[test]
    fn test_every_category_emits_rules() {
        let doc = dark();
        for category in Category::ALL {
            assert!(doc.rules_for(*category).count() > 0, "{} has no rules", category);
        }
    }

    #[test]
    fn test_categories_are_contiguous() {
        let doc = dark();
        let mut seen: Vec<Category> = Vec::new();
        for rule in &doc {
            if seen.last() != Some(&rule.category) {
                assert!(!seen.contains(&rule.category), "{} is split", rule.category);
                seen.push(rule.category);
            }
        }
        assert_eq!(seen, Category::ALL);
    }

    #[test]
    fn test_every_declared_variant_has_a_rule() {
        let doc = dark();
        for category in Category::ALL {
            for tag in category.variants() {
                assert!(
                    doc.rules_for(*category)
                        .any(|rule| rule.selector.variant_tag() == Some(*tag)),
                    "{} lacks a rule for '{}'",
                    category,
                    tag
                );
            }
        }
    }

    #[test]
    fn test_no_rule_uses_undeclared_variant() {
        let doc = dark();
        for rule in &doc {
            if let Some(tag) = rule.selector.variant_tag() {
                assert!(rule.category.accepts(tag), "{} uses '{}'", rule.category, tag);
            }
        }
    }

    #[test]
    fn test_disabled_treatment_is_uniform() {
        let doc = dark();
        let disabled: Vec<&StyleRule> = doc
            .iter()
            .filter(|rule| rule.selector.pseudo_states().contains(&"disabled"))
            .collect();
        assert_eq!(disabled.len(), 6);
        for rule in disabled {
            assert_eq!(rule.get("opacity"), Some("0.4"));
            assert_eq!(rule.get("color"), Some("#6e6460"));
            assert_eq!(rule.declarations.len(), 2);
        }
    }

    #[test]
    fn test_light_palette_changes_colors_only() {
        let dark = dark();
        let light =
            compile(get_palette("light").unwrap(), spacing(), radius(), typography()).unwrap();
        assert_eq!(dark.len(), light.len());
        for (d, l) in dark.iter().zip(light.iter()) {
            assert_eq!(d.selector, l.selector);
        }
        assert_eq!(
            light.find("QPushButton").unwrap().get("background"),
            Some("#fff9f5")
        );
    }

    #[test]
    fn test_incomplete_palette_rejected() {
        let palette = get_palette("dark").unwrap().clone().without(ColorToken::Info);
        let err = compile(&palette, spacing(), radius(), typography()).unwrap_err();
        assert_eq!(err.missing, vec![ColorToken::Info]);
        assert_eq!(err.palette, "dark");
    }

    #[test]
    fn test_out_of_range_alpha_rejected() {
        let palette = get_palette("dark")
            .unwrap()
            .clone()
            .with(ColorToken::AccentBg, Color::rgba(232, 168, 192, f32::NAN))
            .with(ColorToken::Surface, Color::rgba(0, 0, 0, 7.5));
        let err = compile(&palette, spacing(), radius(), typography()).unwrap_err();
        assert!(err.missing.is_empty());
        assert_eq!(err.invalid, vec![ColorToken::AccentBg, ColorToken::Surface]);
        assert!(err.to_string().contains("accent_bg, surface"));
    }

    #[test]
    fn test_disabled_variant_buttons_end_muted() {
        let doc = dark();
        for tag in Category::Button.variants() {
            // Rules that match a disabled, non-hovered button with this tag.
            let color = doc
                .rules_for(Category::Button)
                .filter(|rule| {
                    rule.selector.sub_control().is_none()
                        && rule
                            .selector
                            .pseudo_states()
                            .iter()
                            .all(|state| *state == "disabled")
                        && rule.selector.variant_tag().map_or(true, |t| t == *tag)
                })
                .filter_map(|rule| rule.get("color"))
                .last();
            assert_eq!(color, Some("#6e6460"), "disabled '{}' button", tag);
        }
    }

    #[test]
    fn test_badge_status_variants() {
        let doc = dark();
        let danger = doc.find(r#"RwBadge[class="danger"]"#).unwrap();
        assert_eq!(danger.get("color"), Some("#e87070"));
        assert_eq!(danger.get("background"), Some("rgba(232, 112, 112, 0.1)"));
        let base = doc.find("RwBadge").unwrap();
        assert_eq!(base.get("border-radius"), Some("9999px"));
        assert_eq!(base.get("padding"), Some("4px 12px"));
    }

    #[test]
    fn test_scales_flow_into_rules() {
        let doc = dark();
        let input = doc.find("QLineEdit, QTextEdit, QPlainTextEdit").unwrap();
        assert_eq!(input.get("padding"), Some("8px 16px"));
        assert_eq!(input.get("border-radius"), Some("12px"));
        let global = doc.find("QWidget").unwrap();
        assert_eq!(global.get("font-size"), Some("15px"));
        assert!(global.get("font-family").unwrap().starts_with("Inter"));
    }
}
