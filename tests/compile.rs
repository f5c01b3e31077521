//! End-to-end properties of the token store, compiler and theme.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rosewood::{
    compile, get_palette, radius, registered_palettes, spacing, typography, Category, Color,
    ColorToken, Palette, Theme, ThemeMode,
};

fn compile_named(name: &str) -> rosewood::StyleDocument {
    compile(get_palette(name).unwrap(), spacing(), radius(), typography()).unwrap()
}

#[test]
fn test_compile_is_deterministic() {
    for name in registered_palettes() {
        let first = compile_named(name);
        let second = compile_named(name);
        assert_eq!(first, second);
        assert_eq!(
            first.to_stylesheet().unwrap(),
            second.to_stylesheet().unwrap()
        );
    }
}

#[test]
fn test_registered_palettes_share_token_names() {
    let keys = |name: &str| -> BTreeSet<String> {
        let json = serde_json::to_value(get_palette(name).unwrap()).unwrap();
        json["colors"].as_object().unwrap().keys().cloned().collect()
    };
    let dark = keys("dark");
    assert_eq!(dark.len(), ColorToken::ALL.len());
    assert_eq!(dark, keys("light"));
}

#[test]
fn test_documents_have_same_shape_across_palettes() {
    let dark = compile_named("dark");
    let light = compile_named("light");
    assert_eq!(dark.len(), light.len());
    for (d, l) in dark.iter().zip(light.iter()) {
        assert_eq!(d.selector, l.selector);
        let props = |rule: &rosewood::StyleRule| {
            rule.declarations
                .iter()
                .map(|decl| decl.property)
                .collect::<Vec<_>>()
        };
        assert_eq!(props(d), props(l));
    }
}

#[test]
fn test_base_rule_precedes_every_variant_rule() {
    let doc = compile_named("dark");
    for category in Category::ALL.iter().copied() {
        if category.variants().is_empty() {
            continue;
        }
        let positions: Vec<(usize, &rosewood::StyleRule)> = doc
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.category == category)
            .collect();
        let base = positions
            .iter()
            .find(|(_, rule)| rule.is_base())
            .map(|(index, _)| *index)
            .unwrap_or_else(|| panic!("{:?} has no base rule", category));
        for (index, rule) in &positions {
            if rule.selector.variant_tag().is_some() {
                assert!(base < *index, "{} precedes its base", rule.selector);
            }
        }
    }
}

#[test]
fn test_unknown_variant_resolves_to_base() {
    let doc = compile_named("dark");
    for category in Category::ALL.iter().copied() {
        assert_eq!(
            doc.resolve(category, Some("no-such-variant")),
            doc.resolve(category, None),
        );
    }
    // a tag valid elsewhere is still unknown here
    assert_eq!(
        doc.resolve(Category::Label, Some("primary")),
        doc.resolve(Category::Label, None)
    );
}

#[test]
fn test_known_variants_override_base() {
    let doc = compile_named("light");
    for category in Category::ALL.iter().copied() {
        for variant in category.variants() {
            assert_ne!(
                doc.resolve(category, Some(variant)),
                doc.resolve(category, None),
                "{:?} variant {} changes nothing",
                category,
                variant
            );
        }
    }
}

#[test]
fn test_two_toggles_return_to_start() {
    let start = Theme::new(ThemeMode::Dark);
    let mut theme = Theme::new(ThemeMode::Dark);
    theme.toggle().toggle();
    assert_eq!(theme.mode(), start.mode());
    assert_eq!(theme.palette(), start.palette());
    assert_eq!(theme.render().unwrap(), start.render().unwrap());
}

#[test]
fn test_single_toggle_switches_palette() {
    let mut theme = Theme::default();
    theme.toggle();
    assert_eq!(theme.mode(), ThemeMode::Light);
    assert_eq!(theme.palette().name(), "light");
}

#[test]
fn test_token_values_are_well_formed() {
    for name in registered_palettes() {
        let palette = get_palette(name).unwrap();
        for (token, color) in palette.iter() {
            assert!(color.is_valid(), "{}.{} = {}", name, token, color);
            let reparsed: Color = color.to_string().parse().unwrap();
            assert_eq!(reparsed, color);
        }
    }
    let s = spacing();
    assert!(s.xs < s.sm && s.sm < s.md && s.md < s.lg);
    assert_eq!(radius().full, 9999);
    assert!(typography().sizes().iter().all(|(_, size)| *size > 0));
}

#[test]
fn test_dark_button_scenario() {
    let doc = compile_named("dark");
    let base = doc.find("QPushButton").unwrap();
    assert_eq!(base.get("background"), Some("#201c1a"));
    let primary = doc.find(r#"QPushButton[class="primary"]"#).unwrap();
    assert_eq!(primary.get("background"), Some("#e8a8c0"));
}

#[test]
fn test_sepia_is_unknown() {
    let err = get_palette("sepia").unwrap_err();
    assert_eq!(err.name, "sepia");
    assert!(Theme::from_name("sepia").is_err());
}

#[test]
fn test_palette_without_info_produces_no_document() {
    let partial = get_palette("dark").unwrap().clone().without(ColorToken::Info);
    let result = compile(&partial, spacing(), radius(), typography());
    let err = result.unwrap_err();
    assert_eq!(err.missing, vec![ColorToken::Info]);
    assert_eq!(err.palette, "dark");
}

#[test]
fn test_yaml_palette_compiles() {
    let yaml: String = get_palette("light")
        .unwrap()
        .iter()
        .map(|(token, color)| format!("{}: \"{}\"\n", token, color))
        .collect();
    let custom = Palette::from_yaml("custom", &yaml).unwrap();
    let doc = compile(&custom, spacing(), radius(), typography()).unwrap();
    assert_eq!(doc.palette(), "custom");
    assert_eq!(doc.rules(), compile_named("light").rules());
}

fn arbitrary_palette() -> impl Strategy<Value = Palette> {
    prop::collection::vec(any::<u32>(), ColorToken::ALL.len()).prop_map(|values| {
        ColorToken::ALL
            .iter()
            .zip(values)
            .fold(Palette::new("generated"), |palette, (token, value)| {
                palette.with(*token, Color::hex(value & 0xffffff))
            })
    })
}

proptest! {
    #[test]
    fn prop_any_complete_palette_compiles_deterministically(palette in arbitrary_palette()) {
        let first = compile(&palette, spacing(), radius(), typography()).unwrap();
        let second = compile(&palette, spacing(), radius(), typography()).unwrap();
        prop_assert_eq!(first.len(), compile_named("dark").len());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_dropping_any_token_is_rejected(index in 0..ColorToken::ALL.len()) {
        let token = ColorToken::ALL[index];
        let partial = get_palette("light").unwrap().clone().without(token);
        let err = compile(&partial, spacing(), radius(), typography()).unwrap_err();
        prop_assert_eq!(err.missing, vec![token]);
    }
}
