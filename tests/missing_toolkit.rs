//! Without a registered toolkit the adapters fail and everything else works.

use rosewood::host;
use rosewood::{compile, get_palette, radius, spacing, typography, StyledWidget, Theme};

#[test]
fn test_adapters_fail_without_toolkit() {
    assert!(!host::is_available());

    let err = StyledWidget::button("Submit", "primary").unwrap_err();
    assert_eq!(err.component, "button");
    assert!(err.to_string().contains("button"));

    assert_eq!(StyledWidget::label("Hi", "").unwrap_err().component, "label");
    assert_eq!(StyledWidget::input("Name").unwrap_err().component, "input");
    assert_eq!(StyledWidget::card("elevated").unwrap_err().component, "card");
    assert_eq!(StyledWidget::badge("New", "info").unwrap_err().component, "badge");
}

#[test]
fn test_compiler_and_theme_need_no_toolkit() {
    let doc = compile(get_palette("dark").unwrap(), spacing(), radius(), typography()).unwrap();
    assert!(!doc.is_empty());
    assert!(Theme::default().stylesheet().unwrap().contains("QPushButton"));
    assert!(!host::is_available());
}
