//! Adapters created through the process-wide toolkit registration.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rosewood::host::{self, DropShadow};
use rosewood::widgets::CARD_SHADOW;
use rosewood::{HostWidget, StyleTarget, StyledWidget, Toolkit, VariantDescriptor, WidgetKind};

type Log = Arc<Mutex<Vec<String>>>;

struct RecordingWidget {
    type_name: &'static str,
    properties: HashMap<String, String>,
    log: Log,
}

impl RecordingWidget {
    fn record(&self, event: String) {
        self.log.lock().unwrap().push(format!("{} {}", self.type_name, event));
    }
}

impl StyleTarget for RecordingWidget {
    fn set_style_sheet(&mut self, _style_sheet: &str) {}
}

impl HostWidget for RecordingWidget {
    fn property(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }

    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
        self.record(format!("{}={}", name, value));
    }

    fn restyle(&mut self) {
        self.record("restyle".to_string());
    }

    fn set_drop_shadow(&mut self, shadow: Option<DropShadow>) {
        self.record(format!("shadow={}", shadow.is_some()));
    }
}

struct RecordingToolkit {
    log: Log,
}

impl Toolkit for RecordingToolkit {
    fn name(&self) -> &str {
        "recording"
    }

    fn create(&self, descriptor: &VariantDescriptor) -> Box<dyn HostWidget> {
        Box::new(RecordingWidget {
            type_name: descriptor.kind.type_name(),
            properties: HashMap::new(),
            log: self.log.clone(),
        })
    }
}

fn install() -> Log {
    static LOG: once_cell::sync::Lazy<Log> = once_cell::sync::Lazy::new(Log::default);
    host::install_toolkit(RecordingToolkit { log: LOG.clone() });
    LOG.clone()
}

fn events_for(log: &Log, type_name: &str) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|event| event.starts_with(type_name))
        .cloned()
        .collect()
}

#[test]
fn test_install_is_first_wins() {
    install();
    assert!(host::is_available());
    assert!(!host::install_toolkit(RecordingToolkit {
        log: Log::default()
    }));
    assert_eq!(host::toolkit("button").unwrap().name(), "recording");
}

#[test]
fn test_button_property_is_written_before_restyle() {
    let log = install();
    let button = StyledWidget::button("Delete", "danger").unwrap();
    assert_eq!(button.kind(), WidgetKind::Button);
    assert_eq!(button.host().property("class").as_deref(), Some("danger"));

    let events = events_for(&log, "QPushButton");
    let set = events
        .iter()
        .position(|e| e == "QPushButton class=danger")
        .unwrap();
    let restyle = events
        .iter()
        .skip(set)
        .position(|e| e == "QPushButton restyle");
    assert!(restyle.is_some());
}

#[test]
fn test_default_and_unknown_variants_use_empty_class() {
    install();
    for variant in ["", "default", "glow"] {
        let label = StyledWidget::label("Hello", variant).unwrap();
        assert_eq!(label.host().property("class").as_deref(), Some(""));
    }
}

#[test]
fn test_card_shadow_follows_variant() {
    let log = install();
    let mut card = StyledWidget::card("elevated").unwrap();
    card.set_variant("interactive");
    let events = events_for(&log, "RwCard");
    assert!(events.contains(&"RwCard shadow=true".to_string()));
    assert!(events.contains(&"RwCard shadow=false".to_string()));
    assert_eq!(CARD_SHADOW.blur_radius, 20);
    assert_eq!(CARD_SHADOW.offset, (0, 4));
}

#[test]
fn test_badge_and_input_construct() {
    install();
    let badge = StyledWidget::badge("3", "warning").unwrap();
    assert_eq!(badge.descriptor().text, "3");
    assert_eq!(badge.host().property("class").as_deref(), Some("warning"));

    let input = StyledWidget::input("Search...").unwrap();
    assert_eq!(input.variant(), "");
    assert_eq!(input.host().property("class").as_deref(), Some(""));
}
