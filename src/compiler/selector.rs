//! Structured selectors in the Qt style sheet dialect.

use std::fmt;

use serde::{Serialize, Serializer};

/// Interactive states emitted as pseudo-state qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Hover,
    Focus,
    Pressed,
    Checked,
    Selected,
    Disabled,
}

impl State {
    /// Returns the pseudo-state name without the leading colon.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Hover => "hover",
            State::Focus => "focus",
            State::Pressed => "pressed",
            State::Checked => "checked",
            State::Selected => "selected",
            State::Disabled => "disabled",
        }
    }
}

/// A selector list such as `QLineEdit:focus, QTextEdit:focus` or
/// `QPushButton[class="primary"]:hover`.
///
/// Every element in the list receives the same variant predicate,
/// sub-control, pseudo-states and descendant.
///
/// ```rust
/// use rosewood::{Selector, State};
///
/// let selector = Selector::of(&["QPushButton"]).variant("primary").state(State::Hover);
/// assert_eq!(selector.to_string(), r#"QPushButton[class="primary"]:hover"#);
///
/// let handle = Selector::of(&["QScrollBar"]).part("handle").pseudo("vertical");
/// assert_eq!(handle.to_string(), "QScrollBar::handle:vertical");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    elements: &'static [&'static str],
    variant: Option<&'static str>,
    part: Option<&'static str>,
    pseudo: Vec<&'static str>,
    descendant: Option<&'static str>,
}

/// The widget property the variant predicate matches against.
pub const VARIANT_PROPERTY: &str = "class";

impl Selector {
    /// Selects the given element types.
    pub fn of(elements: &'static [&'static str]) -> Self {
        Self {
            elements,
            variant: None,
            part: None,
            pseudo: Vec::new(),
            descendant: None,
        }
    }

    /// Restricts the selector to widgets carrying a variant tag.
    pub fn variant(mut self, tag: &'static str) -> Self {
        self.variant = Some(tag);
        self
    }

    /// Targets a sub-control such as `indicator` or `handle`.
    pub fn part(mut self, part: &'static str) -> Self {
        self.part = Some(part);
        self
    }

    /// Adds an interactive state qualifier.
    pub fn state(self, state: State) -> Self {
        self.pseudo(state.as_str())
    }

    /// Adds an arbitrary pseudo-state qualifier such as `vertical`.
    pub fn pseudo(mut self, pseudo: &'static str) -> Self {
        self.pseudo.push(pseudo);
        self
    }

    /// Selects a descendant type inside the matched elements.
    pub fn descendant(mut self, element: &'static str) -> Self {
        self.descendant = Some(element);
        self
    }

    pub fn elements(&self) -> &'static [&'static str] {
        self.elements
    }

    pub fn variant_tag(&self) -> Option<&'static str> {
        self.variant
    }

    pub fn sub_control(&self) -> Option<&'static str> {
        self.part
    }

    pub fn pseudo_states(&self) -> &[&'static str] {
        &self.pseudo
    }

    /// Returns true if this selects whole widgets in their resting state:
    /// no sub-control, no pseudo-state, no descendant.
    pub fn is_resting(&self) -> bool {
        self.part.is_none() && self.pseudo.is_empty() && self.descendant.is_none()
    }

    fn write_one(&self, f: &mut fmt::Formatter<'_>, element: &str) -> fmt::Result {
        f.write_str(element)?;
        if let Some(tag) = self.variant {
            write!(f, "[{}=\"{}\"]", VARIANT_PROPERTY, tag)?;
        }
        if let Some(part) = self.part {
            write!(f, "::{}", part)?;
        }
        for pseudo in &self.pseudo {
            write!(f, ":{}", pseudo)?;
        }
        if let Some(descendant) = self.descendant {
            write!(f, " {}", descendant)?;
        }
        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            self.write_one(f, element)?;
        }
        Ok(())
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
