//! The compiled style document.

use std::fmt;

use serde::Serialize;

use super::selector::Selector;

/// The closed set of UI element categories the compiler covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Global,
    Label,
    Button,
    TextInput,
    ComboBox,
    CheckRadio,
    ScrollBar,
    ItemView,
    Tabs,
    GroupBox,
    ProgressBar,
    Slider,
    SpinBox,
    ToolTip,
    Menu,
    StatusBar,
    Card,
    Badge,
}

impl Category {
    /// Every category, in emission order.
    pub const ALL: &'static [Category] = &[
        Category::Global,
        Category::Label,
        Category::Button,
        Category::TextInput,
        Category::ComboBox,
        Category::CheckRadio,
        Category::ScrollBar,
        Category::ItemView,
        Category::Tabs,
        Category::GroupBox,
        Category::ProgressBar,
        Category::Slider,
        Category::SpinBox,
        Category::ToolTip,
        Category::Menu,
        Category::StatusBar,
        Category::Card,
        Category::Badge,
    ];

    /// Section heading used in the written style sheet.
    pub fn title(self) -> &'static str {
        match self {
            Category::Global => "Global",
            Category::Label => "Labels",
            Category::Button => "Buttons",
            Category::TextInput => "Inputs",
            Category::ComboBox => "ComboBox",
            Category::CheckRadio => "Checkbox & Radio",
            Category::ScrollBar => "Scrollbars",
            Category::ItemView => "TreeView & ListView",
            Category::Tabs => "TabWidget",
            Category::GroupBox => "GroupBox",
            Category::ProgressBar => "ProgressBar",
            Category::Slider => "Slider",
            Category::SpinBox => "SpinBox",
            Category::ToolTip => "ToolTip",
            Category::Menu => "Menu",
            Category::StatusBar => "StatusBar",
            Category::Card => "Card",
            Category::Badge => "Badge",
        }
    }

    /// The variant tags this category styles. Any other tag falls back to
    /// the base rule.
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            Category::Button => &["primary", "danger", "ghost"],
            Category::Label => &["muted", "secondary", "accent"],
            Category::Card => &["elevated", "interactive"],
            Category::Badge => &["accent", "success", "danger", "warning", "info"],
            _ => &[],
        }
    }

    /// Returns true if `variant` is one of this category's tags.
    pub fn accepts(self, variant: &str) -> bool {
        self.variants().contains(&variant)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub property: &'static str,
    pub value: String,
}

impl Declaration {
    pub fn new(property: &'static str, value: impl fmt::Display) -> Self {
        Self {
            property,
            value: value.to_string(),
        }
    }
}

/// A selector with its declarations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleRule {
    pub category: Category,
    pub selector: Selector,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Returns the value of a property declared by this rule.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// Returns true for the unqualified rule styling the category's widgets.
    pub fn is_base(&self) -> bool {
        self.selector.variant_tag().is_none() && self.selector.is_resting()
    }
}

/// The ordered rules produced by [`compile`](crate::compile).
///
/// Rules for one category are contiguous, and within a category the base
/// rule precedes every variant rule, so declaration order alone lets variant
/// rules override the base.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDocument {
    pub(crate) palette: String,
    pub(crate) rules: Vec<StyleRule>,
}

impl StyleDocument {
    /// Name of the palette the document was compiled from.
    pub fn palette(&self) -> &str {
        &self.palette
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleRule> {
        self.rules.iter()
    }

    /// Rules belonging to one category, in document order.
    pub fn rules_for(&self, category: Category) -> impl Iterator<Item = &StyleRule> + '_ {
        self.rules.iter().filter(move |rule| rule.category == category)
    }

    /// Finds a rule by its rendered selector text.
    pub fn find(&self, selector: &str) -> Option<&StyleRule> {
        self.rules
            .iter()
            .find(|rule| rule.selector.to_string() == selector)
    }

    /// Computes the declarations that apply to a resting widget of
    /// `category` tagged with `variant`.
    ///
    /// Base rules are applied first, then the variant's rules, in document
    /// order; later declarations of a property replace earlier ones. A tag
    /// the category does not define contributes nothing, so the widget keeps
    /// its base appearance.
    ///
    /// Only rules selecting the same element types as the category's first
    /// rule take part. For [`Category::Global`] that is `QWidget`; the
    /// window and dialog rule is not merged in.
    ///
    /// ```rust
    /// use rosewood::{compile, get_palette, spacing, radius, typography, Category};
    ///
    /// let doc = compile(get_palette("dark").unwrap(), spacing(), radius(), typography()).unwrap();
    /// let primary = doc.resolve(Category::Button, Some("primary"));
    /// let unknown = doc.resolve(Category::Button, Some("sparkly"));
    /// let base = doc.resolve(Category::Button, None);
    /// assert_eq!(unknown, base);
    /// assert_ne!(primary, base);
    /// ```
    pub fn resolve(&self, category: Category, variant: Option<&str>) -> Vec<Declaration> {
        let variant = variant.filter(|tag| category.accepts(tag));
        let mut resolved: Vec<Declaration> = Vec::new();
        let Some(elements) = self
            .rules_for(category)
            .next()
            .map(|rule| rule.selector.elements())
        else {
            return resolved;
        };

        let matching = self.rules_for(category).filter(|rule| {
            rule.selector.elements() == elements
                && rule.selector.is_resting()
                && match rule.selector.variant_tag() {
                    None => true,
                    Some(tag) => Some(tag) == variant,
                }
        });

        for rule in matching {
            for decl in &rule.declarations {
                match resolved.iter_mut().find(|d| d.property == decl.property) {
                    Some(existing) => existing.value.clone_from(&decl.value),
                    None => resolved.push(decl.clone()),
                }
            }
        }
        resolved
    }
}

impl<'a> IntoIterator for &'a StyleDocument {
    type Item = &'a StyleRule;
    type IntoIter = std::slice::Iter<'a, StyleRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
