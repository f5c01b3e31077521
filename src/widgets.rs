//! Pre-styled widget adapters.
//!
//! An adapter is a [`VariantDescriptor`] (what to show, which variant) plus
//! the host widget created for it. The adapter's only styling job is writing
//! the variant tag into the widget's `class` property and forcing a
//! restyle; the compiled style sheet does the rest.
//!
//! ```rust,ignore
//! use rosewood::widgets::StyledWidget;
//!
//! rosewood::host::install_toolkit(MyQtBinding::new());
//! let submit = StyledWidget::button("Submit", "primary")?;
//! let delete = StyledWidget::button("Delete", "danger")?;
//! ```

use std::fmt;

use crate::compiler::{Category, BADGE, CARD, VARIANT_PROPERTY};
use crate::error::MissingHostToolkitError;
use crate::host::{self, DropShadow, HostWidget, Toolkit};
use crate::tokens::Color;

/// Minimum height given to text inputs, in pixels.
pub const INPUT_MIN_HEIGHT: u32 = 40;

/// Shadow applied to `elevated` cards.
pub const CARD_SHADOW: DropShadow = DropShadow {
    blur_radius: 20,
    offset: (0, 4),
    color: Color::rgba(0, 0, 0, 100.0 / 255.0),
};

/// The widget types Rosewood provides adapters for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Label,
    Input,
    Card,
    Badge,
}

impl WidgetKind {
    /// The style document category that styles this widget.
    pub fn category(self) -> Category {
        match self {
            WidgetKind::Button => Category::Button,
            WidgetKind::Label => Category::Label,
            WidgetKind::Input => Category::TextInput,
            WidgetKind::Card => Category::Card,
            WidgetKind::Badge => Category::Badge,
        }
    }

    /// The type name the host widget must report for selectors to match.
    pub fn type_name(self) -> &'static str {
        match self {
            WidgetKind::Button => "QPushButton",
            WidgetKind::Label => "QLabel",
            WidgetKind::Input => "QLineEdit",
            WidgetKind::Card => CARD[0],
            WidgetKind::Badge => BADGE[0],
        }
    }

    fn component(self) -> &'static str {
        match self {
            WidgetKind::Button => "button",
            WidgetKind::Label => "label",
            WidgetKind::Input => "input",
            WidgetKind::Card => "card",
            WidgetKind::Badge => "badge",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

/// What an adapter shows and how it is tagged. Toolkit-independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub kind: WidgetKind,
    /// Label text, or placeholder text for inputs.
    pub text: String,
    /// Requested variant; `"default"` or `""` for the base style.
    pub variant: String,
}

impl VariantDescriptor {
    pub fn new(kind: WidgetKind, text: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            variant: variant.into(),
        }
    }

    /// The value written to the widget's `class` property.
    ///
    /// Variants the category does not style map to the empty string, which
    /// leaves the widget on its base rule.
    pub fn class_value(&self) -> &str {
        if self.kind.category().accepts(&self.variant) {
            &self.variant
        } else {
            ""
        }
    }
}

type ClickHandler = Box<dyn FnMut() + Send>;

/// A host widget driven by a [`VariantDescriptor`].
pub struct StyledWidget {
    descriptor: VariantDescriptor,
    host: Box<dyn HostWidget>,
    on_click: Option<ClickHandler>,
}

impl StyledWidget {
    /// Creates a button. Variants: `primary`, `danger`, `ghost`.
    pub fn button(text: &str, variant: &str) -> Result<Self, MissingHostToolkitError> {
        Self::installed(VariantDescriptor::new(WidgetKind::Button, text, variant))
    }

    /// Creates a label. Variants: `secondary`, `muted`, `accent`.
    pub fn label(text: &str, variant: &str) -> Result<Self, MissingHostToolkitError> {
        Self::installed(VariantDescriptor::new(WidgetKind::Label, text, variant))
    }

    /// Creates a single-line input showing `placeholder` when empty.
    pub fn input(placeholder: &str) -> Result<Self, MissingHostToolkitError> {
        Self::installed(VariantDescriptor::new(WidgetKind::Input, placeholder, ""))
    }

    /// Creates a card container. Variants: `elevated`, `interactive`.
    pub fn card(variant: &str) -> Result<Self, MissingHostToolkitError> {
        Self::installed(VariantDescriptor::new(WidgetKind::Card, "", variant))
    }

    /// Creates a badge. Variants: `accent`, `success`, `danger`, `warning`, `info`.
    pub fn badge(text: &str, variant: &str) -> Result<Self, MissingHostToolkitError> {
        Self::installed(VariantDescriptor::new(WidgetKind::Badge, text, variant))
    }

    fn installed(descriptor: VariantDescriptor) -> Result<Self, MissingHostToolkitError> {
        let toolkit = host::toolkit(descriptor.kind.component())?;
        Ok(Self::build(toolkit, descriptor))
    }

    /// Creates the adapter with an explicit toolkit, bypassing the
    /// process-wide registration.
    pub fn build(toolkit: &dyn Toolkit, descriptor: VariantDescriptor) -> Self {
        let host = toolkit.create(&descriptor);
        let mut widget = Self {
            descriptor,
            host,
            on_click: None,
        };
        if widget.descriptor.kind == WidgetKind::Input {
            widget.host.set_placeholder(&widget.descriptor.text);
            widget.host.set_minimum_height(INPUT_MIN_HEIGHT);
        }
        if widget.descriptor.kind == WidgetKind::Badge {
            widget.host.set_centered(true);
        }
        widget.apply_variant();
        widget
    }

    pub fn descriptor(&self) -> &VariantDescriptor {
        &self.descriptor
    }

    pub fn kind(&self) -> WidgetKind {
        self.descriptor.kind
    }

    /// The requested variant, as given.
    pub fn variant(&self) -> &str {
        &self.descriptor.variant
    }

    pub fn host(&self) -> &dyn HostWidget {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> &mut dyn HostWidget {
        self.host.as_mut()
    }

    /// Switches variant, rewriting the class property and restyling.
    pub fn set_variant(&mut self, variant: &str) {
        self.descriptor.variant = variant.to_string();
        self.apply_variant();
    }

    /// Registers the callback fired when an interactive card is pressed.
    pub fn on_clicked<F>(&mut self, handler: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_click = Some(Box::new(handler));
    }

    /// Forwards a press event from the host.
    ///
    /// Returns true if the press was turned into a click, which only
    /// interactive cards do.
    pub fn press(&mut self) -> bool {
        if !self.is_interactive_card() {
            return false;
        }
        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
        true
    }

    fn is_interactive_card(&self) -> bool {
        self.descriptor.kind == WidgetKind::Card && self.descriptor.variant == "interactive"
    }

    fn apply_variant(&mut self) {
        let requested = self.descriptor.variant.as_str();
        let class = self.descriptor.class_value();
        if class.is_empty() && !requested.is_empty() && requested != "default" {
            tracing::warn!(
                widget = %self.descriptor.kind,
                variant = requested,
                "unknown variant; using base style"
            );
        }

        self.host.set_property(VARIANT_PROPERTY, class);

        if self.descriptor.kind == WidgetKind::Card {
            let elevated = class == "elevated";
            self.host
                .set_drop_shadow(if elevated { Some(CARD_SHADOW) } else { None });
            self.host.set_pointer_cursor(self.is_interactive_card());
        }

        self.host.restyle();
    }
}

impl fmt::Debug for StyledWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledWidget")
            .field("descriptor", &self.descriptor)
            .field("class", &self.host.property(VARIANT_PROPERTY))
            .finish_non_exhaustive()
    }
}
