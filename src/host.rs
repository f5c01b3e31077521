//! The seam between Rosewood and a host GUI toolkit.
//!
//! Tokens, the compiler and [`Theme`](crate::Theme) never touch a toolkit.
//! Only the widget adapters in [`widgets`](crate::widgets) do, and only
//! through the traits here:
//!
//! - [`StyleTarget`]: anything that accepts a style sheet (an application
//!   object or a single widget)
//! - [`HostWidget`]: a native widget with a settable string property and a
//!   way to force style re-evaluation
//! - [`Toolkit`]: creates host widgets for adapter descriptors
//!
//! A toolkit binding registers itself once at startup with
//! [`install_toolkit`]. Until then every adapter constructor fails with
//! [`MissingHostToolkitError`].

use once_cell::sync::OnceCell;

use crate::error::MissingHostToolkitError;
use crate::tokens::Color;
use crate::widgets::VariantDescriptor;

/// Something a style sheet can be applied to.
pub trait StyleTarget {
    fn set_style_sheet(&mut self, style_sheet: &str);
}

/// Shadow drawn behind elevated cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    pub blur_radius: u32,
    pub offset: (i32, i32),
    pub color: Color,
}

/// A native widget as seen by the adapters.
///
/// Only the property and restyle methods are required. The rest are
/// optional capabilities; toolkits that lack them keep the no-op defaults.
pub trait HostWidget: StyleTarget + Send {
    /// Reads a dynamic string property.
    fn property(&self, name: &str) -> Option<String>;

    /// Writes a dynamic string property.
    fn set_property(&mut self, name: &str, value: &str);

    /// Forces the style engine to re-match selectors against this widget.
    ///
    /// Needed after a property write, since style sheets are not
    /// re-evaluated automatically.
    fn restyle(&mut self);

    fn set_placeholder(&mut self, _text: &str) {}

    fn set_minimum_height(&mut self, _height: u32) {}

    fn set_drop_shadow(&mut self, _shadow: Option<DropShadow>) {}

    fn set_pointer_cursor(&mut self, _pointer: bool) {}

    fn set_centered(&mut self, _centered: bool) {}
}

/// A host toolkit binding.
pub trait Toolkit: Send + Sync {
    /// Human-readable toolkit name, used in logs.
    fn name(&self) -> &str;

    /// Creates the native widget for a descriptor.
    ///
    /// The widget's type must match the descriptor kind's
    /// [`type_name`](crate::widgets::WidgetKind::type_name) so the compiled
    /// selectors apply to it.
    fn create(&self, descriptor: &VariantDescriptor) -> Box<dyn HostWidget>;
}

static TOOLKIT: OnceCell<Box<dyn Toolkit>> = OnceCell::new();

/// Registers the process-wide toolkit.
///
/// Returns `false` if a toolkit was already installed; the first one stays.
pub fn install_toolkit<T: Toolkit + 'static>(toolkit: T) -> bool {
    let name = toolkit.name().to_string();
    let installed = TOOLKIT.set(Box::new(toolkit)).is_ok();
    if installed {
        tracing::info!(toolkit = %name, "installed host toolkit");
    } else {
        tracing::warn!(toolkit = %name, "host toolkit already installed; ignoring");
    }
    installed
}

/// Returns true once a toolkit has been installed.
pub fn is_available() -> bool {
    TOOLKIT.get().is_some()
}

/// Returns the installed toolkit.
///
/// # Errors
///
/// Returns [`MissingHostToolkitError`] naming `component` if no toolkit has
/// been installed.
pub fn toolkit(component: &'static str) -> Result<&'static dyn Toolkit, MissingHostToolkitError> {
    TOOLKIT
        .get()
        .map(|toolkit| toolkit.as_ref())
        .ok_or(MissingHostToolkitError { component })
}
