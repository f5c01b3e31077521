//! Style sheet text output.
//!
//! [`StylesheetWriter`] renders a [`StyleDocument`] through MiniJinja
//! templates, either as a commented, readable sheet or as a compact one for
//! shipping.

mod writer;

pub use writer::{OutputStyle, StylesheetWriter};

use crate::compiler::StyleDocument;
use crate::error::Error;

impl StyleDocument {
    /// Writes the document as a readable style sheet.
    pub fn to_stylesheet(&self) -> Result<String, Error> {
        Ok(StylesheetWriter::new()?.write(self, OutputStyle::Pretty)?)
    }

    /// Writes the document without comments or insignificant whitespace.
    pub fn to_compact_stylesheet(&self) -> Result<String, Error> {
        Ok(StylesheetWriter::new()?.write(self, OutputStyle::Compact)?)
    }
}
