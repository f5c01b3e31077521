//! MiniJinja-backed style sheet writer.

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::compiler::{Category, StyleDocument, StyleRule};

const PRETTY: &str = r#"/* ==========================================================================
   Rosewood UI - Qt Stylesheet
   Generated from the {{ palette }} palette
   ========================================================================== */
{% for section in sections %}
/* ── {{ section.title }} ── */
{% for rule in section.rules %}
{{ rule.selector }} {
{%- for decl in rule.declarations %}
    {{ decl.property }}: {{ decl.value }};
{%- endfor %}
}
{% endfor %}{% endfor %}
"#;

const COMPACT: &str = r#"{% for rule in rules %}{{ rule.selector | compact }}{{ "{" }}{% for decl in rule.declarations %}{{ decl.property }}:{{ decl.value | compact }}{% if not loop.last %};{% endif %}{% endfor %}{{ "}" }}{% endfor %}"#;

/// Layout of the written style sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// Banner, section comments, one declaration per line.
    #[default]
    Pretty,
    /// No comments and no insignificant whitespace.
    Compact,
}

impl OutputStyle {
    fn template_name(self) -> &'static str {
        match self {
            OutputStyle::Pretty => "pretty",
            OutputStyle::Compact => "compact",
        }
    }
}

#[derive(Serialize)]
struct Section<'a> {
    title: &'static str,
    rules: Vec<&'a StyleRule>,
}

fn sections(doc: &StyleDocument) -> Vec<Section<'_>> {
    let mut sections: Vec<Section<'_>> = Vec::new();
    let mut current: Option<Category> = None;
    for rule in doc.rules() {
        if current != Some(rule.category) {
            current = Some(rule.category);
            sections.push(Section {
                title: rule.category.title(),
                rules: Vec::new(),
            });
        }
        if let Some(section) = sections.last_mut() {
            section.rules.push(rule);
        }
    }
    sections
}

/// Collapses whitespace and drops it around commas.
fn compact(value: String) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace(", ", ",").replace(" ,", ",")
}

/// Writes [`StyleDocument`]s as Qt style sheet text.
///
/// Templates are compiled once when the writer is created and reused for
/// every document.
///
/// # Example
///
/// ```rust
/// use rosewood::{compile, get_palette, spacing, radius, typography, OutputStyle, StylesheetWriter};
///
/// let doc = compile(get_palette("light").unwrap(), spacing(), radius(), typography()).unwrap();
/// let writer = StylesheetWriter::new().unwrap();
/// let qss = writer.write(&doc, OutputStyle::Compact).unwrap();
/// assert!(qss.starts_with("QWidget{"));
/// ```
pub struct StylesheetWriter {
    env: Environment<'static>,
}

impl StylesheetWriter {
    /// Creates a writer with the built-in templates registered.
    pub fn new() -> Result<Self, Error> {
        let mut env = Environment::new();
        env.add_filter("compact", compact);
        env.add_template("pretty", PRETTY)?;
        env.add_template("compact", COMPACT)?;
        Ok(Self { env })
    }

    /// Renders a document in the requested layout.
    pub fn write(&self, doc: &StyleDocument, style: OutputStyle) -> Result<String, Error> {
        let tmpl = self.env.get_template(style.template_name())?;
        tmpl.render(minijinja::context! {
            palette => doc.palette(),
            sections => sections(doc),
            rules => doc.rules(),
        })
    }
}
