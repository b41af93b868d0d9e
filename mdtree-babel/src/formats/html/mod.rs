//! HTML format
//!
//! | Element        | HTML                                   |
//! |----------------|----------------------------------------|
//! | Heading(n)     | `<hn>`                                 |
//! | Paragraph      | `<p>`                                  |
//! | Span           | `<span>`, attributes decide the style  |
//! | CodeBlock      | `<code>`, inside `<pre>` for blocks    |
//! | HorizontalRule | `<hr>`                                 |
//! | Lists          | `<ul>` / `<ol>` with `<li>`            |
//! | Table          | `<table>`, `<tr>`, `<th>`, `<td>`      |
//! | Hyperlink      | `<a href title>`                       |
//! | Image          | `<img src alt title>`                  |
//!
//! Attributes become the element's `class` list, and each class used gets a rule in the
//! companion [Stylesheet].

mod serializer;
mod stylesheet;

pub use serializer::{render_page, RenderedPage};
pub use stylesheet::Stylesheet;

use crate::error::FormatError;
use crate::format::Format;
use mdtree_parser::Document;

pub const DEFAULT_STYLESHEET: &str = "styles.css";

/// HTML pages linking an external stylesheet
pub struct HtmlFormat {
    stylesheet_href: String,
}

impl HtmlFormat {
    pub fn new(stylesheet_href: impl Into<String>) -> Self {
        HtmlFormat {
            stylesheet_href: stylesheet_href.into(),
        }
    }
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new(DEFAULT_STYLESHEET)
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML5 page with a linked stylesheet"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_page(doc, &self.stylesheet_href)?.html)
    }
}
