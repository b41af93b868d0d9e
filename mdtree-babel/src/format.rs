//! Format trait definition
//!
//! Every output format implements [Format]. The registry stores formats as trait objects, so
//! implementors must be `Send + Sync`.

use crate::error::FormatError;
use mdtree_parser::Document;

/// An output format for parsed documents
///
/// ```ignore
/// struct Upper;
///
/// impl Format for Upper {
///     fn name(&self) -> &str {
///         "upper"
///     }
///
///     fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
///         Ok(doc.text(doc.root()).to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name used to select this format (e.g. "html", "treeviz")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Extension for files written in this format, without the dot
    fn file_extension(&self) -> &str {
        "txt"
    }

    /// Render a document into text
    ///
    /// Default implementation returns NotSupported.
    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
