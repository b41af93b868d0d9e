//! Treeviz format, for inspecting parse results on a terminal

use crate::error::FormatError;
use crate::format::Format;
use mdtree_parser::mdtree::formats::to_treeviz_str;
use mdtree_parser::Document;

pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with box connectors"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }
}
