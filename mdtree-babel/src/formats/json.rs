//! JSON format: the serde snapshot of the tree, pretty-printed

use crate::error::FormatError;
use crate::format::Format;
use mdtree_parser::mdtree::formats::to_json_string;
use mdtree_parser::Document;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Tree snapshot as JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_json_string(doc)?)
    }
}
