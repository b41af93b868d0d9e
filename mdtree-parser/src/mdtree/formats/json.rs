//! JSON rendering of the tree snapshot

use crate::mdtree::ast::{snapshot_from_document, Document};

/// Pretty-printed JSON of the document's [TreeSnapshot](crate::mdtree::ast::TreeSnapshot).
pub fn to_json_string(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&snapshot_from_document(doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdtree::ast::TreeSnapshot;
    use crate::mdtree::parsing::parse_document;

    #[test]
    fn json_carries_kinds_classes_and_link_targets() {
        let doc = parse_document("## Hi\n\n[site](http://x.org)").unwrap();
        let json = to_json_string(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["kind"], "Document");
        let heading = &value["children"][0];
        assert_eq!(heading["kind"], "Heading(2)");
        assert_eq!(heading["attributes"]["classes"], "Bold FontSize2");
        let link = &value["children"][1]["children"][0];
        assert_eq!(link["kind"], "Hyperlink");
        assert_eq!(link["label"], "site");
        assert_eq!(link["attributes"]["href"], "http://x.org");
    }

    #[test]
    fn snapshot_survives_a_json_trip() {
        let doc = parse_document("- a\n- b\n").unwrap();
        let json = to_json_string(&doc).unwrap();
        let back: TreeSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot_from_document(&doc));
    }
}
