//! Tree snapshot - a normalized, serializable view of a document tree
//!
//! Serializers (tree visualisation, JSON, and anything in the formats crate) consume the
//! output of [snapshot_from_document] rather than walking the arena themselves.

use super::document::Document;
use super::node::{NodeId, NodePayload};
use super::tree::Tree;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// The element kind (e.g. "Paragraph", "Heading(2)", "TableCell")
    #[serde(rename = "kind")]
    pub node_type: String,

    /// Text of a leaf, empty for structural nodes
    pub label: String,

    /// Classes and payload fields
    pub attributes: BTreeMap<String, String>,

    pub children: Vec<TreeSnapshot>,
}

impl TreeSnapshot {
    pub fn new(node_type: String, label: String) -> Self {
        Self {
            node_type,
            label,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<TreeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }
}

pub fn snapshot_from_document(doc: &Document) -> TreeSnapshot {
    snapshot_node(doc.tree(), doc.root())
}

pub fn snapshot_node(tree: &Tree, id: NodeId) -> TreeSnapshot {
    let node = tree.node(id);
    let label = match &node.payload {
        NodePayload::Structural => String::new(),
        NodePayload::Content(text) => text.clone(),
        NodePayload::Image(image) => image.alt.clone(),
        NodePayload::Hyperlink(link) => link.text.clone(),
    };

    let mut snapshot = TreeSnapshot::new(node.kind.to_string(), label);
    if !node.attributes.is_empty() {
        let classes: Vec<&str> = node.attributes.iter().map(|a| a.class_name()).collect();
        snapshot = snapshot.with_attribute("classes", classes.join(" "));
    }
    match &node.payload {
        NodePayload::Image(image) => {
            snapshot = snapshot.with_attribute("src", image.src.as_str());
            if !image.title.is_empty() {
                snapshot = snapshot.with_attribute("title", image.title.as_str());
            }
        }
        NodePayload::Hyperlink(link) => {
            snapshot = snapshot.with_attribute("href", link.href.as_str());
            if !link.title.is_empty() {
                snapshot = snapshot.with_attribute("title", link.title.as_str());
            }
        }
        _ => {}
    }

    let children = tree
        .children(id)
        .iter()
        .map(|&child| snapshot_node(tree, child))
        .collect();
    snapshot.with_children(children)
}
