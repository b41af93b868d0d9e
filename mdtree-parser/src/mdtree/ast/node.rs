//! Tree nodes
//!
//!     A node is one record with shared structural fields and a payload enum. Consumers
//!     switch on [NodePayload] instead of relying on a node class hierarchy.

use super::element::{Attribute, ElementKind};

/// Index of a node inside its [Tree](super::tree::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageData {
    pub src: String,
    pub alt: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkData {
    pub href: String,
    pub text: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodePayload {
    Structural,
    Content(String),
    Image(ImageData),
    Hyperlink(LinkData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: ElementKind,
    pub attributes: Vec<Attribute>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub payload: NodePayload,
}

impl Node {
    pub(crate) fn new(
        kind: ElementKind,
        attributes: Vec<Attribute>,
        parent: Option<NodeId>,
        payload: NodePayload,
    ) -> Self {
        Node {
            kind,
            attributes,
            parent,
            children: Vec::new(),
            payload,
        }
    }

    pub fn has_attribute(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    /// Text of a content leaf.
    pub fn content(&self) -> Option<&str> {
        match &self.payload {
            NodePayload::Content(text) => Some(text),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&ImageData> {
        match &self.payload {
            NodePayload::Image(data) => Some(data),
            _ => None,
        }
    }

    pub fn link(&self) -> Option<&LinkData> {
        match &self.payload {
            NodePayload::Hyperlink(data) => Some(data),
            _ => None,
        }
    }
}
