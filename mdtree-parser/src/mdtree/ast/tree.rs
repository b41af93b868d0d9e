//! Arena-backed document tree

use super::element::{Attribute, ElementKind};
use super::node::{Node, NodeId, NodePayload};

/// A tree whose nodes are stored in one vector and addressed by [NodeId].
///
/// Detached nodes stay in the arena but are no longer reachable from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    pub fn new(root_kind: ElementKind) -> Self {
        Self::with_root(root_kind, Vec::new())
    }

    pub fn with_root(root_kind: ElementKind, attributes: Vec<Attribute>) -> Self {
        Tree {
            nodes: vec![Node::new(root_kind, attributes, None, NodePayload::Structural)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn kind(&self, id: NodeId) -> ElementKind {
        self.nodes[id.0].kind
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.last().copied()
    }

    /// Append a new node as the last child of `parent`.
    pub fn append(
        &mut self,
        parent: NodeId,
        kind: ElementKind,
        attributes: Vec<Attribute>,
        payload: NodePayload,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(kind, attributes, Some(parent), payload));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn add_attribute(&mut self, id: NodeId, attribute: Attribute) {
        self.nodes[id.0].attributes.push(attribute);
    }

    /// Unlink the last child of `parent` and return it.
    pub fn detach_last_child(&mut self, parent: NodeId) -> Option<NodeId> {
        let child = self.nodes[parent.0].children.pop()?;
        self.nodes[child.0].parent = None;
        Some(child)
    }

    /// Deep-copy the subtree at `source_id` of `source` under `parent`.
    pub fn graft(&mut self, parent: NodeId, source: &Tree, source_id: NodeId) -> NodeId {
        let node = source.node(source_id);
        let id = self.append(parent, node.kind, node.attributes.clone(), node.payload.clone());
        for &child in source.children(source_id) {
            self.graft(id, source, child);
        }
        id
    }

    /// Nodes of the subtree at `id` in document order, `id` first.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        order
    }

    /// Concatenated text of every leaf under `id`.
    ///
    /// Hyperlinks contribute their display text, images their alt text.
    pub fn text(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|node| match &self.node(node).payload {
                NodePayload::Content(text) => Some(text.as_str()),
                NodePayload::Hyperlink(link) => Some(link.text.as_str()),
                NodePayload::Image(image) => Some(image.alt.as_str()),
                NodePayload::Structural => None,
            })
            .collect()
    }

    /// Nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.descendants(self.root).len()
    }

    pub fn is_empty(&self) -> bool {
        self.children(self.root).is_empty()
    }
}
