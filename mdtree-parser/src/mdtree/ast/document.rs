//! The finished parse result

use super::element::ElementKind;
use super::node::{Node, NodeId};
use super::tree::Tree;
use crate::mdtree::diagnostics::{Diagnostic, Severity};

/// A fully built document tree with exactly one root and no open elements,
/// plus the diagnostics raised while it was parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    tree: Tree,
    diagnostics: Vec<Diagnostic>,
}

impl Document {
    pub(crate) fn new(tree: Tree, diagnostics: Vec<Diagnostic>) -> Self {
        Document { tree, diagnostics }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.tree.node(id)
    }

    pub fn kind(&self, id: NodeId) -> ElementKind {
        self.tree.kind(id)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.tree.children(id)
    }

    /// Top-level blocks.
    pub fn blocks(&self) -> &[NodeId] {
        self.tree.children(self.tree.root())
    }

    pub fn text(&self, id: NodeId) -> String {
        self.tree.text(id)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == Severity::Warning)
    }
}
