//! Main tree builder
//!
//!     The builder keeps one cursor into the document tree. Open creates a child under the
//!     cursor and moves onto it, Close moves back to the parent, Content appends a leaf.
//!     A Close must name the element under the cursor; anything else is an engine defect.

use super::payload_for;
use crate::mdtree::ast::{ElementKind, NodeId, NodePayload, Tree};
use crate::mdtree::error::{ParseError, ParseResult};
use crate::mdtree::token::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct TreeBuilder {
    tree: Tree,
    cursor: NodeId,
}

impl TreeBuilder {
    pub fn new() -> Self {
        let tree = Tree::new(ElementKind::Document);
        let cursor = tree.root();
        TreeBuilder { tree, cursor }
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn current_element(&self) -> ElementKind {
        self.tree.kind(self.cursor)
    }

    pub fn parent_element(&self) -> Option<ElementKind> {
        self.tree.parent(self.cursor).map(|id| self.tree.kind(id))
    }

    pub fn consume(&mut self, token: Token) -> ParseResult<()> {
        match token.kind {
            TokenKind::Open => {
                self.open(token);
                Ok(())
            }
            TokenKind::Close => self.close(token.element),
            TokenKind::Content => {
                self.tree.append(
                    self.cursor,
                    ElementKind::Content,
                    Vec::new(),
                    NodePayload::Content(token.text),
                );
                Ok(())
            }
        }
    }

    fn open(&mut self, token: Token) {
        let payload = payload_for(&token);
        self.cursor = self
            .tree
            .append(self.cursor, token.element, token.attributes, payload);
    }

    fn close(&mut self, element: ElementKind) -> ParseResult<()> {
        let current = self.current_element();
        if current != element {
            return Err(ParseError::ElementMismatch {
                expected: current,
                found: element,
            });
        }
        match self.tree.parent(self.cursor) {
            Some(parent) => self.cursor = parent,
            None => tracing::warn!("attempted to close the document root, cursor stays at the root"),
        }
        Ok(())
    }

    /// Graft a finished subtree under the cursor. The cursor does not move.
    pub fn append_subtree(&mut self, source: &Tree) -> NodeId {
        self.tree.graft(self.cursor, source, source.root())
    }

    /// Close whatever is still open and hand over the tree.
    pub fn finish(mut self) -> Tree {
        while let Some(parent) = self.tree.parent(self.cursor) {
            tracing::debug!(
                element = %self.current_element(),
                "closing element left open at end of input"
            );
            self.cursor = parent;
        }
        self.tree
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdtree::ast::{Attribute, HeadingLevel};

    #[test]
    fn open_content_close_builds_nested_nodes() {
        let mut builder = TreeBuilder::new();
        let heading = ElementKind::Heading(HeadingLevel::H2);
        builder
            .consume(Token::open(heading).with_attribute(Attribute::Bold))
            .unwrap();
        builder.consume(Token::content("Title")).unwrap();
        assert_eq!(builder.current_element(), heading);
        assert_eq!(builder.parent_element(), Some(ElementKind::Document));
        builder.consume(Token::close(heading)).unwrap();
        assert_eq!(builder.current_element(), ElementKind::Document);

        let tree = builder.finish();
        let h = tree.children(tree.root())[0];
        assert!(tree.node(h).has_attribute(Attribute::Bold));
        assert_eq!(tree.text(h), "Title");
    }

    #[test]
    fn mismatched_close_is_fatal() {
        let mut builder = TreeBuilder::new();
        builder.consume(Token::open(ElementKind::Paragraph)).unwrap();
        let err = builder
            .consume(Token::close(ElementKind::Span))
            .unwrap_err();
        assert!(matches!(
            err,
            ParseError::ElementMismatch {
                expected: ElementKind::Paragraph,
                found: ElementKind::Span
            }
        ));
    }

    #[test]
    fn closing_the_root_keeps_cursor_at_root() {
        let mut builder = TreeBuilder::new();
        builder.consume(Token::close(ElementKind::Document)).unwrap();
        assert_eq!(builder.current_element(), ElementKind::Document);
    }

    #[test]
    fn hyperlink_payload_is_set_at_creation() {
        let mut builder = TreeBuilder::new();
        builder
            .consume(Token::hyperlink("https://a.b".into(), "ab".into(), "t".into()))
            .unwrap();
        builder.consume(Token::close(ElementKind::Hyperlink)).unwrap();
        let tree = builder.finish();
        let link = tree.node(tree.children(tree.root())[0]).link().cloned().unwrap();
        assert_eq!(link.href, "https://a.b");
        assert_eq!(link.text, "ab");
        assert_eq!(link.title, "t");
    }

    #[test]
    fn subtree_graft_leaves_cursor_in_place() {
        let mut builder = TreeBuilder::new();
        builder.consume(Token::open(ElementKind::ListItem)).unwrap();
        let mut table = Tree::new(ElementKind::Table);
        let root = table.root();
        table.append(root, ElementKind::TableRow, vec![], NodePayload::Structural);

        builder.append_subtree(&table);
        assert_eq!(builder.current_element(), ElementKind::ListItem);
        let tree = builder.finish();
        let item = tree.children(tree.root())[0];
        assert_eq!(tree.kind(tree.children(item)[0]), ElementKind::Table);
    }

    #[test]
    fn finish_closes_open_elements() {
        let mut builder = TreeBuilder::new();
        builder.consume(Token::open(ElementKind::UnorderedList)).unwrap();
        builder.consume(Token::open(ElementKind::ListItem)).unwrap();
        let tree = builder.finish();
        assert_eq!(tree.len(), 3);
    }
}
