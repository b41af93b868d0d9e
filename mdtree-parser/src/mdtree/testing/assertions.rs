//! Fluent assertions over a parsed document

use super::matchers::TextMatch;
use crate::mdtree::ast::{Attribute, Document, ElementKind, NodeId};

/// Create an assertion builder for a document
pub fn assert_tree(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize(doc: &Document, ids: &[NodeId]) -> String {
    ids.iter()
        .map(|&id| doc.kind(id).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of top-level blocks
    pub fn block_count(self, expected: usize) -> Self {
        let blocks = self.doc.blocks();
        assert_eq!(
            blocks.len(),
            expected,
            "Expected {} blocks, found {}: [{}]",
            expected,
            blocks.len(),
            summarize(self.doc, blocks)
        );
        self
    }

    /// Assert on a top-level block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let blocks = self.doc.blocks();
        assert!(
            index < blocks.len(),
            "Block index {} out of bounds (document has {} blocks)",
            index,
            blocks.len()
        );
        assertion(NodeAssertion {
            doc: self.doc,
            id: blocks[index],
            context: format!("blocks[{}]", index),
        });
        self
    }

    pub fn no_warnings(self) -> Self {
        let warnings: Vec<String> = self.doc.warnings().map(|w| w.to_string()).collect();
        assert!(warnings.is_empty(), "Expected no warnings, found: {:?}", warnings);
        self
    }

    pub fn warning_count(self, expected: usize) -> Self {
        let actual = self.doc.warnings().count();
        assert_eq!(actual, expected, "Expected {} warnings, found {}", expected, actual);
        self
    }

    /// Assert some warning on `line` mentions `fragment`
    pub fn warning_on_line(self, line: usize, fragment: &str) -> Self {
        let found = self
            .doc
            .warnings()
            .any(|w| w.line == Some(line) && w.message.contains(fragment));
        assert!(
            found,
            "Expected a warning on line {} containing '{}', found: {:?}",
            line,
            fragment,
            self.doc.warnings().map(|w| w.to_string()).collect::<Vec<_>>()
        );
        self
    }
}

pub struct NodeAssertion<'a> {
    doc: &'a Document,
    id: NodeId,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn kind(self, expected: ElementKind) -> Self {
        let actual = self.doc.kind(self.id);
        assert_eq!(
            actual, expected,
            "{}: Expected {}, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the concatenated text of this subtree
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.doc.text(self.id), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.doc.text(self.id), &self.context);
        self
    }

    pub fn has_attribute(self, attribute: Attribute) -> Self {
        let node = self.doc.node(self.id);
        assert!(
            node.has_attribute(attribute),
            "{}: Expected attribute {}, found [{}]",
            self.context,
            attribute,
            node.attributes
                .iter()
                .map(|a| a.class_name())
                .collect::<Vec<_>>()
                .join(" ")
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        let children = self.doc.children(self.id);
        assert_eq!(
            children.len(),
            expected,
            "{}: Expected {} children, found {}: [{}]",
            self.context,
            expected,
            children.len(),
            summarize(self.doc, children)
        );
        self
    }

    /// Assert the kinds of the direct children, in order
    pub fn child_kinds(self, expected: &[ElementKind]) -> Self {
        let actual: Vec<ElementKind> = self
            .doc
            .children(self.id)
            .iter()
            .map(|&id| self.doc.kind(id))
            .collect();
        assert_eq!(actual, expected, "{}: child kinds differ", self.context);
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        let children = self.doc.children(self.id);
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(NodeAssertion {
            doc: self.doc,
            id: children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    pub fn image(self, src: &str, alt: &str) -> Self {
        let image = self
            .doc
            .node(self.id)
            .image()
            .unwrap_or_else(|| panic!("{}: Expected an image payload", self.context));
        assert_eq!(image.src, src, "{}: image src", self.context);
        assert_eq!(image.alt, alt, "{}: image alt", self.context);
        self
    }

    pub fn link(self, href: &str, text: &str) -> Self {
        let link = self
            .doc
            .node(self.id)
            .link()
            .unwrap_or_else(|| panic!("{}: Expected a hyperlink payload", self.context));
        assert_eq!(link.href, href, "{}: link href", self.context);
        assert_eq!(link.text, text, "{}: link text", self.context);
        self
    }

    pub fn title(self, expected: &str) -> Self {
        let node = self.doc.node(self.id);
        let actual = node
            .image()
            .map(|i| i.title.as_str())
            .or_else(|| node.link().map(|l| l.title.as_str()))
            .unwrap_or_else(|| panic!("{}: Expected an image or hyperlink", self.context));
        assert_eq!(actual, expected, "{}: title", self.context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdtree::parsing::parse_document;

    #[test]
    fn assertions_are_fluent() {
        let doc = parse_document("# Title\n\nbody").unwrap();
        assert_tree(&doc)
            .no_warnings()
            .block_count(2)
            .block(0, |heading| {
                heading
                    .has_attribute(Attribute::Bold)
                    .child_count(1)
                    .text("Title");
            })
            .block(1, |p| {
                p.kind(ElementKind::Paragraph).text("body");
            });
    }

    #[test]
    #[should_panic(expected = "blocks[0]: Expected Table, found Paragraph")]
    fn failing_assertion_names_the_node() {
        let doc = parse_document("text").unwrap();
        assert_tree(&doc).block(0, |block| {
            block.kind(ElementKind::Table);
        });
    }
}
