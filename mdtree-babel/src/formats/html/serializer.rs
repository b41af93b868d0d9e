//! HTML serialization
//!
//! Pipeline: document tree → RcDom → HTML string. The DOM mirrors the tree one node for one
//! element; html5ever takes care of escaping and void elements.

use super::stylesheet::Stylesheet;
use crate::error::FormatError;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use mdtree_parser::mdtree::ast::{Attribute as Style, ElementKind, NodeId, NodePayload};
use mdtree_parser::Document;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A rendered page and the stylesheet it links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub css: String,
}

/// Render a document into a full HTML page linking `stylesheet_href`, plus that stylesheet.
pub fn render_page(doc: &Document, stylesheet_href: &str) -> Result<RenderedPage, FormatError> {
    let mut stylesheet = Stylesheet::new();

    let html = create_element("html", vec![]);
    let head = create_element("head", vec![]);
    append(&head, create_element("meta", vec![("charset", "utf-8")]));
    append(
        &head,
        create_element(
            "meta",
            vec![
                ("name", "viewport"),
                ("content", "width=device-width, initial-scale=1.0"),
            ],
        ),
    );
    append(
        &head,
        create_element("meta", vec![("name", "generator"), ("content", "mdtree")]),
    );
    append(
        &head,
        create_element("link", vec![("rel", "stylesheet"), ("href", stylesheet_href)]),
    );
    append(&html, head);

    let body = create_element("body", vec![]);
    for &block in doc.blocks() {
        append(&body, create_text("\n"));
        append_node(doc, block, &body, &mut stylesheet);
    }
    append(&body, create_text("\n"));
    append(&html, body);

    let page = serialize_node(&html)?;
    tracing::debug!(
        classes = stylesheet.classes().len(),
        "rendered page of {} blocks",
        doc.blocks().len()
    );
    Ok(RenderedPage {
        html: format!("<!DOCTYPE html>\n{page}\n"),
        css: stylesheet.render(),
    })
}

/// Append the DOM for `id` and its subtree to `parent`.
fn append_node(doc: &Document, id: NodeId, parent: &Handle, stylesheet: &mut Stylesheet) {
    let node = doc.node(id);
    for &attribute in &node.attributes {
        stylesheet.add(attribute);
    }
    let class = node
        .attributes
        .iter()
        .map(|a| a.class_name())
        .collect::<Vec<_>>()
        .join(" ");

    match &node.payload {
        NodePayload::Content(text) => append(parent, create_text(text)),
        NodePayload::Image(image) => append(
            parent,
            create_element(
                "img",
                vec![
                    ("src", image.src.as_str()),
                    ("alt", image.alt.as_str()),
                    ("title", image.title.as_str()),
                    ("class", class.as_str()),
                ],
            ),
        ),
        NodePayload::Hyperlink(link) => {
            let anchor = create_element(
                "a",
                vec![("href", link.href.as_str()), ("title", link.title.as_str())],
            );
            append(&anchor, create_text(&link.text));
            append(parent, anchor);
        }
        NodePayload::Structural => {
            let mut attrs = Vec::new();
            if !class.is_empty() {
                attrs.push(("class", class.as_str()));
            }
            let element = create_element(node.kind.html_name(), attrs);
            for &child in doc.children(id) {
                append_node(doc, child, &element, stylesheet);
            }
            if is_block_code(doc, id) {
                let pre = create_element("pre", vec![]);
                append(&pre, element);
                append(parent, pre);
            } else {
                append(parent, element);
            }
        }
    }
}

fn is_block_code(doc: &Document, id: NodeId) -> bool {
    let node = doc.node(id);
    node.kind == ElementKind::CodeBlock && node.has_attribute(Style::Block)
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

fn serialize_node(node: &Handle) -> Result<String, FormatError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };
    let serializable = SerializableHandle::from(node.clone());
    serialize(&mut output, &serializable, opts).map_err(|e| {
        FormatError::SerializationError(format!("HTML serialization failed: {}", e))
    })?;

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {}", e)))
}
