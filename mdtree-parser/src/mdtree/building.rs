//! Tree building from tokens
//!
//! Two builders consume the token stream:
//!
//! 1. [TreeBuilder] - owns the document tree and its single cursor.
//! 2. [TableBuilder] - owns a throwaway tree while a table is being tried, and resolves
//!    it into a committed table and/or a flattened paragraph.
//!
//! Both create nodes from Open tokens the same way, through [payload_for].

pub mod table;
pub mod tree_builder;

pub use table::{TableBuilder, TableOutcome};
pub use tree_builder::TreeBuilder;

use crate::mdtree::ast::{ElementKind, ImageData, LinkData, NodePayload};
use crate::mdtree::token::Token;

/// Leaf payload stored on the node an Open token creates.
pub(crate) fn payload_for(token: &Token) -> NodePayload {
    match token.element {
        ElementKind::Image => NodePayload::Image(ImageData {
            src: token.text.clone(),
            alt: token.alt.clone(),
            title: token.title.clone(),
        }),
        ElementKind::Hyperlink => NodePayload::Hyperlink(LinkData {
            href: token.text.clone(),
            text: token.alt.clone(),
            title: token.title.clone(),
        }),
        _ => NodePayload::Structural,
    }
}
