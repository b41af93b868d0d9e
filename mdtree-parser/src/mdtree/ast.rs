//! Document tree definitions
//!
//! Element kinds and attributes
//!
//!     Every node carries an [ElementKind](element::ElementKind) and a small set of style
//!     [Attribute](element::Attribute)s. Heading levels are typed, so a heading can never be
//!     level 0 or 7. Rendered names for kinds and attributes come from process-wide read-only
//!     tables that are built once and never mutated.
//!
//! The arena
//!
//!     Nodes live in a flat arena ([Tree](tree::Tree)) and refer to each other by [NodeId].
//!     The parent link is a plain index used to move a builder's cursor upward; ownership and
//!     document order are expressed only through each node's `children` vector.
//!
//!     Content, image and hyperlink nodes are leaves. Their payload is fixed at creation.
//!
//! Documents
//!
//!     A [Document](document::Document) is the finished, immutable result of a parse: the tree
//!     plus the diagnostics raised while building it. It is what renderers consume.

pub mod document;
pub mod element;
pub mod node;
pub mod snapshot;
pub mod tree;

pub use document::Document;
pub use element::{Attribute, ElementKind, HeadingLevel};
pub use node::{ImageData, LinkData, Node, NodeId, NodePayload};
pub use snapshot::{snapshot_from_document, TreeSnapshot};
pub use tree::Tree;
