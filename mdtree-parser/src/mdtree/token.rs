//! Tokens emitted by the state handlers
//!
//!     A token is an Open, Close or Content event for one element kind. Open tokens carry the
//!     element's style attributes; image and hyperlink Open tokens also carry the payload that
//!     the builder stores on the leaf node.

use crate::mdtree::ast::{Attribute, ElementKind};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub element: ElementKind,
    /// Content text, or the target of an image / hyperlink.
    pub text: String,
    /// Alt text of an image, display text of a hyperlink.
    pub alt: String,
    pub title: String,
    pub attributes: Vec<Attribute>,
}

impl Token {
    fn new(kind: TokenKind, element: ElementKind) -> Self {
        Token {
            kind,
            element,
            text: String::new(),
            alt: String::new(),
            title: String::new(),
            attributes: Vec::new(),
        }
    }

    pub fn open(element: ElementKind) -> Self {
        Self::new(TokenKind::Open, element)
    }

    pub fn close(element: ElementKind) -> Self {
        Self::new(TokenKind::Close, element)
    }

    pub fn content(text: impl Into<String>) -> Self {
        Token {
            text: text.into(),
            ..Self::new(TokenKind::Content, ElementKind::Content)
        }
    }

    pub fn image(src: String, alt: String, title: String) -> Self {
        Token {
            text: src,
            alt,
            title,
            ..Self::open(ElementKind::Image)
        }
        .with_attribute(Attribute::ImageClass)
    }

    pub fn hyperlink(href: String, text: String, title: String) -> Self {
        Token {
            text: href,
            alt: text,
            title,
            ..Self::open(ElementKind::Hyperlink)
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn is_open(&self) -> bool {
        self.kind == TokenKind::Open
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Open => write!(f, "Open({})", self.element),
            TokenKind::Close => write!(f, "Close({})", self.element),
            TokenKind::Content => write!(f, "Content({:?})", self.text),
        }
    }
}
