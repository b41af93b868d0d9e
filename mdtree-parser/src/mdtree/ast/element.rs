//! Element kinds, heading levels and style attributes

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Heading depth, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Level for a run of `count` marker characters, if it names a heading.
    pub fn from_marker_count(count: usize) -> Option<HeadingLevel> {
        match count {
            1..=6 => Some(Self::ALL[count - 1]),
            _ => None,
        }
    }

    pub fn number(self) -> usize {
        self as usize + 1
    }
}

/// Structural category of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Document,
    Content,
    Heading(HeadingLevel),
    Paragraph,
    CodeBlock,
    HorizontalRule,
    Hyperlink,
    Image,
    Span,
    OrderedList,
    UnorderedList,
    ListItem,
    Table,
    TableHead,
    TableRow,
    TableCell,
}

static ELEMENT_NAMES: Lazy<HashMap<ElementKind, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    names.insert(ElementKind::Document, "!DOCTYPE html");
    names.insert(ElementKind::Content, "content");
    names.insert(ElementKind::Heading(HeadingLevel::H1), "h1");
    names.insert(ElementKind::Heading(HeadingLevel::H2), "h2");
    names.insert(ElementKind::Heading(HeadingLevel::H3), "h3");
    names.insert(ElementKind::Heading(HeadingLevel::H4), "h4");
    names.insert(ElementKind::Heading(HeadingLevel::H5), "h5");
    names.insert(ElementKind::Heading(HeadingLevel::H6), "h6");
    names.insert(ElementKind::Paragraph, "p");
    names.insert(ElementKind::CodeBlock, "code");
    names.insert(ElementKind::HorizontalRule, "hr");
    names.insert(ElementKind::Hyperlink, "a");
    names.insert(ElementKind::Image, "img");
    names.insert(ElementKind::Span, "span");
    names.insert(ElementKind::OrderedList, "ol");
    names.insert(ElementKind::UnorderedList, "ul");
    names.insert(ElementKind::ListItem, "li");
    names.insert(ElementKind::Table, "table");
    names.insert(ElementKind::TableHead, "th");
    names.insert(ElementKind::TableRow, "tr");
    names.insert(ElementKind::TableCell, "td");
    names
});

impl ElementKind {
    /// Rendered element name (`p`, `h2`, `td`, ...).
    pub fn html_name(self) -> &'static str {
        ELEMENT_NAMES.get(&self).copied().unwrap_or("span")
    }

    /// Elements that live inside a line of text rather than forming a block.
    pub fn is_inline(self) -> bool {
        matches!(
            self,
            ElementKind::Span | ElementKind::Hyperlink | ElementKind::Image | ElementKind::CodeBlock
        )
    }

    pub fn is_list(self) -> bool {
        matches!(self, ElementKind::OrderedList | ElementKind::UnorderedList)
    }

    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            ElementKind::Content | ElementKind::Hyperlink | ElementKind::Image
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Heading(level) => write!(f, "Heading({})", level.number()),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Style flag attached to a node. Rendered as a class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Italic,
    FontSize(HeadingLevel),
    Inline,
    Block,
    BlockQuote,
    TableStyle,
    TableHeader,
    TableRow,
    TableCell,
    ImageClass,
}

static ATTRIBUTE_NAMES: Lazy<HashMap<Attribute, &'static str>> = Lazy::new(|| {
    let mut names = HashMap::new();
    names.insert(Attribute::Bold, "Bold");
    names.insert(Attribute::Italic, "Italic");
    names.insert(Attribute::FontSize(HeadingLevel::H1), "FontSize1");
    names.insert(Attribute::FontSize(HeadingLevel::H2), "FontSize2");
    names.insert(Attribute::FontSize(HeadingLevel::H3), "FontSize3");
    names.insert(Attribute::FontSize(HeadingLevel::H4), "FontSize4");
    names.insert(Attribute::FontSize(HeadingLevel::H5), "FontSize5");
    names.insert(Attribute::FontSize(HeadingLevel::H6), "FontSize6");
    names.insert(Attribute::Inline, "Inline");
    names.insert(Attribute::Block, "Block");
    names.insert(Attribute::BlockQuote, "BlockQuote");
    names.insert(Attribute::TableStyle, "TableStyle");
    names.insert(Attribute::TableHeader, "TableHeader");
    names.insert(Attribute::TableRow, "TableRow");
    names.insert(Attribute::TableCell, "TableCell");
    names.insert(Attribute::ImageClass, "ImageAttr");
    names
});

impl Attribute {
    pub fn class_name(self) -> &'static str {
        ATTRIBUTE_NAMES.get(&self).copied().unwrap_or("")
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None)]
    #[case(1, Some(HeadingLevel::H1))]
    #[case(6, Some(HeadingLevel::H6))]
    #[case(7, None)]
    fn heading_level_from_marker_count(#[case] count: usize, #[case] expected: Option<HeadingLevel>) {
        assert_eq!(HeadingLevel::from_marker_count(count), expected);
    }

    #[test]
    fn every_heading_level_has_a_name_and_size_class() {
        for level in HeadingLevel::ALL {
            let name = ElementKind::Heading(level).html_name();
            assert_eq!(name, format!("h{}", level.number()));
            let class = Attribute::FontSize(level).class_name();
            assert_eq!(class, format!("FontSize{}", level.number()));
        }
    }

    #[test]
    fn table_parts_use_table_tags() {
        assert_eq!(ElementKind::Table.html_name(), "table");
        assert_eq!(ElementKind::TableHead.html_name(), "th");
        assert_eq!(ElementKind::TableRow.html_name(), "tr");
        assert_eq!(ElementKind::TableCell.html_name(), "td");
    }

    #[test]
    fn image_attribute_keeps_its_class_name() {
        assert_eq!(Attribute::ImageClass.to_string(), "ImageAttr");
    }
}
