//! Stylesheet for a rendered page
//!
//!     Every attribute is rendered as a class. The stylesheet holds one rule per class the
//!     document actually uses, in order of first use, after a fixed rule for the body.

use mdtree_parser::mdtree::ast::{Attribute, HeadingLevel};
use std::fmt::Write;

const BODY_RULE: &[&str] = &["margin: 2rem auto", "width: 80%"];

fn declarations(attribute: Attribute) -> &'static [&'static str] {
    match attribute {
        Attribute::Bold => &["font-weight: bold"],
        Attribute::Italic => &["font-style: italic"],
        Attribute::FontSize(level) => match level {
            HeadingLevel::H1 => &["font-size: 32px"],
            HeadingLevel::H2 => &["font-size: 24px"],
            HeadingLevel::H3 => &["font-size: 20.8px"],
            HeadingLevel::H4 => &["font-size: 16px"],
            HeadingLevel::H5 => &["font-size: 12.8px"],
            HeadingLevel::H6 => &["font-size: 11.2px"],
        },
        Attribute::Inline => &["display: inline"],
        Attribute::Block => &["display: block"],
        Attribute::BlockQuote => &[
            "padding-left: 1em",
            "border-left: 2px solid purple",
            "display: block",
        ],
        Attribute::TableStyle => &["border-collapse: collapse"],
        Attribute::TableHeader => &["background-color: #ddd", "padding: .4rem .8rem"],
        Attribute::TableRow => &["border-bottom: 1px solid #ddd"],
        Attribute::TableCell => &["padding: .4rem .8rem"],
        Attribute::ImageClass => &["max-width: 100%", "height: auto"],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    classes: Vec<Attribute>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a class. Repeats are ignored.
    pub fn add(&mut self, attribute: Attribute) {
        if !self.classes.contains(&attribute) {
            self.classes.push(attribute);
        }
    }

    pub fn classes(&self) -> &[Attribute] {
        &self.classes
    }

    pub fn render(&self) -> String {
        let mut css = rule("body", BODY_RULE);
        for &attribute in &self.classes {
            css.push('\n');
            css.push_str(&rule(
                &format!(".{}", attribute.class_name()),
                declarations(attribute),
            ));
        }
        css
    }
}

fn rule(selector: &str, declarations: &[&str]) -> String {
    let mut out = format!("{selector} {{\n");
    for declaration in declarations {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "    {declaration};");
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stylesheet_has_only_the_body_rule() {
        assert_eq!(
            Stylesheet::new().render(),
            "body {\n    margin: 2rem auto;\n    width: 80%;\n}\n"
        );
    }

    #[test]
    fn classes_keep_first_use_order_without_repeats() {
        let mut sheet = Stylesheet::new();
        sheet.add(Attribute::Italic);
        sheet.add(Attribute::Bold);
        sheet.add(Attribute::Italic);
        assert_eq!(sheet.classes(), &[Attribute::Italic, Attribute::Bold]);

        let css = sheet.render();
        let italic = css.find(".Italic {").unwrap();
        let bold = css.find(".Bold {").unwrap();
        assert!(italic < bold);
        assert!(css.contains("    font-style: italic;\n"));
    }

    #[test]
    fn heading_sizes_shrink_by_level() {
        let mut sheet = Stylesheet::new();
        sheet.add(Attribute::FontSize(HeadingLevel::H3));
        assert!(sheet.render().contains(".FontSize3 {\n    font-size: 20.8px;\n}"));
    }

    #[test]
    fn image_class_is_named_image_attr() {
        let mut sheet = Stylesheet::new();
        sheet.add(Attribute::ImageClass);
        assert!(sheet.render().contains(".ImageAttr {\n    max-width: 100%;\n    height: auto;\n}"));
    }
}
