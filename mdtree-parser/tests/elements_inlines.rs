//! Emphasis, code, links, images and escapes

use mdtree_parser::mdtree::ast::{Attribute, ElementKind};
use mdtree_parser::mdtree::testing::assert_tree;
use mdtree_parser::mdtree::testing::samples::Sample;
use mdtree_parser::parse_document;
use rstest::rstest;

#[test]
fn test_inline_01_emphasis() {
    let doc = Sample::inline(1).parse();

    assert_tree(&doc).no_warnings().block_count(1).block(0, |p| {
        p.kind(ElementKind::Paragraph)
            .text("Some italic, bold and both here.")
            .child_kinds(&[
                ElementKind::Content,
                ElementKind::Span,
                ElementKind::Content,
                ElementKind::Span,
                ElementKind::Content,
                ElementKind::Span,
                ElementKind::Content,
            ])
            .child(1, |span| {
                span.has_attribute(Attribute::Italic).text("italic");
            })
            .child(3, |span| {
                span.has_attribute(Attribute::Bold).text("bold");
            })
            .child(5, |span| {
                span.has_attribute(Attribute::Bold)
                    .has_attribute(Attribute::Italic)
                    .text("both");
            });
    });
}

#[test]
fn test_inline_02_code() {
    let doc = Sample::inline(2).parse();

    assert_tree(&doc)
        .no_warnings()
        .block_count(2)
        .block(0, |p| {
            p.kind(ElementKind::Paragraph).child(1, |code| {
                code.kind(ElementKind::CodeBlock)
                    .has_attribute(Attribute::Inline)
                    .text("let x = 1;");
            });
        })
        .block(1, |block| {
            block
                .kind(ElementKind::CodeBlock)
                .has_attribute(Attribute::Block)
                .text("fn main() {}\n");
        });
}

#[test]
fn test_inline_03_links_and_images() {
    let doc = Sample::inline(3).parse();

    assert_tree(&doc).no_warnings().block(0, |p| {
        p.text("See the site and a cat.")
            .child(1, |link| {
                link.kind(ElementKind::Hyperlink)
                    .link("https://example.org", "the site")
                    .title("Example");
            })
            .child(3, |image| {
                image
                    .kind(ElementKind::Image)
                    .has_attribute(Attribute::ImageClass)
                    .image("cat.png", "a cat")
                    .title("");
            });
    });
}

#[test]
fn test_inline_04_escapes() {
    let doc = Sample::inline(4).parse();

    assert_tree(&doc).no_warnings().block_count(1).block(0, |p| {
        p.kind(ElementKind::Paragraph)
            .child_count(1)
            .text("*not italic* and # not a heading");
    });
}

#[test]
fn test_inline_05_unclosed_emphasis() {
    let doc = Sample::inline(5).parse();

    assert_tree(&doc)
        .warning_count(1)
        .warning_on_line(1, "Unclosed '*'")
        .block_count(1)
        .block(0, |p| {
            p.kind(ElementKind::Paragraph).child_count(1).text("*foo");
        });
}

#[rstest]
#[case::bare_bang("wow!", "wow!")]
#[case::bang_not_image("!x", "!x")]
#[case::alt_only("[text]", "[text]")]
#[case::alt_then_space("[text] more", "[text] more")]
#[case::unclosed_target("[a](b", "[a](b")]
#[case::bad_title("[a](b c)", "[a](b c)")]
#[case::unclosed_image_title("![a](b \"t", "![a](b \"t")]
#[case::empty_code("``", "``")]
#[case::unclosed_code("`x", "`x")]
#[case::unclosed_bold("**a*", "**a*")]
#[case::empty_triple("****", "****")]
fn broken_inlines_stay_literal(#[case] input: &str, #[case] expected: &str) {
    let doc = parse_document(input).unwrap();
    assert_tree(&doc).block_count(1).block(0, |p| {
        p.kind(ElementKind::Paragraph).text(expected);
    });
}

#[test]
fn inline_at_document_level_opens_a_paragraph() {
    let doc = parse_document("**bold** start").unwrap();
    assert_tree(&doc).block_count(1).block(0, |p| {
        p.kind(ElementKind::Paragraph)
            .child_kinds(&[ElementKind::Span, ElementKind::Content]);
    });
}

#[test]
fn short_star_run_inside_bold_is_literal() {
    let doc = parse_document("**a*b**").unwrap();
    assert_tree(&doc).block(0, |p| {
        p.child(0, |span| {
            span.has_attribute(Attribute::Bold).text("a*b");
        });
    });
}

#[test]
fn continued_paragraph_lines_are_joined_with_a_space() {
    let doc = parse_document("one\ntwo\n").unwrap();
    assert_tree(&doc).block_count(1).block(0, |p| {
        p.text("one two");
    });
}

#[test]
fn one_line_paragraph_survives_a_single_blank_line() {
    let doc = parse_document("one\n\ntwo\n").unwrap();
    assert_tree(&doc).block_count(1).block(0, |p| {
        p.text("one two");
    });
}

#[test]
fn multi_line_paragraph_closes_at_a_blank_line() {
    let doc = parse_document("one\ntwo\n\nthree\n").unwrap();
    assert_tree(&doc)
        .block_count(2)
        .block(0, |p| {
            p.text("one two");
        })
        .block(1, |p| {
            p.text("three");
        });
}
