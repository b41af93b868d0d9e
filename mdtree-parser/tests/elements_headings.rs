//! Headings, rules and block quotes

use mdtree_parser::mdtree::ast::{Attribute, ElementKind, HeadingLevel};
use mdtree_parser::mdtree::testing::assert_tree;
use mdtree_parser::mdtree::testing::samples::Sample;
use mdtree_parser::parse_document;

#[test]
fn test_heading_01_levels() {
    let doc = Sample::heading(1).parse();

    assert_tree(&doc)
        .no_warnings()
        .block_count(3)
        .block(0, |h| {
            h.kind(ElementKind::Heading(HeadingLevel::H1))
                .has_attribute(Attribute::Bold)
                .has_attribute(Attribute::FontSize(HeadingLevel::H1))
                .text("One");
        })
        .block(1, |h| {
            h.kind(ElementKind::Heading(HeadingLevel::H2)).text("Two");
        })
        .block(2, |h| {
            h.kind(ElementKind::Heading(HeadingLevel::H6))
                .has_attribute(Attribute::FontSize(HeadingLevel::H6))
                .text("Six");
        });
}

#[test]
fn test_heading_02_markers_that_are_not_headings() {
    // Seven marks and a mark without a space are both plain text, silently.
    let doc = Sample::heading(2).parse();

    assert_tree(&doc).no_warnings().block_count(1).block(0, |p| {
        p.kind(ElementKind::Paragraph).text("####### Seven #NoSpace");
    });
}

#[test]
fn heading_closes_a_carried_paragraph() {
    let doc = parse_document("intro\n# Next\n").unwrap();

    assert_tree(&doc)
        .block_count(2)
        .block(0, |p| {
            p.kind(ElementKind::Paragraph).text("intro");
        })
        .block(1, |h| {
            h.kind(ElementKind::Heading(HeadingLevel::H1)).text("Next");
        });
}

#[test]
fn hash_mid_line_is_text() {
    let doc = parse_document("issue #4").unwrap();
    assert_tree(&doc).block(0, |p| {
        p.kind(ElementKind::Paragraph).text("issue #4");
    });
}

#[test]
fn three_dashes_make_a_rule() {
    let doc = parse_document("---\n").unwrap();
    assert_tree(&doc).block_count(1).block(0, |hr| {
        hr.kind(ElementKind::HorizontalRule).child_count(0);
    });
}

#[test]
fn short_dash_run_is_text() {
    let doc = parse_document("--x").unwrap();
    assert_tree(&doc).block(0, |p| {
        p.kind(ElementKind::Paragraph).text("--x");
    });
}

#[test]
fn block_quote_spans_one_line() {
    let doc = parse_document("> quoted\nplain\n").unwrap();

    assert_tree(&doc)
        .block_count(2)
        .block(0, |q| {
            q.kind(ElementKind::Span)
                .has_attribute(Attribute::BlockQuote)
                .text(" quoted");
        })
        .block(1, |p| {
            p.kind(ElementKind::Paragraph).text("plain");
        });
}
