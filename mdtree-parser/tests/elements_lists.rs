//! Ordered, unordered and nested lists

use mdtree_parser::mdtree::ast::{ElementKind, HeadingLevel};
use mdtree_parser::mdtree::testing::assert_tree;
use mdtree_parser::mdtree::testing::samples::Sample;
use mdtree_parser::parse_document;

#[test]
fn test_list_01_unordered() {
    let doc = Sample::list(1).parse();

    assert_tree(&doc).no_warnings().block_count(1).block(0, |list| {
        list.kind(ElementKind::UnorderedList)
            .child_kinds(&[ElementKind::ListItem; 3])
            .child(0, |item| {
                item.text("first");
            })
            .child(1, |item| {
                item.text("second");
            })
            .child(2, |item| {
                item.text("third");
            });
    });
}

#[test]
fn test_list_02_nested() {
    let doc = Sample::list(2).parse();

    assert_tree(&doc)
        .no_warnings()
        .block_count(2)
        .block(0, |h| {
            h.kind(ElementKind::Heading(HeadingLevel::H1)).text("Title");
        })
        .block(1, |list| {
            list.kind(ElementKind::UnorderedList)
                .child_count(2)
                .child(0, |item| {
                    item.child_kinds(&[ElementKind::Content, ElementKind::UnorderedList])
                        .child(1, |nested| {
                            nested.child_count(1).child(0, |inner| {
                                inner.kind(ElementKind::ListItem).text("Item1a");
                            });
                        });
                })
                .child(1, |item| {
                    item.child_count(1).text("Item2");
                });
        });
}

#[test]
fn test_list_03_ordered() {
    let doc = Sample::list(3).parse();

    assert_tree(&doc).no_warnings().block_count(1).block(0, |list| {
        list.kind(ElementKind::OrderedList)
            .child_count(3)
            .child(0, |item| {
                item.text("one");
            })
            .child(2, |item| {
                item.text("ten");
            });
    });
}

#[test]
fn test_list_04_ordered_inside_unordered() {
    let doc = Sample::list(4).parse();

    assert_tree(&doc).no_warnings().block_count(1).block(0, |list| {
        list.kind(ElementKind::UnorderedList)
            .child_count(2)
            .child(0, |item| {
                item.text("fruitapplepear").child(1, |nested| {
                    nested
                        .kind(ElementKind::OrderedList)
                        .child_kinds(&[ElementKind::ListItem, ElementKind::ListItem]);
                });
            })
            .child(1, |item| {
                item.text("veg");
            });
    });
}

#[test]
fn blank_line_ends_the_list() {
    let doc = parse_document("- a\n\nafter\n").unwrap();

    assert_tree(&doc)
        .block_count(2)
        .block(0, |list| {
            list.kind(ElementKind::UnorderedList).child_count(1);
        })
        .block(1, |p| {
            p.kind(ElementKind::Paragraph).text("after");
        });
}

#[test]
fn plain_line_after_a_list_becomes_a_paragraph() {
    let doc = parse_document("- a\nnext\n").unwrap();

    assert_tree(&doc)
        .block_count(2)
        .block(0, |list| {
            list.kind(ElementKind::UnorderedList).text("a");
        })
        .block(1, |p| {
            p.kind(ElementKind::Paragraph).text("next");
        });
}

#[test]
fn number_without_a_dot_is_text() {
    let doc = parse_document("42 apples\n").unwrap();
    assert_tree(&doc).block_count(1).block(0, |p| {
        p.kind(ElementKind::Paragraph).text("42 apples");
    });
}
