//! Treeviz formatter for document trees
//!
//! One line per node, nesting drawn with box connectors. Leaves show their text, structural
//! nodes their kind and classes. Labels are truncated to 30 characters.
//!
//!     ⧉ Document
//!     ├─ § Heading(1) (Bold FontSize1)
//!     │ └─ ◦ Title
//!     └─ ¶ Paragraph
//!       ├─ ◦ Some
//!       └─ ≋ Span (Italic)
//!         └─ ◦ text
//!
//! Icons
//!     Document ⧉, Heading §, Paragraph ¶, Content ◦, CodeBlock ƒ, HorizontalRule ―,
//!     Hyperlink ⊕, Image ▣, Span ≋, lists ☰, ListItem •, Table ▦, TableRow ═,
//!     TableHead ⊤, TableCell □

use crate::mdtree::ast::{snapshot_from_document, Document, TreeSnapshot};

const LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Document" => "⧉",
        "Paragraph" => "¶",
        "Content" => "◦",
        "CodeBlock" => "ƒ",
        "HorizontalRule" => "―",
        "Hyperlink" => "⊕",
        "Image" => "▣",
        "Span" => "≋",
        "OrderedList" | "UnorderedList" => "☰",
        "ListItem" => "•",
        "Table" => "▦",
        "TableRow" => "═",
        "TableHead" => "⊤",
        "TableCell" => "□",
        heading if heading.starts_with("Heading") => "§",
        _ => "○",
    }
}

fn label(snapshot: &TreeSnapshot) -> String {
    if !snapshot.label.is_empty() {
        return truncate(&snapshot.label, LABEL_WIDTH);
    }
    match snapshot.attributes.get("classes") {
        Some(classes) => format!("{} ({})", snapshot.node_type, classes),
        None => snapshot.node_type.clone(),
    }
}

fn format_snapshot(snapshot: &TreeSnapshot, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(&snapshot.node_type),
        label(snapshot)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(snapshot, &child_prefix, output);
}

fn format_children(snapshot: &TreeSnapshot, prefix: &str, output: &mut String) {
    let count = snapshot.children.len();
    for (i, child) in snapshot.children.iter().enumerate() {
        format_snapshot(child, prefix, i + 1 == count, output);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let snapshot = snapshot_from_document(doc);
    let mut output = format!("{} {}\n", get_icon(&snapshot.node_type), label(&snapshot));
    format_children(&snapshot, "", &mut output);
    output
}
