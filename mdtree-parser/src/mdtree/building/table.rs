//! Speculative table construction
//!
//!     While a table is being tried, tokens build an isolated tree rooted at a table element.
//!     Nothing reaches the document until the table is resolved:
//!
//!         - success: the table (minus a trailing row that never received a cell) is handed
//!           back to be grafted as one unit.
//!         - failure: the last row is detached. Rows before it still form a table and are
//!           handed back as such. The detached row is flattened into a paragraph, with a `|`
//!           content marker in front of each former cell's children.
//!
//!     The header row fixes the column count. Body rows ignore cells beyond it and are padded
//!     with empty cells when they close short.

use super::payload_for;
use crate::mdtree::ast::{Attribute, ElementKind, NodeId, NodePayload, Tree};
use crate::mdtree::error::{ParseError, ParseResult};
use crate::mdtree::token::{Token, TokenKind};

/// What a resolved table contributes to the document, in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableOutcome {
    pub table: Option<Tree>,
    pub paragraph: Option<Tree>,
}

#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    table: Option<Tree>,
    cursor: Option<NodeId>,
    columns: usize,
    /// Inline elements opened inside a dropped cell, whose Close must be dropped too.
    discarding: usize,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.table.is_some()
    }

    /// Column count learned from the header row, 0 until it closes.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn current_element(&self) -> Option<ElementKind> {
        let table = self.table.as_ref()?;
        self.cursor.map(|id| table.kind(id))
    }

    pub fn consume(&mut self, token: Token) -> ParseResult<()> {
        if token.element == ElementKind::Table {
            return self.start(&token);
        }
        let (table, cursor) = match (self.table.as_mut(), self.cursor) {
            (Some(table), Some(cursor)) => (table, cursor),
            _ => {
                return Err(ParseError::TableProtocol(format!(
                    "{token} routed while no table is open"
                )))
            }
        };
        let at = table.kind(cursor);

        match (token.kind, token.element) {
            (TokenKind::Content, _) => {
                if at == ElementKind::TableRow {
                    tracing::debug!("dropping content of a cell beyond the column count");
                } else {
                    table.append(cursor, ElementKind::Content, Vec::new(), NodePayload::Content(token.text));
                }
            }
            (TokenKind::Open, ElementKind::TableRow) => {
                expect_at(at, ElementKind::Table, &token)?;
                self.cursor = Some(table.append(
                    cursor,
                    ElementKind::TableRow,
                    vec![Attribute::TableRow],
                    NodePayload::Structural,
                ));
            }
            (TokenKind::Close, ElementKind::TableRow) => {
                expect_at(at, ElementKind::TableRow, &token)?;
                self.close_row(cursor);
            }
            (TokenKind::Open, ElementKind::TableHead) => {
                expect_at(at, ElementKind::TableRow, &token)?;
                self.cursor = Some(table.append(
                    cursor,
                    ElementKind::TableHead,
                    vec![Attribute::TableHeader],
                    NodePayload::Structural,
                ));
            }
            (TokenKind::Open, ElementKind::TableCell) => {
                expect_at(at, ElementKind::TableRow, &token)?;
                if table.children(cursor).len() < self.columns {
                    self.cursor = Some(table.append(
                        cursor,
                        ElementKind::TableCell,
                        vec![Attribute::TableCell],
                        NodePayload::Structural,
                    ));
                } else {
                    tracing::debug!(columns = self.columns, "dropping cell beyond the column count");
                }
            }
            (TokenKind::Close, ElementKind::TableCell) if at == ElementKind::TableRow => {}
            (TokenKind::Close, ElementKind::TableHead | ElementKind::TableCell) => {
                expect_at(at, token.element, &token)?;
                self.cursor = table.parent(cursor);
            }
            (TokenKind::Open, element) if element.is_inline() => {
                if at == ElementKind::TableRow {
                    self.discarding += 1;
                } else {
                    let payload = payload_for(&token);
                    self.cursor = Some(table.append(cursor, element, token.attributes, payload));
                }
            }
            (TokenKind::Close, element) if element.is_inline() => {
                if self.discarding > 0 {
                    self.discarding -= 1;
                } else {
                    expect_at(at, element, &token)?;
                    self.cursor = table.parent(cursor);
                }
            }
            _ => {
                return Err(ParseError::TableProtocol(format!(
                    "{token} cannot appear inside a table"
                )))
            }
        }
        Ok(())
    }

    fn start(&mut self, token: &Token) -> ParseResult<()> {
        if !token.is_open() {
            return Err(ParseError::TableProtocol(
                "tables end by resolution, not by a Close token".to_string(),
            ));
        }
        if self.table.is_some() {
            return Err(ParseError::TableProtocol(
                "a table was opened while another is unresolved".to_string(),
            ));
        }
        let table = Tree::with_root(ElementKind::Table, vec![Attribute::TableStyle]);
        self.cursor = Some(table.root());
        self.table = Some(table);
        self.columns = 0;
        self.discarding = 0;
        Ok(())
    }

    fn close_row(&mut self, row: NodeId) {
        let Some(table) = self.table.as_mut() else {
            return;
        };
        if self.columns == 0 {
            // Header row: a trailing `|` leaves one empty head behind.
            if let Some(last) = table.last_child(row) {
                if table.children(last).is_empty() {
                    table.detach_last_child(row);
                }
            }
            self.columns = table.children(row).len();
            if self.columns == 0 {
                tracing::warn!("table header has no cells");
            }
        } else {
            for _ in table.children(row).len()..self.columns {
                table.append(
                    row,
                    ElementKind::TableCell,
                    vec![Attribute::TableCell],
                    NodePayload::Structural,
                );
            }
        }
        self.cursor = table.parent(row);
    }

    /// Resolve as a complete table.
    pub fn commit(&mut self) -> ParseResult<TableOutcome> {
        let mut table = self.take()?;
        let root = table.root();
        if let Some(last) = table.last_child(root) {
            if table.children(last).is_empty() {
                table.detach_last_child(root);
            }
        }
        Ok(TableOutcome {
            table: (!table.is_empty()).then_some(table),
            paragraph: None,
        })
    }

    /// Resolve as a failed table: keep the valid rows, flatten the last one.
    pub fn fail(&mut self) -> ParseResult<TableOutcome> {
        let mut table = self.take()?;
        let root = table.root();
        let Some(last_row) = table.detach_last_child(root) else {
            return Ok(TableOutcome::default());
        };
        let paragraph = flatten_row(&table, last_row);
        Ok(TableOutcome {
            table: (!table.is_empty()).then_some(table),
            paragraph,
        })
    }

    fn take(&mut self) -> ParseResult<Tree> {
        self.cursor = None;
        self.columns = 0;
        self.discarding = 0;
        self.table
            .take()
            .ok_or_else(|| ParseError::TableProtocol("no table to resolve".to_string()))
    }
}

fn expect_at(at: ElementKind, expected: ElementKind, token: &Token) -> ParseResult<()> {
    if at == expected {
        Ok(())
    } else {
        Err(ParseError::TableProtocol(format!(
            "{token} arrived while the table cursor is at {at}"
        )))
    }
}

fn flatten_row(table: &Tree, row: NodeId) -> Option<Tree> {
    if table.children(row).is_empty() {
        return None;
    }
    let mut paragraph = Tree::new(ElementKind::Paragraph);
    let root = paragraph.root();
    for &cell in table.children(row) {
        paragraph.append(
            root,
            ElementKind::Content,
            Vec::new(),
            NodePayload::Content("|".to_string()),
        );
        for &child in table.children(cell) {
            paragraph.graft(root, table, child);
        }
    }
    Some(paragraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(builder: &mut TableBuilder, tokens: Vec<Token>) {
        for token in tokens {
            builder.consume(token).unwrap();
        }
    }

    fn header(builder: &mut TableBuilder, names: &[&str]) {
        feed(
            builder,
            vec![Token::open(ElementKind::Table), Token::open(ElementKind::TableRow)],
        );
        for name in names {
            feed(
                builder,
                vec![
                    Token::open(ElementKind::TableHead),
                    Token::content(*name),
                    Token::close(ElementKind::TableHead),
                ],
            );
        }
        // trailing `|` opens one more head that stays empty
        feed(
            builder,
            vec![
                Token::open(ElementKind::TableHead),
                Token::close(ElementKind::TableHead),
                Token::close(ElementKind::TableRow),
            ],
        );
    }

    fn row(builder: &mut TableBuilder, cells: &[&str]) {
        builder.consume(Token::open(ElementKind::TableRow)).unwrap();
        for cell in cells {
            feed(
                builder,
                vec![
                    Token::open(ElementKind::TableCell),
                    Token::content(*cell),
                    Token::close(ElementKind::TableCell),
                ],
            );
        }
        builder.consume(Token::close(ElementKind::TableRow)).unwrap();
    }

    #[test]
    fn header_row_sets_column_count() {
        let mut builder = TableBuilder::new();
        header(&mut builder, &["a", "b"]);
        assert_eq!(builder.columns(), 2);
        assert_eq!(builder.current_element(), Some(ElementKind::Table));
    }

    #[test]
    fn extra_cells_are_dropped_and_short_rows_padded() {
        let mut builder = TableBuilder::new();
        header(&mut builder, &["a", "b"]);
        row(&mut builder, &["1", "2", "3"]);
        row(&mut builder, &["4"]);

        let table = builder.commit().unwrap().table.unwrap();
        let rows = table.children(table.root()).to_vec();
        assert_eq!(rows.len(), 3);
        assert_eq!(table.children(rows[1]).len(), 2);
        assert_eq!(table.text(rows[1]), "12");
        assert_eq!(table.children(rows[2]).len(), 2);
        assert!(table.children(table.children(rows[2])[1]).is_empty());
    }

    #[test]
    fn inline_elements_in_dropped_cells_are_ignored() {
        let mut builder = TableBuilder::new();
        header(&mut builder, &["a"]);
        feed(
            &mut builder,
            vec![
                Token::open(ElementKind::TableRow),
                Token::open(ElementKind::TableCell),
                Token::content("1"),
                Token::close(ElementKind::TableCell),
                Token::open(ElementKind::TableCell),
                Token::open(ElementKind::Span).with_attribute(Attribute::Italic),
                Token::content("dropped"),
                Token::close(ElementKind::Span),
                Token::close(ElementKind::TableCell),
                Token::close(ElementKind::TableRow),
            ],
        );
        let table = builder.commit().unwrap().table.unwrap();
        assert_eq!(table.text(table.root()), "a1");
    }

    #[test]
    fn commit_drops_the_pre_opened_empty_row() {
        let mut builder = TableBuilder::new();
        header(&mut builder, &["a"]);
        row(&mut builder, &["1"]);
        builder.consume(Token::open(ElementKind::TableRow)).unwrap();

        let outcome = builder.commit().unwrap();
        let table = outcome.table.unwrap();
        assert_eq!(table.children(table.root()).len(), 2);
        assert!(outcome.paragraph.is_none());
        assert!(!builder.is_open());
    }

    #[test]
    fn failure_commits_valid_rows_and_flattens_the_last() {
        let mut builder = TableBuilder::new();
        header(&mut builder, &["a", "b"]);
        row(&mut builder, &["1", "2"]);
        feed(
            &mut builder,
            vec![
                Token::open(ElementKind::TableRow),
                Token::open(ElementKind::TableCell),
                Token::content("x"),
                Token::close(ElementKind::TableCell),
                Token::open(ElementKind::TableCell),
                Token::open(ElementKind::Span).with_attribute(Attribute::Bold),
                Token::content("y"),
                Token::close(ElementKind::Span),
                Token::content(" z"),
            ],
        );

        let outcome = builder.fail().unwrap();
        let table = outcome.table.unwrap();
        assert_eq!(table.children(table.root()).len(), 2);

        let paragraph = outcome.paragraph.unwrap();
        let root = paragraph.root();
        assert_eq!(paragraph.text(root), "|x|y z");
        let kinds: Vec<_> = paragraph
            .children(root)
            .iter()
            .map(|&id| paragraph.kind(id))
            .collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Content,
                ElementKind::Content,
                ElementKind::Content,
                ElementKind::Span,
                ElementKind::Content
            ]
        );
    }

    #[test]
    fn failure_in_the_header_leaves_no_table() {
        let mut builder = TableBuilder::new();
        feed(
            &mut builder,
            vec![
                Token::open(ElementKind::Table),
                Token::open(ElementKind::TableRow),
                Token::open(ElementKind::TableHead),
                Token::content(" a "),
                Token::close(ElementKind::TableHead),
                Token::open(ElementKind::TableHead),
                Token::content(" b"),
            ],
        );
        let outcome = builder.fail().unwrap();
        assert!(outcome.table.is_none());
        let paragraph = outcome.paragraph.unwrap();
        assert_eq!(paragraph.text(paragraph.root()), "| a | b");
    }

    #[test]
    fn tokens_without_a_table_are_a_protocol_error() {
        let mut builder = TableBuilder::new();
        let err = builder.consume(Token::content("x")).unwrap_err();
        assert!(matches!(err, ParseError::TableProtocol(_)));
        assert!(matches!(builder.fail(), Err(ParseError::TableProtocol(_))));
    }

    #[test]
    fn block_elements_cannot_enter_a_table() {
        let mut builder = TableBuilder::new();
        feed(&mut builder, vec![Token::open(ElementKind::Table)]);
        let err = builder
            .consume(Token::open(ElementKind::Paragraph))
            .unwrap_err();
        assert!(matches!(err, ParseError::TableProtocol(_)));
    }
}
