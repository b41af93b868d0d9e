//! Token routing between the document tree and a speculative table
//!
//!     In normal mode tokens go straight to the [TreeBuilder]. An Open(Table) token switches
//!     to table mode, where every token goes to the [TableBuilder] until the handlers resolve
//!     the table. Resolution grafts the outcome under the document cursor, which has not moved
//!     since the table began.

use crate::mdtree::ast::{ElementKind, Tree};
use crate::mdtree::building::{TableBuilder, TableOutcome, TreeBuilder};
use crate::mdtree::error::{ParseError, ParseResult};
use crate::mdtree::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableResolution {
    Success,
    Failure,
}

#[derive(Debug, Default)]
pub struct TokenRouter {
    builder: TreeBuilder,
    tables: TableBuilder,
    table_mode: bool,
}

impl TokenRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&mut self, token: Token) -> ParseResult<()> {
        if !self.table_mode && token.element == ElementKind::Table && token.is_open() {
            tracing::debug!("table parsing has started");
            self.table_mode = true;
        }
        if self.table_mode {
            tracing::trace!(%token, "routing to table builder");
            self.tables.consume(token)
        } else {
            tracing::trace!(%token, "routing to tree builder");
            self.builder.consume(token)
        }
    }

    pub fn in_table_mode(&self) -> bool {
        self.table_mode
    }

    /// Kind of the element under the active builder's cursor.
    pub fn current_element(&self) -> ElementKind {
        if self.table_mode {
            if let Some(kind) = self.tables.current_element() {
                return kind;
            }
        }
        self.builder.current_element()
    }

    /// Parent of the document cursor.
    pub fn parent_element(&self) -> Option<ElementKind> {
        self.builder.parent_element()
    }

    pub fn table_columns(&self) -> usize {
        self.tables.columns()
    }

    pub fn resolve_table(&mut self, resolution: TableResolution) -> ParseResult<()> {
        if !self.table_mode {
            return Err(ParseError::TableProtocol(format!(
                "table {resolution:?} signalled outside of table mode"
            )));
        }
        let outcome = match resolution {
            TableResolution::Success => self.tables.commit()?,
            TableResolution::Failure => self.tables.fail()?,
        };
        self.table_mode = false;
        tracing::debug!(?resolution, "table parsing has ended");
        self.apply(outcome);
        Ok(())
    }

    fn apply(&mut self, outcome: TableOutcome) {
        if let Some(table) = outcome.table {
            self.builder.append_subtree(&table);
        }
        if let Some(paragraph) = outcome.paragraph {
            self.builder.append_subtree(&paragraph);
        }
    }

    /// Resolve a dangling table and hand over the finished tree.
    pub fn finish(mut self) -> ParseResult<Tree> {
        if self.table_mode {
            tracing::warn!("input ended inside a table, resolving it as failed");
            self.resolve_table(TableResolution::Failure)?;
        }
        Ok(self.builder.finish())
    }
}
