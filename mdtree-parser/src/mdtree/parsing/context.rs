//! Parse context
//!
//!     Everything a handler may read or change while consuming one character: the current
//!     state, accumulation buffers, counters and flags, the return-state stack and the token
//!     router. The helpers here are the building blocks the handler families share: emitting
//!     content, ending a line, demoting an unterminated construct, closing list levels.

use super::return_stack::ReturnStack;
use super::router::{TableResolution, TokenRouter};
use super::state::{ReturnState, State};
use crate::mdtree::ast::{Document, ElementKind};
use crate::mdtree::diagnostics::Diagnostic;
use crate::mdtree::error::ParseResult;
use crate::mdtree::token::Token;

/// Indentation units per list level. A tab counts as one full level.
pub(crate) const INDENT_WIDTH: usize = 4;

#[derive(Debug)]
pub(crate) struct Context {
    pub state: State,
    /// Literal text waiting to be emitted, or the payload of the construct being scanned.
    pub consumed: String,
    pub alt: String,
    pub src: String,
    pub title: String,
    /// Length of the marker run being scanned (`#`, `-`, `*`, backticks, separator dashes).
    pub counter: usize,
    /// Indentation seen so far on a list continuation line.
    pub indent: usize,
    /// Indentation of the innermost open list, a multiple of [INDENT_WIDTH].
    pub indent_level: usize,
    pub newline_counter: usize,
    pub list_marker: char,
    /// A number is being scanned at the start of a list continuation line.
    pub list_continuation: bool,
    pub blockquote_in_list: bool,
    pub paragraph_opened_on_line: bool,
    /// Text or an inline element was emitted since the last newline.
    pub line_has_text: bool,
    /// Columns validated so far in a table separator row.
    pub separator_columns: usize,
    pub column_valid: bool,
    pub is_image: bool,
    pub escaped: bool,
    pub eof: bool,
    pub reconsume: bool,
    pub line: usize,
    pub returns: ReturnStack,
    pub router: TokenRouter,
    pub diagnostics: Vec<Diagnostic>,
}

impl Context {
    pub fn new() -> Self {
        Context {
            state: State::Data,
            consumed: String::new(),
            alt: String::new(),
            src: String::new(),
            title: String::new(),
            counter: 0,
            indent: 0,
            indent_level: 0,
            newline_counter: 0,
            list_marker: '-',
            list_continuation: false,
            blockquote_in_list: false,
            paragraph_opened_on_line: false,
            line_has_text: false,
            separator_columns: 0,
            column_valid: false,
            is_image: false,
            escaped: false,
            eof: false,
            reconsume: false,
            line: 1,
            returns: ReturnStack::new(),
            router: TokenRouter::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn warn(&mut self, message: &str) {
        let diagnostic = Diagnostic::warning(message, self.line);
        diagnostic.trace();
        self.diagnostics.push(diagnostic);
    }

    pub fn route(&mut self, token: Token) -> ParseResult<()> {
        self.router.route(token)
    }

    pub fn current_element(&self) -> ElementKind {
        self.router.current_element()
    }

    pub fn push_return(&mut self, state: ReturnState) {
        self.returns.push(state);
    }

    /// Resume the state on top of the return stack.
    pub fn resume(&mut self) {
        self.state = self.returns.pop().into();
    }

    /// Re-dispatch the current character in the (new) current state.
    pub fn reconsume(&mut self) {
        self.reconsume = true;
    }

    pub fn consumed_is_blank(&self) -> bool {
        self.consumed.chars().all(|c| c == ' ' || c == '\t')
    }

    pub fn clear_link(&mut self) {
        self.alt.clear();
        self.src.clear();
        self.title.clear();
        self.is_image = false;
    }

    pub fn setup_list_parsing(&mut self) {
        self.counter = 0;
        self.indent = 0;
        self.indent_level = 0;
    }

    /// Emit pending text. At document level it starts a paragraph.
    pub fn emit_content(&mut self) -> ParseResult<()> {
        if self.consumed.is_empty() {
            return Ok(());
        }
        let mut text = std::mem::take(&mut self.consumed);
        if self.ensure_paragraph()? {
            text.insert(0, ' ');
        }
        self.line_has_text = true;
        self.route(Token::content(text))
    }

    /// Whether a block marker read now would start the line.
    pub fn at_line_start(&self) -> bool {
        self.consumed.is_empty() && !self.line_has_text
    }

    /// Inline elements never sit directly under the document root.
    ///
    /// Returns true when the text about to be emitted continues a paragraph from an earlier
    /// line and needs a separating space.
    pub fn ensure_paragraph(&mut self) -> ParseResult<bool> {
        match self.current_element() {
            ElementKind::Document => {
                self.route(Token::open(ElementKind::Paragraph))?;
                self.paragraph_opened_on_line = true;
                Ok(false)
            }
            ElementKind::Paragraph => Ok(!self.paragraph_opened_on_line && !self.line_has_text),
            _ => Ok(false),
        }
    }

    /// Close a paragraph carried over from earlier lines before a block starts.
    pub fn close_paragraph(&mut self) -> ParseResult<()> {
        if self.current_element() == ElementKind::Paragraph && !self.paragraph_opened_on_line {
            self.route(Token::close(ElementKind::Paragraph))?;
            self.newline_counter = 0;
        }
        Ok(())
    }

    /// Emit an inline element holding the pending text.
    pub fn emit_inline(&mut self, open: Token) -> ParseResult<()> {
        let element = open.element;
        if self.ensure_paragraph()? {
            self.route(Token::content(" "))?;
        }
        self.line_has_text = true;
        self.route(open)?;
        if !self.consumed.is_empty() {
            let text = std::mem::take(&mut self.consumed);
            self.route(Token::content(text))?;
        }
        self.route(Token::close(element))
    }

    /// Close the single-line elements open at the end of a line: headings and blockquotes.
    /// Inside a list, stops at the list item and resumes its indentation state.
    pub fn end_line_scope(&mut self) -> ParseResult<()> {
        loop {
            let current = self.current_element();
            match current {
                ElementKind::Heading(_) => {
                    self.route(Token::close(current))?;
                    self.resume();
                }
                ElementKind::Span => {
                    let quoted_item = self.blockquote_in_list
                        && self.router.parent_element() == Some(ElementKind::ListItem);
                    self.route(Token::close(current))?;
                    if quoted_item {
                        self.blockquote_in_list = false;
                    } else {
                        self.resume();
                    }
                }
                ElementKind::ListItem => {
                    self.resume();
                    return Ok(());
                }
                _ => return Ok(()),
            }
        }
    }

    /// Replace an unterminated construct with its literal text.
    ///
    /// In running text the newline is handed back to the resumed state. Inside a table
    /// header or cell the text goes into the cell and the whole table fails.
    pub fn demote_unterminated(&mut self, literal: String, warning: Option<&str>) -> ParseResult<()> {
        if let Some(message) = warning {
            self.warn(message);
        }
        self.clear_link();
        self.counter = 0;
        self.consumed = literal;
        if self.returns.in_table_cell() {
            self.returns.pop();
            return self.fail_table();
        }
        self.resume();
        self.reconsume();
        Ok(())
    }

    /// Keep pending text in the current table row, fail the table and resume the state
    /// that was active before the table began.
    pub fn fail_table(&mut self) -> ParseResult<()> {
        self.emit_content()?;
        self.router.resolve_table(TableResolution::Failure)?;
        self.resume();
        Ok(())
    }

    /// A `|` reached inside an inline construct in a table cell: the construct becomes
    /// literal text and the cell ends.
    pub fn close_cell_on_pipe(&mut self, literal: String, warning: &str) -> ParseResult<()> {
        self.warn(warning);
        let cell_state = self.returns.pop();
        let cell = if cell_state == ReturnState::TableCellData {
            ElementKind::TableCell
        } else {
            ElementKind::TableHead
        };
        self.state = cell_state.into();
        self.clear_link();
        self.counter = 0;
        self.consumed = literal;
        self.emit_content()?;
        self.route(Token::close(cell))?;
        self.route(Token::open(cell))
    }

    pub fn close_through(&mut self, target: fn(ElementKind) -> bool) -> ParseResult<()> {
        loop {
            let current = self.current_element();
            if current == ElementKind::Document {
                tracing::warn!("no open element left to close, cursor stays at the root");
                return Ok(());
            }
            self.route(Token::close(current))?;
            if target(current) {
                return Ok(());
            }
        }
    }

    pub fn close_list_item(&mut self) -> ParseResult<()> {
        self.close_through(|kind| kind == ElementKind::ListItem)
    }

    pub fn close_list(&mut self) -> ParseResult<()> {
        self.close_through(ElementKind::is_list)
    }

    /// Close every open list level.
    pub fn close_all_lists(&mut self) -> ParseResult<()> {
        for _ in 0..=self.indent_level / INDENT_WIDTH {
            self.close_list()?;
        }
        self.blockquote_in_list = false;
        Ok(())
    }

    pub fn finish(self) -> ParseResult<Document> {
        let tree = self.router.finish()?;
        Ok(Document::new(tree, self.diagnostics))
    }
}
