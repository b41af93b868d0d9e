//! Scanning driver
//!
//!     Feeds the input one character at a time to the handler of the current state. End of
//!     input is signalled by one synthetic newline with the eof flag set, so every handler
//!     gets a chance to close or demote what it has open.
//!
//!     Backslash escapes are resolved here, before dispatch. In raw states (inline code and
//!     code blocks) a backslash is an ordinary character.

use super::context::Context;
use super::handlers::{dispatch, push_escaped};
use crate::mdtree::ast::Document;
use crate::mdtree::error::{ParseError, ParseResult};

/// Upper bound on re-dispatches of one character. Each demotion resumes a shallower state,
/// so a legitimate chain is short.
const RECONSUME_LIMIT: usize = 8;

/// Characters a backslash turns into literal text.
pub fn is_escapable(ch: char) -> bool {
    matches!(
        ch,
        '\\' | '`'
            | '*'
            | '_'
            | '{'
            | '}'
            | '['
            | ']'
            | '<'
            | '>'
            | '('
            | ')'
            | '#'
            | '+'
            | '-'
            | '.'
            | '!'
            | '|'
    )
}

pub struct Parser {
    ctx: Context,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser { ctx: Context::new() }
    }

    pub fn parse(mut self, input: &str) -> ParseResult<Document> {
        tracing::debug!(bytes = input.len(), "parsing document");
        let mut chars = input.chars();
        loop {
            let ch = match chars.next() {
                Some(ch) => ch,
                None => {
                    self.ctx.eof = true;
                    '\n'
                }
            };
            self.step(ch)?;
            if self.ctx.eof {
                break;
            }
        }
        let document = self.ctx.finish()?;
        tracing::debug!(
            nodes = document.tree().len(),
            warnings = document.warnings().count(),
            "document parsed"
        );
        Ok(document)
    }

    fn step(&mut self, ch: char) -> ParseResult<()> {
        if self.ctx.escaped {
            self.ctx.escaped = false;
            if is_escapable(ch) {
                push_escaped(&mut self.ctx, ch)?;
                self.ctx.newline_counter = 0;
            } else {
                push_escaped(&mut self.ctx, '\\')?;
                self.feed(ch)?;
            }
        } else if ch == '\\' && !self.ctx.state.is_raw() {
            self.ctx.escaped = true;
        } else {
            self.feed(ch)?;
        }

        if ch == '\n' {
            self.ctx.line_has_text = false;
            self.ctx.paragraph_opened_on_line = false;
            if !self.ctx.eof {
                self.ctx.line += 1;
            }
        }
        Ok(())
    }

    /// Dispatch one character, again for as long as the handlers ask to reconsume it.
    fn feed(&mut self, ch: char) -> ParseResult<()> {
        for _ in 0..RECONSUME_LIMIT {
            self.ctx.reconsume = false;
            dispatch(&mut self.ctx, ch)?;
            if !self.ctx.reconsume {
                if !matches!(ch, ' ' | '\t' | '\n') {
                    self.ctx.newline_counter = 0;
                }
                return Ok(());
            }
        }
        Err(ParseError::ReconsumeLoop {
            state: self.ctx.state,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mdtree::ast::ElementKind;

    fn parse(input: &str) -> Document {
        Parser::new().parse(input).unwrap()
    }

    #[test]
    fn empty_input_gives_an_empty_document() {
        let doc = parse("");
        assert!(doc.blocks().is_empty());
        assert!(doc.diagnostics().is_empty());
    }

    #[test]
    fn escaped_newline_keeps_the_backslash() {
        let doc = parse("a\\\nb");
        let paragraph = doc.blocks()[0];
        assert_eq!(doc.text(paragraph), "a\\ b");
    }

    #[test]
    fn unknown_escape_is_literal() {
        let doc = parse("\\q");
        assert_eq!(doc.text(doc.blocks()[0]), "\\q");
    }

    #[test]
    fn backslash_is_raw_inside_code() {
        let doc = parse("`a\\*`");
        let paragraph = doc.blocks()[0];
        let code = doc.children(paragraph)[0];
        assert_eq!(doc.kind(code), ElementKind::CodeBlock);
        assert_eq!(doc.text(code), "a\\*");
    }

    #[test]
    fn warning_reports_the_line_of_the_construct() {
        let doc = parse("one\n\n*two\n");
        let warning = doc.warnings().next().unwrap();
        assert_eq!(warning.line, Some(3));
    }

    #[test]
    fn escapable_set() {
        for ch in "\\`*_{}[]<>()#+-.!|".chars() {
            assert!(is_escapable(ch), "{ch} should be escapable");
        }
        assert!(!is_escapable('a'));
        assert!(!is_escapable('\n'));
    }
}
