//! Parsing
//!
//!     The scanner is a finite state machine over characters. The [driver](driver) reads the
//!     input and dispatches each character to the handler of the current [State]. Handlers
//!     emit tokens through the [router](router), which sends them either to the document tree
//!     builder or, while a table is being tried, to the table builder.
//!
//!     Nested constructs (emphasis inside a list item, a link inside a table cell) push the
//!     state to resume on a [return stack](return_stack). A construct that never terminates is
//!     demoted to literal text and reported as a warning; only an internal inconsistency or an
//!     I/O failure stops the parse.
//!
//!     Entry points:
//!
//!         parse_document(&str)     parse a string already in memory
//!         parse_reader(R: Read)    read everything, then parse

mod context;
pub mod driver;
mod handlers;
mod return_stack;
pub mod router;
mod state;

pub use driver::Parser;
pub use state::{ReturnState, State};

use crate::mdtree::ast::Document;
use crate::mdtree::error::ParseResult;
use std::io::Read;

/// Parse markup text into a [Document].
pub fn parse_document(source: &str) -> ParseResult<Document> {
    Parser::new().parse(source)
}

/// Read the whole source, then parse it.
pub fn parse_reader<R: Read>(mut reader: R) -> ParseResult<Document> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_document(&source)
}
