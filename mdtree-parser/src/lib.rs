//! # mdtree
//!
//! A character-driven parser for lightweight markup that builds a document tree.
//!
//! File Layout
//!
//!     src/mdtree
//!       ├── ast          Element kinds, attributes, the arena tree and the finished Document
//!       ├── token        Open / Close / Content events emitted by the scanner
//!       ├── building     Tree builder (main tree) and table builder (speculative subtree)
//!       ├── parsing      Scanning driver, parse context, return-state stack, router, state handlers
//!       ├── diagnostics  Leveled messages collected during a parse
//!       ├── formats      Tree visualisation and JSON snapshots
//!       └── testing      Fluent tree assertions and sample documents
//!
//! The entry point is [`parse_document`](mdtree::parsing::parse_document).
//! For testing guidelines, see the [testing module](mdtree::testing).

pub mod mdtree;

pub use mdtree::ast::Document;
pub use mdtree::error::{ParseError, ParseResult};
pub use mdtree::parsing::{parse_document, parse_reader};
