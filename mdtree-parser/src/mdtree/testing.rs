//! Testing utilities
//!
//!     Two rules keep the parser tests honest:
//!
//!         1. Source text comes from the curated files under `samples/`, loaded through
//!            [Sample](samples::Sample). Ad-hoc strings are fine for a single edge case,
//!            but anything that exercises a whole construct belongs in a sample.
//!         2. Trees are checked with the fluent [assert_tree] API, which reports the path
//!            of the failing node (`blocks[1].children[0]`) instead of a bare `assert_eq!`.
//!
//!     ```rust,ignore
//!     use mdtree_parser::mdtree::testing::{assert_tree, samples::Sample};
//!     use mdtree_parser::mdtree::ast::ElementKind;
//!
//!     let doc = Sample::list(1).parse();
//!     assert_tree(&doc)
//!         .block_count(1)
//!         .block(0, |list| {
//!             list.kind(ElementKind::UnorderedList).child_count(2);
//!         });
//!     ```

mod assertions;
mod matchers;
pub mod samples;

pub use assertions::{assert_tree, DocumentAssertion, NodeAssertion};
pub use matchers::TextMatch;
