//! Fatal parse errors
//!
//!     Problems in the markup itself are never errors: they degrade to literal content and
//!     raise a [Diagnostic](crate::mdtree::diagnostics::Diagnostic). A [ParseError] means the
//!     engine contradicted itself (a Close for an element that is not open, a state with no
//!     matching handler) or the input could not be read. The parse stops.

use crate::mdtree::ast::ElementKind;
use crate::mdtree::parsing::State;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot close {found}, the open element is {expected}")]
    ElementMismatch {
        expected: ElementKind,
        found: ElementKind,
    },

    #[error("handler table entry does not match state {state:?}")]
    StateTableMismatch { state: State },

    #[error("table protocol violation: {0}")]
    TableProtocol(String),

    #[error("state {state:?} kept re-dispatching the same character")]
    ReconsumeLoop { state: State },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
