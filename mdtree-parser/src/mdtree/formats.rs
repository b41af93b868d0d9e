//! Text renderings of a parsed document
//!
//!     treeviz   one line per node with box-drawing connectors, for eyeballing and snapshots
//!     json      the serialized [TreeSnapshot](crate::mdtree::ast::TreeSnapshot)
//!
//! HTML lives in the formats crate, which also wraps these two behind its registry.

pub mod json;
pub mod treeviz;

pub use json::to_json_string;
pub use treeviz::to_treeviz_str;
