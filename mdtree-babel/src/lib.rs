//! Output formats for mdtree documents
//!
//!     A parsed [Document](mdtree_parser::Document) is handed to a [Format] by name through the
//!     [FormatRegistry]. Formats only serialize: the parser is the single way into a document.
//!
//!     This is a pure library. Nothing here prints, reads the environment or touches files; the
//!     CLI decides where rendered output goes.
//!
//!     .
//!     ├── error.rs                FormatError
//!     ├── format.rs               Format trait
//!     ├── registry.rs             FormatRegistry, lookup by name
//!     └── formats
//!         ├── html                html5ever DOM serialization and the matching stylesheet
//!         ├── json                serde snapshot of the tree
//!         └── treeviz             one line per node, box connectors
//!
//!     The HTML format produces two artifacts, the page and its stylesheet. Callers that need
//!     both use [render_page](formats::html::render_page) directly; the registry path returns
//!     the page only.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use formats::html::{render_page, RenderedPage, Stylesheet};
pub use registry::FormatRegistry;
