//! Curated sample documents
//!
//!     Samples live under `samples/<category>/NN-<slug>.md` in this crate. The number prefix
//!     is the sample's id within its category and must be unique there.
//!
//!     ```rust,ignore
//!     let source = Sample::table(2).source();
//!     let doc = Sample::table(2).parse();
//!     ```

use crate::mdtree::ast::Document;
use crate::mdtree::parsing::parse_document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Headings,
    Inlines,
    Lists,
    Tables,
    Documents,
}

impl Category {
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Headings => "headings",
            Category::Inlines => "inlines",
            Category::Lists => "lists",
            Category::Tables => "tables",
            Category::Documents => "documents",
        }
    }
}

pub fn samples_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples")
}

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    category: Category,
    number: usize,
}

impl Sample {
    pub fn new(category: Category, number: usize) -> Self {
        Sample { category, number }
    }

    pub fn heading(number: usize) -> Self {
        Self::new(Category::Headings, number)
    }

    pub fn inline(number: usize) -> Self {
        Self::new(Category::Inlines, number)
    }

    pub fn list(number: usize) -> Self {
        Self::new(Category::Lists, number)
    }

    pub fn table(number: usize) -> Self {
        Self::new(Category::Tables, number)
    }

    pub fn document(number: usize) -> Self {
        Self::new(Category::Documents, number)
    }

    /// Locate the file, panicking when it is missing or the number is ambiguous.
    pub fn path(&self) -> PathBuf {
        let dir = samples_root().join(self.category.dir_name());
        let prefix = format!("{:02}-", self.number);
        let entries = fs::read_dir(&dir)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e));
        let matches: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "md")
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.starts_with(&prefix))
            })
            .collect();
        match matches.as_slice() {
            [path] => path.clone(),
            [] => panic!("No {:?} sample numbered {}", self.category, self.number),
            _ => panic!(
                "Sample number {} is used more than once in {}",
                self.number,
                dir.display()
            ),
        }
    }

    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    pub fn parse(&self) -> Document {
        let path = self.path();
        parse_document(&self.source())
            .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
    }
}
