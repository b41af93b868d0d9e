//! Main module for mdtree library functionality

pub mod ast;
pub mod building;
pub mod diagnostics;
pub mod error;
pub mod formats;
pub mod parsing;
pub mod testing;
pub mod token;
