//! API document loading and validation.
//!
//! Reads a pre-resolved API document from TOML or JSON into
//! [`apigen_ir::ApiDocument`] and checks the structural guarantees that
//! backends rely on (unique operation ids, well-formed path templates).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod parse;
mod validate;

pub use error::{Error, Result, SourceContext};
pub use file::ApiFile;
pub use parse::{DocumentFormat, parse_document};
pub use validate::path_placeholders;
