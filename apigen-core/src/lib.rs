//! Core utilities and types for the apigen code generator.
//!
//! This crate provides the string case conversions and file writing rules
//! shared by the host and every language backend.

mod file;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_kebab_case};
