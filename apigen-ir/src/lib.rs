//! Intermediate representation of API documents for apigen.
//!
//! This crate provides the language-agnostic description of an API surface
//! that the host hands to every backend. The types are already resolved:
//! operations carry their parameters and return types, and every type is a
//! [`Schema`] tree of named kinds, arrays and maps.
//!
//! # Architecture
//!
//! ```text
//! api.toml / api.json → apigen-document (loading) → apigen-ir → codegen host → backend
//! ```

mod document;
mod operation;
mod schema;

pub use document::{ApiDocument, ApiInfo, Contact, License};
pub use operation::{HttpMethod, Operation, ParamLocation, Parameter};
pub use schema::{Model, Property, Schema};
