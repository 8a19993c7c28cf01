//! Clojure server backend for apigen.
//!
//! Generates a Malli schema namespace and a Reitit-style route table from an
//! [`ApiDocument`](apigen_ir::ApiDocument).

mod backend;
mod naming;
mod token;
mod type_mapping;

pub mod files;

pub use backend::{BASE_NAMESPACE, ClojureServer};
pub use naming::{CLOJURE_NAMING, derive_namespace, route_path, to_identifier};
pub use token::TypeToken;
pub use type_mapping::TypeMapping;
