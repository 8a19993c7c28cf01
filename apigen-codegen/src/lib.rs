//! Backend contract and generation host for apigen.
//!
//! This crate provides the extension points every target-language backend
//! implements and the host that drives them.
//!
//! # Module Organization
//!
//! - [`backend`] - The [`Backend`] trait and the options a backend advertises
//! - [`properties`] - The [`PropertyBag`] of generation options
//! - [`model`] - Intermediate records handed to and returned from backends
//! - [`generator`] - The host that calls the extension points in order
//! - [`registry`] - Backend lookup by name
//! - [`builder`] - Code generation building blocks ([`CodeBuilder`], [`Indent`])
//! - [`naming`] - Language-specific naming rules

pub mod backend;
pub mod builder;
pub mod generator;
pub mod model;
pub mod naming;
pub mod properties;
pub mod registry;

pub use backend::{Backend, BackendKind, CliOption};
pub use builder::{CodeBuilder, Indent};
pub use generator::{GenerateResult, Generator, PreviewFile};
pub use model::{
    Bundle, CodegenModel, CodegenOperation, CodegenParameter, CodegenProperty, Preprocessed,
    SupportingFile,
};
pub use naming::NamingConvention;
pub use properties::PropertyBag;
pub use registry::Registry;
