//! The extension points a target-language backend implements.

use std::fmt;

use apigen_ir::{ApiDocument, Schema};
use eyre::Result;

use crate::{Bundle, CodegenModel, CodegenOperation, Preprocessed, PropertyBag, SupportingFile};

/// What a backend produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Client,
    Server,
    Documentation,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Client => write!(f, "client"),
            BackendKind::Server => write!(f, "server"),
            BackendKind::Documentation => write!(f, "documentation"),
        }
    }
}

/// A configuration option a backend advertises to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOption {
    /// Property bag key.
    pub name: &'static str,
    pub description: &'static str,
}

impl CliOption {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Trait for target-language backends.
///
/// Implement this trait to add support for generating code in a new
/// language. The host calls the hooks in a fixed order (see
/// [`Generator`](crate::Generator)); every hook takes `&self`, so a backend
/// is immutable once constructed.
pub trait Backend {
    /// Registry name (e.g., "clojure-server")
    fn name(&self) -> &'static str;

    /// One-line description shown by `apigen list`
    fn help(&self) -> &'static str;

    fn kind(&self) -> BackendKind;

    /// Default output folder when the caller gives none.
    fn output_folder(&self) -> String {
        format!("generated-code/{}", self.name())
    }

    /// Options this backend reads from the property bag.
    fn options(&self) -> Vec<CliOption> {
        Vec::new()
    }

    /// Resolve defaults and declare the supporting files.
    ///
    /// Called once per run, before models and operations are built.
    fn preprocess(&self, document: &ApiDocument, properties: &PropertyBag) -> Result<Preprocessed>;

    /// Render a type reference in target syntax.
    fn type_declaration(&self, schema: &Schema) -> String;

    /// Name of a model in the target language.
    fn model_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Rewrite the built operations into their final form.
    ///
    /// Called exactly once per run; implementations need not be idempotent.
    fn postprocess_operations(
        &self,
        operations: Vec<CodegenOperation>,
        _models: &[CodegenModel],
    ) -> Vec<CodegenOperation> {
        operations
    }

    /// Make text safe to embed between double quotes.
    fn escape_quotation_mark(&self, input: &str) -> String {
        input.replace('"', "\\\"")
    }

    /// Neutralize sequences that would break out of generated source.
    fn escape_unsafe_characters(&self, input: &str) -> String {
        input.to_string()
    }

    /// Escape free text (descriptions, summaries) for embedding.
    ///
    /// Tabs and line breaks become spaces and backslashes are doubled before
    /// the quotation mark and unsafe character hooks run.
    fn escape_text(&self, input: &str) -> String {
        let flattened = input.replace(['\t', '\n', '\r'], " ").replace('\\', "\\\\");
        self.escape_unsafe_characters(&self.escape_quotation_mark(&flattened))
    }

    /// Render a supporting file declared by [`Backend::preprocess`].
    fn render_supporting_file(&self, file: &SupportingFile, bundle: &Bundle) -> Result<String>;
}
