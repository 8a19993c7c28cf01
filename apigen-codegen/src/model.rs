//! Intermediate records exchanged between the host and a backend.
//!
//! The host builds these from an [`ApiDocument`](apigen_ir::ApiDocument),
//! hands them to the backend's hooks, and passes the result to rendering.

use std::path::PathBuf;

use apigen_ir::{ParamLocation, Schema};

use crate::PropertyBag;

/// One parameter of a [`CodegenOperation`].
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenParameter {
    /// Name as declared in the document.
    pub base_name: String,
    pub location: ParamLocation,
    pub required: bool,
    /// Escaped description.
    pub description: Option<String>,
    /// Declared type.
    pub schema: Schema,
    /// Rendered target-syntax type.
    pub data_type: String,
}

/// One endpoint, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenOperation {
    /// Declared or generated operation id.
    pub operation_id: String,
    /// Identifier used to name the handler.
    pub nickname: String,
    pub http_method: String,
    pub path: String,
    /// Escaped summary.
    pub summary: Option<String>,
    /// Escaped long description.
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub all_params: Vec<CodegenParameter>,
    /// Declared type of the response body.
    pub return_schema: Option<Schema>,
    /// Rendered target-syntax type of the response body.
    pub return_type: Option<String>,
}

impl CodegenOperation {
    /// Parameters carried in the given location, in declaration order.
    pub fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &CodegenParameter> {
        self.all_params
            .iter()
            .filter(move |p| p.location == location)
    }
}

/// One property of a [`CodegenModel`].
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenProperty {
    /// Name as declared in the document.
    pub base_name: String,
    pub required: bool,
    /// Escaped description.
    pub description: Option<String>,
    pub schema: Schema,
    /// Rendered target-syntax type.
    pub data_type: String,
}

/// A data model, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct CodegenModel {
    /// Name as declared in the document.
    pub name: String,
    /// Name in the target language.
    pub class_name: String,
    /// Escaped description.
    pub description: Option<String>,
    pub vars: Vec<CodegenProperty>,
}

/// A root-level output file declared by a backend.
///
/// The backend only declares that the file must exist; the host asks it to
/// render the content once every record is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportingFile {
    /// Template identifier understood by the declaring backend.
    pub template: String,
    /// Folder relative to the output directory (empty for the root).
    pub folder: String,
    /// File name.
    pub destination: String,
}

impl SupportingFile {
    pub fn new(
        template: impl Into<String>,
        folder: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            folder: folder.into(),
            destination: destination.into(),
        }
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        if self.folder.is_empty() {
            PathBuf::from(&self.destination)
        } else {
            PathBuf::from(&self.folder).join(&self.destination)
        }
    }
}

/// Result of a backend's preprocessing hook.
#[derive(Debug, Clone, PartialEq)]
pub struct Preprocessed {
    /// The caller's properties with defaults and derived values inserted.
    pub properties: PropertyBag,
    /// Resolved base namespace.
    pub namespace: String,
    /// Qualified package of route/handler output.
    pub api_package: String,
    /// Qualified package of model/schema output.
    pub model_package: String,
    pub supporting_files: Vec<SupportingFile>,
}

/// Everything handed to rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    pub properties: PropertyBag,
    pub namespace: String,
    pub api_package: String,
    pub model_package: String,
    /// Post-processed operations.
    pub operations: Vec<CodegenOperation>,
    pub models: Vec<CodegenModel>,
    pub supporting_files: Vec<SupportingFile>,
}
