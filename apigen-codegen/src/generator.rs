//! The generation host.

use std::{collections::HashSet, path::Path};

use apigen_core::{File, Overwrite, WriteResult, to_camel_case};
use apigen_ir::{ApiDocument, HttpMethod, Operation};
use eyre::{Result, WrapErr};

use crate::{
    Backend, Bundle, CodegenModel, CodegenOperation, CodegenParameter, CodegenProperty,
    PropertyBag,
};

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were written
    pub written: Vec<String>,
    /// Files left untouched because they already existed
    pub skipped: Vec<String>,
}

/// Drives a [`Backend`] over one API document.
///
/// The extension points are called in a fixed order:
/// 1. [`Backend::preprocess`]
/// 2. models are built with [`Backend::model_name`] and [`Backend::type_declaration`]
/// 3. operations are built with [`Backend::type_declaration`]
/// 4. [`Backend::postprocess_operations`]
/// 5. [`Backend::render_supporting_file`] for every declared file
///
/// Free text is passed through [`Backend::escape_text`] as records are built.
pub struct Generator<'a> {
    backend: &'a dyn Backend,
    document: &'a ApiDocument,
    properties: PropertyBag,
    skip_overwrite: bool,
}

impl<'a> Generator<'a> {
    pub fn new(backend: &'a dyn Backend, document: &'a ApiDocument) -> Self {
        Self {
            backend,
            document,
            properties: PropertyBag::new(),
            skip_overwrite: false,
        }
    }

    /// Seed the property bag.
    pub fn with_properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    /// Leave files that already exist untouched.
    pub fn skip_overwrite(mut self, skip: bool) -> Self {
        self.skip_overwrite = skip;
        self
    }

    /// Run every hook up to rendering.
    pub fn bundle(&self) -> Result<Bundle> {
        let backend = self.backend;

        let pre = backend
            .preprocess(self.document, &self.properties)
            .wrap_err_with(|| format!("{}: preprocessing failed", backend.name()))?;
        tracing::debug!(
            backend = backend.name(),
            namespace = %pre.namespace,
            files = pre.supporting_files.len(),
            "preprocessed document"
        );

        let models = self.build_models();
        let operations = self.build_operations();
        tracing::debug!(
            models = models.len(),
            operations = operations.len(),
            "built intermediate records"
        );

        let operations = backend.postprocess_operations(operations, &models);

        Ok(Bundle {
            properties: pre.properties,
            namespace: pre.namespace,
            api_package: pre.api_package,
            model_package: pre.model_package,
            operations,
            models,
            supporting_files: pre.supporting_files,
        })
    }

    /// Render every file without writing to disk
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let bundle = self.bundle()?;
        bundle
            .supporting_files
            .iter()
            .map(|file| {
                let content = self
                    .backend
                    .render_supporting_file(file, &bundle)
                    .wrap_err_with(|| format!("failed to render '{}'", file.destination))?;
                Ok(PreviewFile {
                    path: file.relative_path().display().to_string(),
                    content,
                })
            })
            .collect()
    }

    /// Render and write every file into the output directory
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let overwrite = if self.skip_overwrite {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };

        let mut result = GenerateResult::default();
        for preview in self.preview()? {
            let path = output_dir.join(&preview.path);
            let outcome = File::new(&path, preview.content)
                .overwrite(overwrite)
                .write()?;

            match outcome {
                WriteResult::Written => {
                    tracing::info!(path = %path.display(), "wrote file");
                    result.written.push(preview.path);
                }
                WriteResult::Skipped => result.skipped.push(preview.path),
            }
        }

        Ok(result)
    }

    fn build_models(&self) -> Vec<CodegenModel> {
        let backend = self.backend;
        self.document
            .models
            .iter()
            .map(|(name, model)| CodegenModel {
                name: name.clone(),
                class_name: backend.model_name(name),
                description: model.description.as_deref().map(|d| backend.escape_text(d)),
                vars: model
                    .properties
                    .iter()
                    .map(|(prop_name, prop)| CodegenProperty {
                        base_name: prop_name.clone(),
                        required: prop.required,
                        description: prop.description.as_deref().map(|d| backend.escape_text(d)),
                        schema: prop.schema.clone(),
                        data_type: backend.type_declaration(&prop.schema),
                    })
                    .collect(),
            })
            .collect()
    }

    fn build_operations(&self) -> Vec<CodegenOperation> {
        let backend = self.backend;
        let mut taken: HashSet<String> = self
            .document
            .operations
            .iter()
            .filter_map(|op| op.operation_id.clone())
            .collect();

        self.document
            .operations
            .iter()
            .map(|op| {
                let operation_id = match &op.operation_id {
                    Some(id) => id.clone(),
                    None => unique_operation_id(op, &mut taken),
                };

                CodegenOperation {
                    nickname: operation_id.clone(),
                    operation_id,
                    http_method: op.method.as_str().to_string(),
                    path: op.path.clone(),
                    summary: op.summary.as_deref().map(|s| backend.escape_text(s)),
                    notes: op.description.as_deref().map(|s| backend.escape_text(s)),
                    tags: op.tags.clone(),
                    all_params: op
                        .parameters
                        .iter()
                        .map(|param| CodegenParameter {
                            base_name: param.name.clone(),
                            location: param.location,
                            required: param.required,
                            description: param
                                .description
                                .as_deref()
                                .map(|d| backend.escape_text(d)),
                            schema: param.schema.clone(),
                            data_type: backend.type_declaration(&param.schema),
                        })
                        .collect(),
                    return_schema: op.returns.clone(),
                    return_type: op.returns.as_ref().map(|s| backend.type_declaration(s)),
                }
            })
            .collect()
    }
}

/// Generate an operation id from the path and verb (e.g., `GET /pets/{id}` -> `petsIdGet`).
pub fn operation_id_from_path(path: &str, method: HttpMethod) -> String {
    let words: Vec<&str> = path
        .split('/')
        .map(|segment| segment.trim_matches(|c| c == '{' || c == '}'))
        .filter(|segment| !segment.is_empty())
        .chain(std::iter::once(method.as_str()))
        .collect();
    to_camel_case(&words.join(" "))
}

/// Generate an operation id that no other operation uses.
fn unique_operation_id(op: &Operation, taken: &mut HashSet<String>) -> String {
    let base = operation_id_from_path(&op.path, op.method);
    let mut candidate = base.clone();
    let mut counter = 0;
    while taken.contains(&candidate) {
        counter += 1;
        candidate = format!("{}_{}", base, counter);
    }
    tracing::debug!(
        path = %op.path,
        method = %op.method,
        id = %candidate,
        "generated operation id"
    );
    taken.insert(candidate.clone());
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_id_from_path() {
        assert_eq!(operation_id_from_path("/pets/{id}", HttpMethod::Get), "petsIdGet");
        assert_eq!(
            operation_id_from_path("/store/inventory", HttpMethod::Get),
            "storeInventoryGet"
        );
        assert_eq!(operation_id_from_path("/pet-types", HttpMethod::Post), "petTypesPost");
        assert_eq!(operation_id_from_path("/", HttpMethod::Delete), "delete");
    }

    #[test]
    fn test_unique_operation_id() {
        let op = Operation {
            operation_id: None,
            method: HttpMethod::Get,
            path: "/pets".to_string(),
            summary: None,
            description: None,
            tags: Vec::new(),
            parameters: Vec::new(),
            returns: None,
        };
        let mut taken = HashSet::from(["petsGet".to_string()]);

        assert_eq!(unique_operation_id(&op, &mut taken), "petsGet_1");
        assert_eq!(unique_operation_id(&op, &mut taken), "petsGet_2");
    }
}
