//! Document parsing from strings.

use std::path::Path;

use apigen_ir::ApiDocument;

use crate::{Result, error::SourceContext, validate::validate_document};

/// Serialization format of an API document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Toml,
        }
    }
}

/// Parse and validate a document, using `filename` for error reporting.
pub fn parse_document(
    content: &str,
    filename: &str,
    format: DocumentFormat,
) -> Result<ApiDocument> {
    let source_ctx = SourceContext::new(content, filename);
    let document: ApiDocument = match format {
        DocumentFormat::Toml => {
            toml::from_str(content).map_err(|e| source_ctx.toml_error(e))?
        }
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?
        }
    };
    validate_document(&document, &source_ctx)?;

    tracing::debug!(
        filename,
        operations = document.operations.len(),
        models = document.models.len(),
        "parsed API document"
    );
    Ok(document)
}
