use std::path::{Path, PathBuf};

use apigen_ir::ApiDocument;

use crate::{DocumentFormat, Error, Result, parse_document};

/// An API document file with both raw content and parsed document.
pub struct ApiFile {
    path: PathBuf,
    content: String,
    format: DocumentFormat,
    document: ApiDocument,
}

impl ApiFile {
    /// Open and parse an API document, picking the format from the extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let format = DocumentFormat::from_path(&path);
        let filename = path.display().to_string();
        let document = parse_document(&content, &filename, format)?;

        Ok(Self {
            path,
            content,
            format,
            document,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the detected format.
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Get the parsed document.
    pub fn document(&self) -> &ApiDocument {
        &self.document
    }
}
