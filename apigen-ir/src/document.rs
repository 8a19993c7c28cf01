//! Root API document.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Model, Operation};

/// A complete API description, presented once per generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Descriptive metadata.
    #[serde(default)]
    pub info: ApiInfo,
    /// Endpoints in declaration order.
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Named data models, keyed by their declared name.
    #[serde(default)]
    pub models: IndexMap<String, Model>,
}

/// The info block of an API document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub license: Option<License>,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub url: Option<String>,
}
