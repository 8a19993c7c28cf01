//! Type descriptors and data models.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Abstract description of a data shape.
///
/// A [`Schema::Named`] kind is either a primitive kind (`integer`, `string`,
/// `UUID`, ...) or the name of a [`Model`]; which one is decided by the
/// backend's type mapping, not here.
///
/// In documents a named kind is written as a bare string, containers as
/// single-key tables: `"integer"`, `{ array = "Pet" }`, `{ map = "string" }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schema {
    Named(String),
    Array { array: Box<Schema> },
    Map { map: Box<Schema> },
}

impl Schema {
    pub fn named(kind: impl Into<String>) -> Self {
        Schema::Named(kind.into())
    }

    pub fn array(items: Schema) -> Self {
        Schema::Array {
            array: Box::new(items),
        }
    }

    pub fn map(values: Schema) -> Self {
        Schema::Map {
            map: Box::new(values),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Named(kind) => f.write_str(kind),
            Schema::Array { array } => write!(f, "array<{}>", array),
            Schema::Map { map } => write!(f, "map<string, {}>", map),
        }
    }
}

/// A named data model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

/// A property of a [`Model`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub schema: Schema,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}
