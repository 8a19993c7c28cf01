//! Target-syntax type tokens.

use std::fmt;

use apigen_ir::Schema;

use crate::{TypeMapping, to_identifier};

/// A Malli type expression.
///
/// Whether a type is a primitive predicate or a schema reference is decided
/// when the token is built, so rendering never has to guess from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeToken {
    /// A predicate from the type mapping (`int?`).
    Predicate(&'static str),
    /// A reference to a model, already kebab-cased (`pet` renders `:pet`).
    Reference(String),
    /// `[:sequential <inner>]`
    Sequential(Box<TypeToken>),
    /// `[:map-of :string <inner>]`
    MapOf(Box<TypeToken>),
}

impl TypeToken {
    /// Resolve a schema against a type mapping, depth first.
    pub fn resolve(schema: &Schema, mapping: &TypeMapping) -> Self {
        match schema {
            Schema::Array { array } => {
                TypeToken::Sequential(Box::new(Self::resolve(array, mapping)))
            }
            Schema::Map { map } => TypeToken::MapOf(Box::new(Self::resolve(map, mapping))),
            Schema::Named(kind) => match mapping.get(kind) {
                Some(predicate) => TypeToken::Predicate(predicate),
                None => TypeToken::Reference(to_identifier(kind)),
            },
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeToken::Predicate(predicate) => f.write_str(predicate),
            TypeToken::Reference(name) => write!(f, ":{}", name),
            TypeToken::Sequential(inner) => write!(f, "[:sequential {}]", inner),
            TypeToken::MapOf(inner) => write!(f, "[:map-of :string {}]", inner),
        }
    }
}
