//! Primitive kind to Malli predicate table.

use indexmap::IndexMap;

/// Fixed lookup from abstract primitive kind to target predicate token.
///
/// Built once with the backend and never mutated afterwards. A kind that is
/// absent is a model reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMapping {
    entries: IndexMap<&'static str, &'static str>,
}

impl TypeMapping {
    /// The Clojure predicate table.
    pub fn clojure() -> Self {
        let entries = [
            ("integer", "int?"),
            ("long", "int?"),
            ("short", "int?"),
            ("number", "float?"),
            ("float", "float?"),
            ("double", "float?"),
            ("array", "list?"),
            ("map", "map?"),
            ("boolean", "boolean?"),
            ("string", "string?"),
            ("char", "char?"),
            ("date", "string?"),
            ("DateTime", "string?"),
            ("URI", "string?"),
            ("UUID", "uuid?"),
        ]
        .into_iter()
        .collect();

        Self { entries }
    }

    pub fn get(&self, kind: &str) -> Option<&'static str> {
        self.entries.get(kind).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        Self::clojure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_kinds() {
        let mapping = TypeMapping::clojure();
        for kind in ["integer", "long", "short"] {
            assert_eq!(mapping.get(kind), Some("int?"), "{kind}");
        }
        for kind in ["number", "float", "double"] {
            assert_eq!(mapping.get(kind), Some("float?"), "{kind}");
        }
    }

    #[test]
    fn test_string_like_kinds() {
        let mapping = TypeMapping::clojure();
        for kind in ["string", "date", "DateTime", "URI"] {
            assert_eq!(mapping.get(kind), Some("string?"), "{kind}");
        }
        assert_eq!(mapping.get("char"), Some("char?"));
        assert_eq!(mapping.get("UUID"), Some("uuid?"));
    }

    #[test]
    fn test_container_and_boolean_kinds() {
        let mapping = TypeMapping::clojure();
        assert_eq!(mapping.get("array"), Some("list?"));
        assert_eq!(mapping.get("map"), Some("map?"));
        assert_eq!(mapping.get("boolean"), Some("boolean?"));
    }

    #[test]
    fn test_unknown_kind_is_absent() {
        let mapping = TypeMapping::clojure();
        assert_eq!(mapping.get("Pet"), None);
        assert_eq!(mapping.get("uuid"), None);
        assert_eq!(mapping.iter().count(), 15);
    }
}
