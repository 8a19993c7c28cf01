//! Registry of available backends.

use eyre::{Result, eyre};
use indexmap::IndexMap;

use crate::Backend;

/// Backends keyed by name, in registration order.
#[derive(Default)]
pub struct Registry {
    backends: IndexMap<&'static str, Box<dyn Backend>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a backend, replacing any backend with the same name.
    pub fn register(mut self, backend: impl Backend + 'static) -> Self {
        self.backends.insert(backend.name(), Box::new(backend));
        self
    }

    /// Get a backend by name.
    pub fn get(&self, name: &str) -> Result<&dyn Backend> {
        self.backends
            .get(name)
            .map(|b| &**b)
            .ok_or_else(|| {
                eyre!(
                    "unknown generator '{}' (available: {})",
                    name,
                    self.names().join(", ")
                )
            })
    }

    /// Names of all registered backends.
    pub fn names(&self) -> Vec<&'static str> {
        self.backends.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Backend> {
        self.backends.values().map(|b| &**b)
    }
}

#[cfg(test)]
mod tests {
    use apigen_ir::{ApiDocument, Schema};

    use super::*;
    use crate::{BackendKind, Bundle, Preprocessed, PropertyBag, SupportingFile};

    struct Named(&'static str);

    impl Backend for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn help(&self) -> &'static str {
            "test backend"
        }

        fn kind(&self) -> BackendKind {
            BackendKind::Client
        }

        fn preprocess(&self, _: &ApiDocument, _: &PropertyBag) -> Result<Preprocessed> {
            Err(eyre!("not used"))
        }

        fn type_declaration(&self, schema: &Schema) -> String {
            schema.to_string()
        }

        fn render_supporting_file(&self, _: &SupportingFile, _: &Bundle) -> Result<String> {
            Err(eyre!("not used"))
        }
    }

    #[test]
    fn test_registry_lookup() {
        let registry = Registry::new().register(Named("a")).register(Named("b"));

        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.get("b").unwrap().name(), "b");
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_registry_unknown_backend() {
        let registry = Registry::new().register(Named("a"));

        let err = registry.get("missing").err().unwrap();
        assert_eq!(err.to_string(), "unknown generator 'missing' (available: a)");
    }
}
