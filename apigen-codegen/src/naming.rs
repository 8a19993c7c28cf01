//! Naming conventions for different target languages.

/// Language-specific naming conventions.
///
/// Defines how models, operations and namespaces are named in the target
/// language.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name (e.g., "PetStatus" -> "pet-status")
    pub model_to_name: fn(&str) -> String,
    /// Transform an operation id (e.g., "getPetById" -> "get-pet-by-id")
    pub operation_to_name: fn(&str) -> String,
    /// Derive a namespace from a human-readable project name
    pub project_to_namespace: fn(&str) -> String,
    /// Separator between namespace segments (e.g., "." or "::")
    pub namespace_separator: &'static str,
}

impl NamingConvention {
    pub fn model_name(&self, name: &str) -> String {
        (self.model_to_name)(name)
    }

    pub fn operation_name(&self, name: &str) -> String {
        (self.operation_to_name)(name)
    }

    pub fn namespace(&self, project_name: &str) -> String {
        (self.project_to_namespace)(project_name)
    }

    /// Append a segment to a namespace.
    pub fn package(&self, namespace: &str, segment: &str) -> String {
        format!("{}{}{}", namespace, self.namespace_separator, segment)
    }
}
