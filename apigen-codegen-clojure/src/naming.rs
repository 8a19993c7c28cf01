//! Clojure-specific naming conventions.

use apigen_codegen::NamingConvention;
use apigen_core::to_kebab_case;

/// Clojure naming conventions.
pub const CLOJURE_NAMING: NamingConvention = NamingConvention {
    model_to_name: to_kebab_case,
    operation_to_name: to_kebab_case,
    project_to_namespace: to_kebab_case,
    namespace_separator: ".",
};

/// Derive a namespace from a human-readable project name.
pub fn derive_namespace(project_name: &str) -> String {
    CLOJURE_NAMING.namespace(project_name)
}

/// Lower-kebab-case an identifier for use as a Clojure symbol or keyword.
pub fn to_identifier(name: &str) -> String {
    to_kebab_case(name)
}

/// Rewrite `{name}` placeholders into route-matching `:name` segments.
///
/// Placeholders are assumed well formed.
pub fn route_path(path: &str) -> String {
    path.replace('{', ":").replace('}', "")
}
