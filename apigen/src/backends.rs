//! Backends shipped with the binary.

use apigen_codegen::Registry;
use apigen_codegen_clojure::ClojureServer;

/// Build the registry of every built-in backend.
pub fn registry() -> Registry {
    Registry::new().register(ClojureServer::new())
}
