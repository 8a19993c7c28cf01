//! Supporting files of the Clojure server backend.

use apigen_codegen::CodeBuilder;

mod routes_clj;
mod schema_clj;

pub use routes_clj::RoutesClj;
pub use schema_clj::SchemaClj;

/// Header comment written at the top of every generated file.
pub const GENERATED_HEADER: &str = "Generated by apigen. Do not edit.";

/// Start a file: header comments and `ns` form.
///
/// `comments` are extra header lines (license, homepage).
fn file_start(namespace: &str, doc: Option<&str>, comments: &[String]) -> CodeBuilder {
    let builder = CodeBuilder::lisp()
        .comment(";;", GENERATED_HEADER)
        .each(comments, |b, line| b.comment(";;", line));
    match doc {
        Some(doc) => builder.block(&format!("(ns {}", namespace), |b| {
            b.line(&format!("\"{}\")", doc))
        }),
        None => builder.line(&format!("(ns {})", namespace)),
    }
}

/// A Malli `:map` entry: `[:name {:optional true} int?]`.
fn map_entry(name: &str, required: bool, description: Option<&str>, data_type: &str) -> String {
    let mut props = Vec::new();
    if !required {
        props.push(":optional true".to_string());
    }
    if let Some(description) = description {
        props.push(format!(":description \"{}\"", description));
    }

    if props.is_empty() {
        format!("[:{} {}]", name, data_type)
    } else {
        format!("[:{} {{{}}} {}]", name, props.join(" "), data_type)
    }
}
