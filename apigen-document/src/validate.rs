//! Structural validation of API documents.
//!
//! Backends rewrite path templates textually and key handlers by operation
//! id, so both must be well formed before a document reaches them.

use std::collections::{HashMap, HashSet};

use apigen_ir::{ApiDocument, HttpMethod, Operation, ParamLocation};

use crate::{Result, error::SourceContext};

/// Extract the placeholder names of a path template.
///
/// Returns the reason when the template is malformed: a path that does not
/// start with `/`, contains whitespace or `"`, has nested or unbalanced
/// braces, or an empty placeholder.
pub fn path_placeholders(path: &str) -> std::result::Result<Vec<&str>, &'static str> {
    if !path.starts_with('/') {
        return Err("path must start with '/'");
    }
    if path.contains(|c: char| c.is_whitespace() || c == '"') {
        return Err("path may not contain whitespace or '\"'");
    }

    let mut names = Vec::new();
    let mut open: Option<usize> = None;

    for (i, c) in path.char_indices() {
        match (c, open) {
            ('{', Some(_)) => return Err("nested '{' inside a placeholder"),
            ('{', None) => open = Some(i),
            ('}', None) => return Err("'}' without a matching '{'"),
            ('}', Some(start)) => {
                let name = &path[start + 1..i];
                if name.is_empty() {
                    return Err("empty placeholder '{}'");
                }
                names.push(name);
                open = None;
            }
            _ => {}
        }
    }

    if open.is_some() {
        return Err("unterminated placeholder");
    }
    Ok(names)
}

/// A path template with its placeholder names erased (`/pets/{}`).
///
/// Templates differing only in placeholder names match the same requests.
fn route_shape(path: &str) -> String {
    let mut shape = String::with_capacity(path.len());
    let mut in_placeholder = false;
    for c in path.chars() {
        match c {
            '{' => {
                in_placeholder = true;
                shape.push_str("{}");
            }
            '}' => in_placeholder = false,
            _ if !in_placeholder => shape.push(c),
            _ => {}
        }
    }
    shape
}

/// Validate the document after parsing.
pub(crate) fn validate_document(document: &ApiDocument, ctx: &SourceContext) -> Result<()> {
    let mut seen_ids = HashSet::new();
    // route -> (path as written, position among operations with that text)
    let mut seen_routes: HashMap<(HttpMethod, String), (&str, usize)> = HashMap::new();
    let mut path_counts: HashMap<&str, usize> = HashMap::new();

    for operation in &document.operations {
        if let Some(id) = &operation.operation_id {
            if id.trim().is_empty() {
                return Err(ctx.validation_error(format!(
                    "operation {} {} has an empty id",
                    operation.method, operation.path
                )));
            }
            if !seen_ids.insert(id.as_str()) {
                return Err(ctx.duplicate_operation_error(id));
            }
        }
        validate_operation_path(operation, ctx)?;

        let path = operation.path.as_str();
        let count = path_counts.entry(path).or_default();
        let site = (path, *count);
        *count += 1;

        let route = (operation.method, route_shape(path));
        if let Some(&first) = seen_routes.get(&route) {
            return Err(ctx.duplicate_route_error(operation.method.as_str(), first, site));
        }
        seen_routes.insert(route, site);
    }

    Ok(())
}

fn validate_operation_path(operation: &Operation, ctx: &SourceContext) -> Result<()> {
    let placeholders = path_placeholders(&operation.path)
        .map_err(|reason| ctx.invalid_path_error(&operation.path, reason))?;

    for param in &operation.parameters {
        if param.location == ParamLocation::Path && !placeholders.contains(&param.name.as_str()) {
            return Err(ctx.missing_placeholder_error(&param.name, &operation.path));
        }
    }

    Ok(())
}
