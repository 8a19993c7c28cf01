use apigen_codegen::{CodeBuilder, CodegenOperation, CodegenParameter};
use apigen_ir::ParamLocation;
use indexmap::IndexMap;

use super::{file_start, map_entry};

/// Locations rendered as `[:map ...]` coercion schemas, in output order.
const MAP_LOCATIONS: [ParamLocation; 5] = [
    ParamLocation::Path,
    ParamLocation::Query,
    ParamLocation::Header,
    ParamLocation::Cookie,
    ParamLocation::Form,
];

/// The `routes.clj` namespace: a Reitit route table.
///
/// Operations sharing a path are grouped under one route, in order of first
/// appearance. Operations must already be post-processed.
pub struct RoutesClj<'a> {
    namespace: &'a str,
    doc: Option<String>,
    comments: Vec<String>,
    operations: &'a [CodegenOperation],
}

impl<'a> RoutesClj<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self {
            namespace,
            doc: None,
            comments: Vec::new(),
            operations: &[],
        }
    }

    pub fn with_doc(mut self, doc: Option<String>) -> Self {
        self.doc = doc;
        self
    }

    pub fn with_comments(mut self, comments: Vec<String>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_operations(mut self, operations: &'a [CodegenOperation]) -> Self {
        self.operations = operations;
        self
    }

    pub fn render(&self) -> String {
        let mut routes: IndexMap<&str, Vec<&CodegenOperation>> = IndexMap::new();
        for op in self.operations {
            routes.entry(op.path.as_str()).or_default().push(op);
        }

        file_start(self.namespace, self.doc.as_deref(), &self.comments)
            .blank()
            .block("(def routes", |b| {
                if routes.is_empty() {
                    return b.line("[])");
                }

                let last = routes.len() - 1;
                b.each(routes.iter().enumerate(), |b, (i, (path, ops))| {
                    render_route(b, path, ops, i == 0, i == last)
                })
            })
            .build()
    }
}

fn render_route(
    mut builder: CodeBuilder,
    path: &str,
    ops: &[&CodegenOperation],
    first: bool,
    last: bool,
) -> CodeBuilder {
    let open = if first { "[[" } else { " [" };
    builder = builder.line(&format!("{}\"{}\"", open, path));

    let last_op = ops.len().saturating_sub(1);
    for (i, op) in ops.iter().enumerate() {
        builder = if i == 0 {
            builder.line(&format!("  {{{}", op.http_method))
        } else {
            builder.line(&format!("   {}", op.http_method))
        };

        let mut close = String::from("}");
        if i == last_op {
            close.push_str("}]");
            if last {
                close.push_str("])");
            }
        }

        let fields = operation_fields(op);
        let last_field = fields.len() - 1;
        for (j, field) in fields.iter().enumerate() {
            let open = if j == 0 { "   {" } else { "    " };
            let close = if j == last_field { close.as_str() } else { "" };
            builder = builder.line(&format!("{}{}{}", open, field, close));
        }
    }

    builder
}

/// Route data entries of one operation; `:name` always comes first.
fn operation_fields(op: &CodegenOperation) -> Vec<String> {
    let mut fields = vec![format!(":name {}", op.nickname)];
    if let Some(summary) = &op.summary {
        fields.push(format!(":summary \"{}\"", summary));
    }
    if let Some(notes) = &op.notes {
        fields.push(format!(":description \"{}\"", notes));
    }
    if let Some(parameters) = parameters(op) {
        fields.push(format!(":parameters {}", parameters));
    }
    let response = match &op.return_type {
        Some(data_type) => format!("{{:body {}}}", data_type),
        None => "{}".to_string(),
    };
    fields.push(format!(":responses {{200 {}}}", response));
    fields
}

/// Ring lower-cases request header names before coercion.
fn parameter_key(param: &CodegenParameter) -> String {
    match param.location {
        ParamLocation::Header => param.base_name.to_lowercase(),
        _ => param.base_name.clone(),
    }
}

fn parameter_entry(param: &CodegenParameter) -> String {
    map_entry(
        &parameter_key(param),
        param.required,
        param.description.as_deref(),
        &param.data_type,
    )
}

/// The `:parameters` map, or `None` when the operation takes none.
fn parameters(op: &CodegenOperation) -> Option<String> {
    let mut parts: Vec<String> = MAP_LOCATIONS
        .iter()
        .filter_map(|&location| {
            let entries: Vec<String> = op.params_in(location).map(parameter_entry).collect();
            (!entries.is_empty())
                .then(|| format!(":{} [:map {}]", location.as_str(), entries.join(" ")))
        })
        .collect();

    if let Some(body) = op.params_in(ParamLocation::Body).next() {
        parts.push(format!(":body {}", body.data_type));
    }

    (!parts.is_empty()).then(|| format!("{{{}}}", parts.join(" ")))
}

#[cfg(test)]
mod tests {
    use apigen_ir::Schema;

    use super::*;

    fn operation(method: &str, path: &str, name: &str) -> CodegenOperation {
        CodegenOperation {
            operation_id: name.to_string(),
            nickname: format!(":{}", name),
            http_method: format!(":{}", method),
            path: path.to_string(),
            summary: None,
            notes: None,
            tags: Vec::new(),
            all_params: Vec::new(),
            return_schema: None,
            return_type: None,
        }
    }

    fn param(
        name: &str,
        location: ParamLocation,
        required: bool,
        data_type: &str,
    ) -> CodegenParameter {
        CodegenParameter {
            base_name: name.to_string(),
            location,
            required,
            description: None,
            schema: Schema::named("string"),
            data_type: data_type.to_string(),
        }
    }

    #[test]
    fn test_render_empty_routes() {
        let code = RoutesClj::new("petstore.routes").render();
        assert_eq!(
            code,
            ";; Generated by apigen. Do not edit.\n(ns petstore.routes)\n\n(def routes\n  [])\n"
        );
    }

    #[test]
    fn test_render_single_route() {
        let mut op = operation("get", "/pets/:id", "show-pet");
        op.all_params = vec![param("id", ParamLocation::Path, true, "int?")];
        op.return_type = Some(":pet".to_string());

        let code = RoutesClj::new("petstore.routes")
            .with_operations(std::slice::from_ref(&op))
            .render();

        assert_eq!(
            code,
            r#";; Generated by apigen. Do not edit.
(ns petstore.routes)

(def routes
  [["/pets/:id"
    {:get
     {:name :show-pet
      :parameters {:path [:map [:id int?]]}
      :responses {200 {:body :pet}}}}]])
"#
        );
    }

    #[test]
    fn test_groups_operations_by_path() {
        let ops = vec![
            operation("get", "/pets", "list-pets"),
            operation("get", "/pets/:id", "show-pet"),
            operation("post", "/pets", "create-pet"),
        ];

        let code = RoutesClj::new("petstore.routes").with_operations(&ops).render();

        assert_eq!(
            code,
            r#";; Generated by apigen. Do not edit.
(ns petstore.routes)

(def routes
  [["/pets"
    {:get
     {:name :list-pets
      :responses {200 {}}}
     :post
     {:name :create-pet
      :responses {200 {}}}}]
   ["/pets/:id"
    {:get
     {:name :show-pet
      :responses {200 {}}}}]])
"#
        );
    }

    #[test]
    fn test_parameters_by_location() {
        let mut op = operation("post", "/pets", "create-pet");
        op.all_params = vec![
            param("pet", ParamLocation::Body, true, ":new-pet"),
            param("X-Request-Id", ParamLocation::Header, false, "string?"),
            param("dryRun", ParamLocation::Query, false, "boolean?"),
        ];

        assert_eq!(
            parameters(&op).as_deref(),
            Some(
                "{:query [:map [:dryRun {:optional true} boolean?]] \
                 :header [:map [:x-request-id {:optional true} string?]] \
                 :body :new-pet}"
            )
        );
        assert_eq!(parameters(&operation("get", "/pets", "list-pets")), None);
    }

    #[test]
    fn test_header_names_are_lower_cased() {
        let mut op = operation("get", "/pets", "list-pets");
        op.all_params = vec![
            param("X-Api-Key", ParamLocation::Header, true, "string?"),
            param("pageSize", ParamLocation::Query, true, "int?"),
        ];

        assert_eq!(
            parameters(&op).as_deref(),
            Some("{:query [:map [:pageSize int?]] :header [:map [:x-api-key string?]]}")
        );
    }

    #[test]
    fn test_operation_fields() {
        let mut op = operation("get", "/pets", "list-pets");
        op.summary = Some("List all pets".to_string());
        op.notes = Some("Paged".to_string());
        op.return_type = Some("[:sequential :pet]".to_string());

        assert_eq!(
            operation_fields(&op),
            vec![
                ":name :list-pets",
                ":summary \"List all pets\"",
                ":description \"Paged\"",
                ":responses {200 {:body [:sequential :pet]}}",
            ]
        );
    }
}
