//! The `clojure-server` backend.

use std::collections::HashSet;

use apigen_codegen::{
    Backend, BackendKind, Bundle, CliOption, CodegenModel, CodegenOperation, Preprocessed,
    PropertyBag, SupportingFile,
    properties::{
        API_PACKAGE, MODEL_PACKAGE, PROJECT_DESCRIPTION, PROJECT_LICENSE_NAME,
        PROJECT_LICENSE_URL, PROJECT_NAME, PROJECT_URL, PROJECT_VERSION,
    },
};
use apigen_ir::{ApiDocument, Schema};
use eyre::{Result, eyre};

use crate::{
    CLOJURE_NAMING, TypeMapping, TypeToken, derive_namespace,
    files::{RoutesClj, SchemaClj},
    route_path,
};

/// Property bag key overriding the derived base namespace.
pub const BASE_NAMESPACE: &str = "baseNamespace";

const DEFAULT_PROJECT_NAME: &str = "openapi-clj-server";
const DEFAULT_PROJECT_VERSION: &str = "1.0.0";

const SCHEMA_TEMPLATE: &str = "schema";
const ROUTES_TEMPLATE: &str = "routes";

/// Generates a Malli schema namespace and a Reitit route table.
#[derive(Debug, Clone, Default)]
pub struct ClojureServer {
    mapping: TypeMapping,
}

impl ClojureServer {
    pub fn new() -> Self {
        Self::with_mapping(TypeMapping::clojure())
    }

    pub fn with_mapping(mapping: TypeMapping) -> Self {
        Self { mapping }
    }

    pub fn mapping(&self) -> &TypeMapping {
        &self.mapping
    }

    /// Resolve a schema into a tagged type token.
    pub fn type_token(&self, schema: &Schema) -> TypeToken {
        TypeToken::resolve(schema, &self.mapping)
    }

    /// Rewrite one operation into route-table form under the given route name.
    fn postprocess_operation(&self, mut op: CodegenOperation, name: &str) -> CodegenOperation {
        op.http_method = format!(":{}", op.http_method.to_lowercase());
        op.nickname = format!(":{}", name);
        op.path = self.escape_quotation_mark(&route_path(&op.path));
        for param in &mut op.all_params {
            param.data_type = self.type_token(&param.schema).to_string();
        }
        op.return_type = op
            .return_schema
            .as_ref()
            .map(|schema| self.type_token(schema).to_string());
        op
    }

    /// License and homepage lines for the file header, single-line each.
    fn header_comments(&self, properties: &PropertyBag) -> Vec<String> {
        let mut comments = Vec::new();
        if let Some(name) = properties.get(PROJECT_LICENSE_NAME) {
            let line = match properties.get(PROJECT_LICENSE_URL) {
                Some(url) => format!("License: {} ({})", name, url),
                None => format!("License: {}", name),
            };
            comments.push(self.escape_text(&line));
        }
        if let Some(url) = properties.get(PROJECT_URL) {
            comments.push(self.escape_text(&format!("Homepage: {}", url)));
        }
        comments
    }
}

impl Backend for ClojureServer {
    fn name(&self) -> &'static str {
        "clojure-server"
    }

    fn help(&self) -> &'static str {
        "Generates a Clojure server library."
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Server
    }

    fn options(&self) -> Vec<CliOption> {
        vec![CliOption::new(
            BASE_NAMESPACE,
            "the base/top namespace (Default: generated from projectName)",
        )]
    }

    fn preprocess(&self, document: &ApiDocument, properties: &PropertyBag) -> Result<Preprocessed> {
        let info = &document.info;
        let mut bag = properties.clone();

        let project_name = bag
            .insert_default(
                PROJECT_NAME,
                info.title.as_deref().unwrap_or(DEFAULT_PROJECT_NAME),
            )
            .to_string();
        bag.insert_default(
            PROJECT_VERSION,
            info.version.as_deref().unwrap_or(DEFAULT_PROJECT_VERSION),
        );
        let description = info
            .description
            .clone()
            .unwrap_or_else(|| format!("Client library of {}", project_name));
        bag.insert_default(PROJECT_DESCRIPTION, description);

        if let Some(license) = &info.license {
            bag.insert_default(PROJECT_LICENSE_NAME, license.name.as_str());
            if let Some(url) = &license.url {
                bag.insert_default(PROJECT_LICENSE_URL, url.as_str());
            }
        }
        if let Some(url) = info.contact.as_ref().and_then(|c| c.url.as_deref()) {
            bag.insert_default(PROJECT_URL, url);
        }

        let namespace = bag
            .insert_default(BASE_NAMESPACE, derive_namespace(&project_name))
            .to_string();
        let api_package = CLOJURE_NAMING.package(&namespace, "routes");
        let model_package = CLOJURE_NAMING.package(&namespace, "schema");
        bag.insert(API_PACKAGE, api_package.as_str());
        bag.insert(MODEL_PACKAGE, model_package.as_str());

        tracing::debug!(%project_name, %namespace, "resolved clojure namespace");

        Ok(Preprocessed {
            properties: bag,
            namespace,
            api_package,
            model_package,
            supporting_files: vec![
                SupportingFile::new(SCHEMA_TEMPLATE, "", "schema.clj"),
                SupportingFile::new(ROUTES_TEMPLATE, "", "routes.clj"),
            ],
        })
    }

    fn type_declaration(&self, schema: &Schema) -> String {
        self.type_token(schema).to_string()
    }

    fn model_name(&self, name: &str) -> String {
        CLOJURE_NAMING.model_name(name)
    }

    fn postprocess_operations(
        &self,
        operations: Vec<CodegenOperation>,
        _models: &[CodegenModel],
    ) -> Vec<CodegenOperation> {
        // Distinct ids can kebab-case to the same route name (`getPet`, `get_pet`).
        let names: Vec<String> = operations
            .iter()
            .map(|op| CLOJURE_NAMING.operation_name(&op.nickname))
            .collect();
        let declared: HashSet<&str> = names.iter().map(String::as_str).collect();
        let mut assigned: HashSet<String> = HashSet::new();

        operations
            .into_iter()
            .zip(&names)
            .map(|(op, base)| {
                let name = unique_route_name(base, &declared, &assigned);
                if name != *base {
                    tracing::debug!(id = %op.operation_id, %name, "renamed colliding route name");
                }
                assigned.insert(name.clone());
                self.postprocess_operation(op, &name)
            })
            .collect()
    }

    fn escape_quotation_mark(&self, input: &str) -> String {
        input.replace('"', "")
    }

    fn escape_unsafe_characters(&self, input: &str) -> String {
        input.replace("(comment", "(_comment")
    }

    fn render_supporting_file(&self, file: &SupportingFile, bundle: &Bundle) -> Result<String> {
        let description = bundle
            .properties
            .get(PROJECT_DESCRIPTION)
            .map(|d| self.escape_text(d));
        let comments = self.header_comments(&bundle.properties);

        match file.template.as_str() {
            SCHEMA_TEMPLATE => Ok(SchemaClj::new(&bundle.model_package)
                .with_doc(description)
                .with_comments(comments)
                .with_models(&bundle.models)
                .render()),
            ROUTES_TEMPLATE => Ok(RoutesClj::new(&bundle.api_package)
                .with_doc(description)
                .with_comments(comments)
                .with_operations(&bundle.operations)
                .render()),
            other => Err(eyre!(
                "{}: unknown supporting file template '{}'",
                self.name(),
                other
            )),
        }
    }
}

/// First of `base`, `base-1`, `base-2`, ... not yet assigned.
///
/// Suffixed candidates also skip names another operation declares itself.
fn unique_route_name(base: &str, declared: &HashSet<&str>, assigned: &HashSet<String>) -> String {
    if !assigned.contains(base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{}-{}", base, n))
        .find(|name| !assigned.contains(name) && !declared.contains(name.as_str()))
        .unwrap_or_else(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use apigen_codegen::CodegenParameter;
    use apigen_ir::{ApiInfo, License, ParamLocation};

    use super::*;

    fn operation(method: &str, path: &str, nickname: &str) -> CodegenOperation {
        CodegenOperation {
            operation_id: nickname.to_string(),
            nickname: nickname.to_string(),
            http_method: method.to_string(),
            path: path.to_string(),
            summary: None,
            notes: None,
            tags: Vec::new(),
            all_params: Vec::new(),
            return_schema: None,
            return_type: None,
        }
    }

    fn parameter(name: &str, schema: Schema) -> CodegenParameter {
        CodegenParameter {
            base_name: name.to_string(),
            location: ParamLocation::Query,
            required: false,
            description: None,
            data_type: schema.to_string(),
            schema,
        }
    }

    #[test]
    fn test_backend_identity() {
        let backend = ClojureServer::new();
        assert_eq!(backend.name(), "clojure-server");
        assert_eq!(backend.help(), "Generates a Clojure server library.");
        assert_eq!(backend.kind(), BackendKind::Server);
        assert_eq!(backend.output_folder(), "generated-code/clojure-server");
        assert_eq!(backend.options()[0].name, "baseNamespace");
    }

    #[test]
    fn test_preprocess_defaults() {
        let backend = ClojureServer::new();
        let pre = backend
            .preprocess(&ApiDocument::default(), &PropertyBag::new())
            .unwrap();

        assert_eq!(pre.properties.get(PROJECT_NAME), Some("openapi-clj-server"));
        assert_eq!(pre.properties.get(PROJECT_VERSION), Some("1.0.0"));
        assert_eq!(
            pre.properties.get(PROJECT_DESCRIPTION),
            Some("Client library of openapi-clj-server")
        );
        assert_eq!(pre.namespace, "openapi-clj-server");
        assert_eq!(pre.properties.get(BASE_NAMESPACE), Some("openapi-clj-server"));
        assert_eq!(pre.api_package, "openapi-clj-server.routes");
        assert_eq!(pre.model_package, "openapi-clj-server.schema");
    }

    #[test]
    fn test_preprocess_supporting_files() {
        let pre = ClojureServer::new()
            .preprocess(&ApiDocument::default(), &PropertyBag::new())
            .unwrap();

        let paths: Vec<_> = pre
            .supporting_files
            .iter()
            .map(|f| f.relative_path().display().to_string())
            .collect();
        assert_eq!(paths, vec!["schema.clj", "routes.clj"]);
    }

    #[test]
    fn test_preprocess_uses_document_info() {
        let document = ApiDocument {
            info: ApiInfo {
                title: Some("Swagger Petstore".to_string()),
                version: Some("2.1.0".to_string()),
                description: None,
                license: Some(License {
                    name: "MIT".to_string(),
                    url: Some("https://opensource.org/licenses/MIT".to_string()),
                }),
                contact: None,
            },
            ..Default::default()
        };
        let pre = ClojureServer::new()
            .preprocess(&document, &PropertyBag::new())
            .unwrap();

        assert_eq!(pre.namespace, "swagger-petstore");
        assert_eq!(pre.properties.get(PROJECT_VERSION), Some("2.1.0"));
        assert_eq!(
            pre.properties.get(PROJECT_DESCRIPTION),
            Some("Client library of Swagger Petstore")
        );
        assert_eq!(pre.properties.get(PROJECT_LICENSE_NAME), Some("MIT"));
        assert!(!pre.properties.contains(PROJECT_URL));
    }

    #[test]
    fn test_preprocess_base_namespace_override() {
        let properties: PropertyBag = [(PROJECT_NAME, "My Project"), (BASE_NAMESPACE, "acme.pets")]
            .into_iter()
            .collect();
        let pre = ClojureServer::new()
            .preprocess(&ApiDocument::default(), &properties)
            .unwrap();

        assert_eq!(pre.namespace, "acme.pets");
        assert_eq!(pre.api_package, "acme.pets.routes");
        assert_eq!(pre.model_package, "acme.pets.schema");
        assert_eq!(pre.properties.get(PROJECT_NAME), Some("My Project"));
    }

    #[test]
    fn test_preprocess_is_idempotent() {
        let backend = ClojureServer::new();
        let document = ApiDocument::default();

        let first = backend.preprocess(&document, &PropertyBag::new()).unwrap();
        let second = backend.preprocess(&document, &first.properties).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_preprocess_keeps_caller_entries() {
        let properties: PropertyBag = [("custom", "value"), (PROJECT_VERSION, "3.0.0")]
            .into_iter()
            .collect();
        let pre = ClojureServer::new()
            .preprocess(&ApiDocument::default(), &properties)
            .unwrap();

        for (key, value) in properties.iter() {
            assert_eq!(pre.properties.get(key), Some(value));
        }
    }

    #[test]
    fn test_postprocess_method_and_path() {
        let ops = ClojureServer::new()
            .postprocess_operations(vec![operation("GET", "/pets/{id}", "getPetById")], &[]);

        assert_eq!(ops[0].http_method, ":get");
        assert_eq!(ops[0].path, "/pets/:id");
        assert_eq!(ops[0].nickname, ":get-pet-by-id");
    }

    #[test]
    fn test_postprocess_quoted_path() {
        let ops = ClojureServer::new()
            .postprocess_operations(vec![operation("GET", "/pets/\"x", "getPet")], &[]);
        assert_eq!(ops[0].path, "/pets/x");
    }

    #[test]
    fn test_postprocess_colliding_names() {
        let ops = ClojureServer::new().postprocess_operations(
            vec![
                operation("GET", "/pets", "getPet"),
                operation("GET", "/animals", "get_pet"),
                operation("GET", "/animals/{id}", "get-pet-1"),
                operation("GET", "/beasts", "GetPet"),
            ],
            &[],
        );
        let names: Vec<_> = ops.iter().map(|op| op.nickname.as_str()).collect();

        assert_eq!(names, vec![":get-pet", ":get-pet-2", ":get-pet-1", ":get-pet-3"]);
    }

    #[test]
    fn test_postprocess_types() {
        let mut op = operation("POST", "/pets", "createPets");
        op.all_params = vec![
            parameter("limit", Schema::named("integer")),
            parameter("pet", Schema::named("NewPet")),
            parameter("tags", Schema::array(Schema::named("string"))),
        ];
        op.return_schema = Some(Schema::array(Schema::named("Pet")));

        let ops = ClojureServer::new().postprocess_operations(vec![op], &[]);
        let types: Vec<_> = ops[0].all_params.iter().map(|p| p.data_type.as_str()).collect();

        assert_eq!(types, vec!["int?", ":new-pet", "[:sequential string?]"]);
        assert_eq!(ops[0].return_type.as_deref(), Some("[:sequential :pet]"));
    }

    #[test]
    fn test_postprocess_without_return_type() {
        let mut op = operation("DELETE", "/pets/{id}", "deletePet");
        op.return_type = Some("stale".to_string());

        let ops = ClojureServer::new().postprocess_operations(vec![op], &[]);
        assert_eq!(ops[0].http_method, ":delete");
        assert_eq!(ops[0].return_type, None);
    }

    #[test]
    fn test_type_declaration() {
        let backend = ClojureServer::new();
        for (kind, token) in backend.mapping().iter() {
            assert_eq!(backend.type_declaration(&Schema::named(kind)), token);
        }
        assert_eq!(
            backend.type_declaration(&Schema::array(Schema::named("string"))),
            "[:sequential string?]"
        );
        assert_eq!(backend.type_declaration(&Schema::named("Pet")), ":pet");
    }

    #[test]
    fn test_model_name() {
        assert_eq!(ClojureServer::new().model_name("PetStatus"), "pet-status");
    }

    #[test]
    fn test_escape_quotation_mark() {
        assert_eq!(ClojureServer::new().escape_quotation_mark("a\"b"), "ab");
    }

    #[test]
    fn test_escape_unsafe_characters() {
        let escaped = ClojureServer::new().escape_unsafe_characters("(comment foo)");
        assert!(!escaped.starts_with("(comment"));
        assert!(escaped.contains("foo)"));
        assert_eq!(escaped, "(_comment foo)");
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            ClojureServer::new().escape_text("Say \"hi\"\n(comment x)"),
            "Say hi (_comment x)"
        );
    }

    #[test]
    fn test_header_comments() {
        let backend = ClojureServer::new();
        let properties: PropertyBag = [
            (PROJECT_LICENSE_NAME, "Apache\n2.0"),
            (PROJECT_LICENSE_URL, "https://www.apache.org/licenses/LICENSE-2.0"),
            (PROJECT_URL, "https://petstore.example.com"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            backend.header_comments(&properties),
            vec![
                "License: Apache 2.0 (https://www.apache.org/licenses/LICENSE-2.0)",
                "Homepage: https://petstore.example.com",
            ]
        );
        assert!(backend.header_comments(&PropertyBag::new()).is_empty());
    }

    #[test]
    fn test_unknown_template() {
        let backend = ClojureServer::new();
        let pre = backend
            .preprocess(&ApiDocument::default(), &PropertyBag::new())
            .unwrap();
        let bundle = Bundle {
            properties: pre.properties,
            namespace: pre.namespace,
            api_package: pre.api_package,
            model_package: pre.model_package,
            operations: Vec::new(),
            models: Vec::new(),
            supporting_files: pre.supporting_files,
        };

        let err = backend
            .render_supporting_file(&SupportingFile::new("project", "", "project.clj"), &bundle)
            .unwrap_err();
        assert!(err.to_string().contains("unknown supporting file template 'project'"));
    }
}
