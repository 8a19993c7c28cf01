use apigen_codegen::{CodeBuilder, CodegenModel, CodegenProperty};

use super::{file_start, map_entry};

/// The `schema.clj` namespace: one Malli schema per model plus a registry.
pub struct SchemaClj<'a> {
    namespace: &'a str,
    doc: Option<String>,
    comments: Vec<String>,
    models: &'a [CodegenModel],
}

impl<'a> SchemaClj<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self {
            namespace,
            doc: None,
            comments: Vec::new(),
            models: &[],
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

    pub fn with_models(mut self, models: &'a [CodegenModel]) -> Self {
        self.models = models;
        self
    }

    pub fn render(&self) -> String {
        let builder = file_start(self.namespace, self.doc.as_deref(), &self.comments)
            .each(self.models, |b, model| render_model(b.blank(), model))
            .blank();

        render_registry(builder, self.models).build()
    }
}

fn property_entry(prop: &CodegenProperty) -> String {
    map_entry(
        &prop.base_name,
        prop.required,
        prop.description.as_deref(),
        &prop.data_type,
    )
}

fn render_model(builder: CodeBuilder, model: &CodegenModel) -> CodeBuilder {
    builder.block(&format!("(def {}", model.class_name), |b| {
        let b = match &model.description {
            Some(description) => b.line(&format!("\"{}\"", description)),
            None => b,
        };

        if model.vars.is_empty() {
            return b.line("[:map])");
        }

        let last = model.vars.len() - 1;
        b.line("[:map").each(model.vars.iter().enumerate(), |b, (i, prop)| {
            let close = if i == last { "])" } else { "" };
            b.line(&format!(" {}{}", property_entry(prop), close))
        })
    })
}

fn render_registry(builder: CodeBuilder, models: &[CodegenModel]) -> CodeBuilder {
    builder.block("(def registry", |b| {
        if models.is_empty() {
            return b.line("{})");
        }

        let last = models.len() - 1;
        b.each(models.iter().enumerate(), |b, (i, model)| {
            let open = if i == 0 { "{" } else { " " };
            let close = if i == last { "})" } else { "" };
            b.line(&format!("{}:{} {}{}", open, model.class_name, model.class_name, close))
        })
    })
}
