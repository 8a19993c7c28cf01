use std::path::{Path, PathBuf};

use apigen_codegen::{GenerateResult, Generator, PropertyBag};
use apigen_document::ApiFile;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::backends;

/// Parse a `-p key=value` argument.
fn parse_property(s: &str) -> std::result::Result<(String, String), String> {
    PropertyBag::parse_assignment(s).map_err(|e| e.to_string())
}

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the API document (.toml or .json)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Generator to use (see `apigen list`)
    #[arg(short, long, default_value = "clojure-server")]
    pub generator: String,

    /// Output directory (defaults to the generator's output folder)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Generation property, repeatable (e.g., -p baseNamespace=acme.pets)
    #[arg(short = 'p', long = "property", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub skip_overwrite: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let registry = backends::registry();
        let backend = registry.get(&self.generator)?;

        let file = ApiFile::open(&self.input).unwrap_or_exit();
        let properties: PropertyBag = self.properties.iter().cloned().collect();
        tracing::debug!(
            generator = backend.name(),
            properties = properties.len(),
            "starting generation"
        );

        let generator = Generator::new(backend, file.document())
            .with_properties(properties)
            .skip_overwrite(self.skip_overwrite);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(backend.output_folder()));
        let result = generator
            .generate(&output)
            .wrap_err("Failed to generate code")?;

        Self::print_generation_summary(&output, &result);

        Ok(())
    }

    fn print_generation_summary(output: &Path, result: &GenerateResult) {
        println!("Generated: {}", output.display());

        if !result.written.is_empty() {
            println!();
            println!("Written:");
            for path in &result.written {
                println!("  + {}", path);
            }
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Skipped (already exist):");
            for path in &result.skipped {
                println!("  = {}", path);
            }
        }
    }

    fn run_preview(generator: &Generator<'_>) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
