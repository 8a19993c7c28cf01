use std::path::PathBuf;

use apigen_document::ApiFile;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the API document (.toml or .json)
    #[arg(short, long)]
    pub input: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ApiFile::open(&self.input).unwrap_or_exit();
        let document = file.document();

        println!("✓ {} is valid\n", self.input.display());

        let info = &document.info;
        if let Some(title) = &info.title {
            match &info.version {
                Some(version) => println!("  {} v{}", title, version),
                None => println!("  {}", title),
            }
        }
        if let Some(desc) = &info.description {
            println!("  {}", desc);
        }

        let op_count = document.operations.len();
        println!(
            "\n  {} operation{}:",
            op_count,
            if op_count == 1 { "" } else { "s" }
        );
        for op in &document.operations {
            let id = op.operation_id.as_deref().unwrap_or("-");
            println!("    {:<7} {} ({})", op.method.as_str(), op.path, id);
        }

        if !document.models.is_empty() {
            let model_count = document.models.len();
            println!(
                "\n  {} model{}:",
                model_count,
                if model_count == 1 { "" } else { "s" }
            );
            for (name, model) in &document.models {
                println!("    {} ({} properties)", name, model.properties.len());
            }
        }

        Ok(())
    }
}
