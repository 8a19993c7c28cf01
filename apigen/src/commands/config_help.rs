use clap::Args;
use eyre::Result;

use crate::backends;

#[derive(Args)]
pub struct ConfigHelpCommand {
    /// Generator to describe
    #[arg(short, long, default_value = "clojure-server")]
    pub generator: String,
}

impl ConfigHelpCommand {
    pub fn run(&self) -> Result<()> {
        let registry = backends::registry();
        let backend = registry.get(&self.generator)?;

        println!("{}", backend.help());
        println!();

        let options = backend.options();
        if options.is_empty() {
            println!("No options");
        } else {
            println!("Options (pass with -p <name>=<value>):");
            for option in options {
                println!("  {}", option.name);
                println!("      {}", option.description);
            }
        }

        println!();
        println!("Default output folder: {}", backend.output_folder());

        Ok(())
    }
}
