use clap::Args;
use eyre::Result;

use crate::backends;

#[derive(Args)]
pub struct ListCommand {}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = backends::registry();

        println!("Generators:");
        for backend in registry.iter() {
            println!("  {} ({}) - {}", backend.name(), backend.kind(), backend.help());
        }

        Ok(())
    }
}
