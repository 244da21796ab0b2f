//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let template = Self::generate_template()?;
        std::fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Use it for processing:");
        println!(
            "   wordstream process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Default configuration rendered as commented TOML
    pub fn generate_template() -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# wordstream configuration\n\
             #\n\
             # [stream]  read buffer, word separators, case folding, input encoding\n\
             # [stats]   tracker capacities; 0 disables a tracker\n\
             # [output]  default report format (text, json, markdown)\n\
             \n{body}"
        ))
    }
}
