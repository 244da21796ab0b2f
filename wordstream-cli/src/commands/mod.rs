//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod process;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stream files or stdin and report word statistics
    Process(process::ProcessArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available ranking trackers
    Stats,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub async fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute().await,
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Text printed for the listing
    pub fn render(&self) -> String {
        let rows: &[(&str, &str)] = match self {
            ListCommands::Stats => &[
                ("most_frequent", "words with the highest occurrence count"),
                ("longest", "distinct words with the most characters"),
                ("shortest", "distinct words with the fewest characters"),
            ],
            ListCommands::Formats => &[
                ("text", "human readable summary"),
                ("json", "machine readable snapshot"),
                ("markdown", "tables for documentation"),
            ],
        };

        rows.iter()
            .map(|(name, description)| format!("{name:<14} {description}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_stats_names_every_tracker() {
        let listing = ListCommands::Stats.render();
        assert!(listing.contains("most_frequent"));
        assert!(listing.contains("longest"));
        assert!(listing.contains("shortest"));
    }

    #[test]
    fn test_list_formats() {
        let listing = ListCommands::Formats.render();
        assert_eq!(listing.lines().count(), 3);
        assert!(listing.starts_with("text"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
