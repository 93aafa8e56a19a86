//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use wstf_core::{builtin_languages, FormulaVariant, LanguageProfile};

use crate::output::OutputFormat;

pub mod generate_config;
pub mod score;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score German text with the Wiener Sachtextformel
    Score(score::ScoreArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a language configuration file
    Validate(validate::ValidateArgs),

    /// Generate a language configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List built-in languages
    Languages,

    /// List formula variants
    Variants,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Score(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Built-in languages:");
                for code in builtin_languages() {
                    let profile = LanguageProfile::load(code)?;
                    println!(
                        "  {:<4} {} (aliases: {})",
                        profile.code(),
                        profile.name(),
                        profile.aliases().join(", ")
                    );
                }
            }
            ListCommands::Variants => {
                println!("Formula variants:");
                for variant in FormulaVariant::ALL {
                    println!("  {variant}  {}", variant.expression());
                }
            }
            ListCommands::Formats => {
                println!("Output formats:");
                for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
                    println!("  {}", format.as_str());
                }
            }
        }
        Ok(())
    }
}
