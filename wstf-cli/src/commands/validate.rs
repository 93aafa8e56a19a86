//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use wstf_core::LanguageProfile;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language configuration: {}",
            self.language_config.display()
        );

        match LanguageProfile::from_file(&self.language_config) {
            Ok(profile) => {
                println!("✓ Configuration is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                if let Some(resources) = profile.resources() {
                    println!("  Abbreviations: {}", resources.abbreviations);
                    println!("  Suppression rules: {}", resources.suppression_rules);
                    println!("  Hyphenation patterns: {}", resources.patterns);
                    println!("  Hyphenation exceptions: {}", resources.exceptions);
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
