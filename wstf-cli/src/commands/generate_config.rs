//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new configuration
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating language configuration template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!(
            "1. Put a hyphenation pattern table at hyphen/{}.pat.txt next to the configuration",
            self.language_code
        );
        println!("2. Edit the configuration file to customize the language rules");
        println!("3. Validate your configuration:");
        println!(
            "   wstf validate --language-config {}",
            self.output.display()
        );
        println!("4. Use it for scoring:");
        println!(
            "   wstf score -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# Language configuration for {code}

[metadata]
code = "{code}"
name = "Custom Language"
# Other names accepted for --language and language checks
aliases = []

# Sentence splitting
[sentences]
# Characters that can end a sentence
terminators = [".", "!", "?", "…"]

# Quotes and brackets that may follow a terminator
closing = ['"', "'", ")", "]", "»", "«", "“", "”"]

# Blank lines end a sentence
paragraph_breaks = true

# A period followed by a lowercase word does not end a sentence
lowercase_continuation = true

# Regular expressions matched against the word in front of a period,
# including the period. A match keeps the sentence open. `after`, when
# given, must also match the next word.
suppress = [
    {{ pattern = '^\d{{1,2}}\.$', after = '^(Januar|Februar|März|April|Mai|Juni)\b', description = "Ordinal dates" }},
    {{ pattern = '^\p{{L}}\.$', description = "Single-letter initials" }},
]

# Abbreviations by category, matched case-insensitively without the final dot
[abbreviations]
titles = ["Dr", "Prof"]
common = ["bzw", "z.B", "usw"]

# Syllable splitting
[hyphenation]
# TeX style .pat.txt pattern table, relative to this file
patterns = "hyphen/{code}.pat.txt"

# Minimum characters before the first and after the last break
left_min = 1
right_min = 1

# Explicit splits that override the patterns
exceptions = [
    # Example: "li-ni-e"
]
"#,
            code = self.language_code
        )
    }
}
