//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use wstf_core::{ReadabilityError, ScoreReport};

/// The outcome of scoring one input
#[derive(Debug, Clone)]
pub struct ScoredInput {
    /// Where the text came from
    pub source: String,
    /// Report, or the reason the text could not be scored
    pub outcome: Result<ScoreReport, ReadabilityError>,
}

impl ScoredInput {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for one input
    fn format_result(&mut self, result: &ScoredInput) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per input
    #[default]
    Text,
    /// JSON array with counts and metrics
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(format: OutputFormat, writer: W, pretty_json: bool) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
