//! JSON output formatter

use super::{OutputFormatter, ScoredInput};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use wstf_core::{AggregateCounts, FormulaVariant, Metrics};

/// JSON formatter - outputs all results as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    entries: Vec<ScoreEntry>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct ScoreEntry {
    /// Where the text came from
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<FormulaVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<AggregateCounts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    /// Why the input could not be scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&ScoredInput> for ScoreEntry {
    fn from(result: &ScoredInput) -> Self {
        match &result.outcome {
            Ok(report) => Self {
                source: result.source.clone(),
                variant: Some(report.variant),
                score: Some(report.score),
                counts: Some(report.counts),
                metrics: Some(report.metrics),
                error: None,
            },
            Err(e) => Self {
                source: result.source.clone(),
                variant: None,
                score: None,
                counts: None,
                metrics: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            entries: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_result(&mut self, result: &ScoredInput) -> Result<()> {
        self.entries.push(ScoreEntry::from(result));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.entries)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
