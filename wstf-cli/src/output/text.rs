//! Plain text output formatter

use super::{OutputFormatter, ScoredInput};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one line per input
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_result(&mut self, result: &ScoredInput) -> Result<()> {
        match &result.outcome {
            Ok(report) => writeln!(
                self.writer,
                "{}: {} = {:.2} (sentences: {}, words: {})",
                result.source,
                report.variant,
                report.score,
                report.counts.sentences,
                report.counts.words
            )?,
            Err(e) => writeln!(self.writer, "{}: error: {e}", result.source)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
