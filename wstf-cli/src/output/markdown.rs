//! Markdown output formatter

use super::{OutputFormatter, ScoredInput};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs results as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    total: usize,
    scored: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total: 0,
            scored: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_result(&mut self, result: &ScoredInput) -> Result<()> {
        if self.total == 0 {
            writeln!(
                self.writer,
                "| Input | Variant | Score | Sentences | Words | MS | SL | IW | ES |"
            )?;
            writeln!(self.writer, "|---|---|---:|---:|---:|---:|---:|---:|---:|")?;
        }
        self.total += 1;

        match &result.outcome {
            Ok(report) => {
                self.scored += 1;
                let m = &report.metrics;
                writeln!(
                    self.writer,
                    "| {} | {} | {:.2} | {} | {} | {:.1} | {:.1} | {:.1} | {:.1} |",
                    result.source,
                    report.variant,
                    report.score,
                    report.counts.sentences,
                    report.counts.words,
                    m.ms,
                    m.sl,
                    m.iw,
                    m.es
                )?;
            }
            Err(e) => {
                writeln!(
                    self.writer,
                    "| {} | - | *{e}* | - | - | - | - | - | - |",
                    result.source
                )?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Scored {} of {} inputs*",
            self.scored, self.total
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
