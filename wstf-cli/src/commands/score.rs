//! Score command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wstf_core::{FormulaVariant, ReadabilityEngine};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, TextInput};
use crate::language_source::LanguageSource;
use crate::output::{create_formatter, OutputFormat, ScoredInput};
use crate::progress::ProgressReporter;

/// Arguments for the score command
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Input files or patterns (supports glob); reads stdin when neither
    /// inputs nor --text are given
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Score this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Formula variant: WSTF1..WSTF4 or 1..4 [default: WSTF1]
    #[arg(long, value_name = "VARIANT", env = "WSTF_VARIANT")]
    pub variant: Option<String>,

    /// Built-in language code or alias [default: de]
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// External language configuration file
    #[arg(long, value_name = "FILE", conflicts_with = "language")]
    pub language_config: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Score inputs in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for --parallel (default: all cores)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ScoreArgs {
    /// Execute the score command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting readability scoring");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;

        let selector = self
            .variant
            .as_deref()
            .or(config.scoring.variant.as_deref());
        let variant = FormulaVariant::from_selector(selector)?;

        let language = self
            .language
            .as_deref()
            .unwrap_or(&config.scoring.language);
        let engine =
            LanguageSource::resolve(self.language_config.clone(), language).load_engine()?;

        let inputs = self.collect_inputs()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let results = if self.parallel && inputs.len() > 1 {
            let threads = self.worker_threads(&config)?;
            log::info!("Scoring {} inputs on {} threads", inputs.len(), threads);
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| {
                inputs
                    .par_iter()
                    .map(|input| score_input(&engine, input, variant, &progress))
                    .collect::<Vec<_>>()
            })
        } else {
            inputs
                .iter()
                .map(|input| score_input(&engine, input, variant, &progress))
                .collect()
        };
        progress.finish();

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(format, self.writer()?, config.output.pretty_json);
        for result in &results {
            formatter.format_result(result)?;
        }
        formatter.finish()?;

        let failed = results.iter().filter(|r| !r.is_ok()).count();
        if failed > 0 {
            return Err(CliError::ScoringFailed {
                failed,
                total: results.len(),
            }
            .into());
        }

        log::info!("Scored {} inputs", results.len());
        Ok(())
    }

    fn collect_inputs(&self) -> Result<Vec<TextInput>> {
        if let Some(text) = &self.text {
            return Ok(vec![TextInput::new("<text>", text.as_str())]);
        }

        if self.input.is_empty() {
            return Ok(vec![TextInput::new("<stdin>", FileReader::read_stdin()?)]);
        }

        resolve_patterns(&self.input)?
            .into_iter()
            .map(|path| {
                let text = FileReader::read_text(&path)?;
                Ok(TextInput::new(path.display().to_string(), text))
            })
            .collect()
    }

    fn worker_threads(&self, config: &CliConfig) -> Result<usize> {
        match self.threads {
            Some(0) => {
                Err(CliError::ConfigError("Thread count must be greater than 0".to_string()).into())
            }
            Some(n) => Ok(n),
            None if config.performance.worker_threads > 0 => Ok(config.performance.worker_threads),
            None => Ok(num_cpus::get()),
        }
    }

    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when run from tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn score_input(
    engine: &ReadabilityEngine,
    input: &TextInput,
    variant: FormulaVariant,
    progress: &ProgressReporter,
) -> ScoredInput {
    let outcome = engine.report(&input.text, variant);
    if let Err(e) = &outcome {
        log::warn!("{}: {e}", input.source);
    }
    progress.file_completed(&input.source);

    ScoredInput {
        source: input.source.clone(),
        outcome,
    }
}
