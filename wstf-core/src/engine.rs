//! Readability scoring engine
//!
//! The engine drives the capabilities of its language profile over a text,
//! accumulates whole-document counts and evaluates a formula variant.

use crate::counts::{AggregateCounts, Metrics};
use crate::error::{ProfileResult, ReadabilityError, Result};
use crate::formula::FormulaVariant;
use crate::language::LanguageProfile;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

/// Score together with the counts and metrics it was computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Formula that produced `score`
    pub variant: FormulaVariant,
    /// Unrounded formula value
    pub score: f64,
    /// Whole-document counts
    pub counts: AggregateCounts,
    /// MS, SL, IW and ES derived from `counts`
    pub metrics: Metrics,
}

/// Readability engine bound to one language profile
///
/// Cloning is cheap and clones share the profile.
#[derive(Debug, Clone)]
pub struct ReadabilityEngine {
    profile: Arc<LanguageProfile>,
}

impl ReadabilityEngine {
    /// Bind an engine to a profile
    pub fn new(profile: LanguageProfile) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    /// Engine for a built-in language such as `de`
    pub fn for_language(code: &str) -> ProfileResult<Self> {
        LanguageProfile::load(code).map(Self::new)
    }

    /// Engine for a language described by a configuration file
    pub fn from_config_file(path: impl AsRef<Path>) -> ProfileResult<Self> {
        LanguageProfile::from_file(path).map(Self::new)
    }

    /// Code of the bound language
    pub fn language(&self) -> &str {
        self.profile.code()
    }

    /// The bound language profile
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Count sentences, words and syllable buckets over the whole text
    #[tracing::instrument(skip_all, fields(language = self.language(), bytes = text.len()))]
    pub fn analyze(&self, text: &str) -> AggregateCounts {
        let splitter = self.profile.splitter();
        let segmenter = self.profile.segmenter();
        let hyphenator = self.profile.hyphenator();

        let mut counts = AggregateCounts::new();
        for sentence in splitter.split(text) {
            for token in segmenter.segment(sentence.text) {
                if !token.kind.is_word() {
                    continue;
                }
                counts.record_word(hyphenator.syllable_count(token.text), token.char_len());
            }
            counts.record_sentence();
        }

        tracing::debug!(
            sentences = counts.sentences,
            words = counts.words,
            polysyllabic = counts.polysyllabic,
            monosyllabic = counts.monosyllabic,
            long_words = counts.long_words,
            "text analyzed"
        );
        counts
    }

    /// Score `text` in the bound language
    pub fn score(&self, text: &str, variant: FormulaVariant) -> Result<f64> {
        let metrics = self.analyze(text).metrics()?;
        Ok(variant.evaluate(&metrics))
    }

    /// Score `text`, checking that `language` is the bound language
    pub fn score_as(&self, text: &str, language: &str, variant: FormulaVariant) -> Result<f64> {
        self.ensure_language(language)?;
        self.score(text, variant)
    }

    /// Score `text` and keep the intermediate counts and metrics
    pub fn report(&self, text: &str, variant: FormulaVariant) -> Result<ScoreReport> {
        let counts = self.analyze(text);
        let metrics = counts.metrics()?;
        Ok(ScoreReport {
            variant,
            score: variant.evaluate(&metrics),
            counts,
            metrics,
        })
    }

    fn ensure_language(&self, language: &str) -> Result<()> {
        if self.profile.matches(language) {
            Ok(())
        } else {
            Err(ReadabilityError::UnsupportedLanguage {
                requested: language.to_string(),
                bound: self.profile.code().to_string(),
            })
        }
    }
}
