//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use crate::error::{ProfileError, ProfileResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub sentences: Sentences,
    #[serde(default)]
    pub abbreviations: Abbreviations,
    pub hyphenation: Hyphenation,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
    /// Other names accepted for this language, e.g. "german"
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Metadata {
    /// Whether `code` names this language (case-insensitive, aliases included)
    pub fn matches(&self, code: &str) -> bool {
        let code = code.trim();
        self.code.eq_ignore_ascii_case(code)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(code))
    }
}

/// Sentence splitting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sentences {
    pub terminators: Vec<char>,
    /// Quotes and brackets that may follow a terminator
    #[serde(default)]
    pub closing: Vec<char>,
    #[serde(default = "default_true")]
    pub paragraph_breaks: bool,
    #[serde(default = "default_true")]
    pub lowercase_continuation: bool,
    #[serde(default)]
    pub suppress: Vec<SuppressionRule>,
}

/// A period rule: `pattern` is matched against the word carrying the period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuppressionRule {
    pub pattern: String,
    /// When set, the following word must match this regex as well
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Abbreviation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Abbreviations {
    #[serde(flatten)]
    pub categories: HashMap<String, Vec<String>>,
}

impl Abbreviations {
    /// Total number of abbreviations over all categories
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hyphenation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hyphenation {
    /// Pattern table path, relative to the configuration file
    pub patterns: String,
    #[serde(default = "default_min")]
    pub left_min: usize,
    #[serde(default = "default_min")]
    pub right_min: usize,
    /// Explicit hyphenations such as "li-ni-e"
    #[serde(default)]
    pub exceptions: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_min() -> usize {
    1
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(source: &str, origin: &str) -> ProfileResult<Self> {
        let config: LanguageConfig = toml::from_str(source).map_err(|e| ProfileError::Parse {
            origin: origin.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> ProfileResult<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(ProfileError::InvalidConfig(
                "metadata.code must not be empty".into(),
            ));
        }

        if self.sentences.terminators.is_empty() {
            return Err(ProfileError::InvalidConfig(
                "no terminator characters defined".into(),
            ));
        }

        if self.hyphenation.patterns.trim().is_empty() {
            return Err(ProfileError::InvalidConfig(
                "hyphenation.patterns must name a pattern file".into(),
            ));
        }

        if self.hyphenation.left_min == 0 || self.hyphenation.right_min == 0 {
            return Err(ProfileError::InvalidConfig(
                "hyphenation.left_min and right_min must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
