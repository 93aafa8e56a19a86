//! Language profiles
//!
//! A profile binds a language code to the three text capabilities the engine
//! consumes. Profiles are built once and are immutable afterwards.

use crate::capability::{Hyphenator, SentenceSplitter, WordSegmenter};
use crate::error::{ProfileError, ProfileResult};
use crate::language::config::LanguageConfig;
use crate::language::loader;
use crate::language::tables::PatternTable;
use crate::segment::{PatternHyphenator, RuleSentenceSplitter, UnicodeWordSegmenter};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Sizes of the data a configured profile was built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceSummary {
    pub abbreviations: usize,
    pub suppression_rules: usize,
    pub patterns: usize,
    pub exceptions: usize,
}

/// A language bound to its sentence splitter, word segmenter and hyphenator
#[derive(Clone)]
pub struct LanguageProfile {
    code: String,
    name: String,
    aliases: Vec<String>,
    splitter: Arc<dyn SentenceSplitter>,
    segmenter: Arc<dyn WordSegmenter>,
    hyphenator: Arc<dyn Hyphenator>,
    resources: Option<ResourceSummary>,
}

impl LanguageProfile {
    /// Load a built-in profile by code or alias, e.g. `de` or `german`
    pub fn load(code: &str) -> ProfileResult<Self> {
        loader::load_embedded(code)
    }

    /// Load a profile from an external TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> ProfileResult<Self> {
        loader::load_file(path.as_ref())
    }

    /// Build a profile from a parsed configuration and the pattern table text
    pub fn from_config(config: &LanguageConfig, patterns: &str) -> ProfileResult<Self> {
        config.validate()?;

        let splitter =
            RuleSentenceSplitter::from_config(&config.sentences, &config.abbreviations.categories)?;

        let hyphenation = &config.hyphenation;
        let mut table = PatternTable::parse(patterns, hyphenation.left_min, hyphenation.right_min)?;
        for exception in &hyphenation.exceptions {
            table.add_exception(exception)?;
        }
        if table.is_empty() {
            return Err(ProfileError::InvalidConfig(format!(
                "pattern table for '{}' contains no patterns",
                config.metadata.code
            )));
        }

        let resources = ResourceSummary {
            abbreviations: splitter.abbreviation_count(),
            suppression_rules: splitter.suppression_rule_count(),
            patterns: table.len(),
            exceptions: table.exception_count(),
        };

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            aliases: config.metadata.aliases.clone(),
            splitter: Arc::new(splitter),
            segmenter: Arc::new(UnicodeWordSegmenter::new()),
            hyphenator: Arc::new(PatternHyphenator::new(table)),
            resources: Some(resources),
        })
    }

    /// Start assembling a profile from custom capabilities
    pub fn builder(code: impl Into<String>) -> LanguageProfileBuilder {
        LanguageProfileBuilder::new(code)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Whether `language` names this profile, by code or alias, ignoring case
    pub fn matches(&self, language: &str) -> bool {
        let language = language.trim();
        self.code.eq_ignore_ascii_case(language)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(language))
    }

    /// Resource sizes, only known for configuration-backed profiles
    pub fn resources(&self) -> Option<ResourceSummary> {
        self.resources
    }

    pub fn splitter(&self) -> &dyn SentenceSplitter {
        self.splitter.as_ref()
    }

    pub fn segmenter(&self) -> &dyn WordSegmenter {
        self.segmenter.as_ref()
    }

    pub fn hyphenator(&self) -> &dyn Hyphenator {
        self.hyphenator.as_ref()
    }
}

impl fmt::Debug for LanguageProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("code", &self.code)
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("resources", &self.resources)
            .finish_non_exhaustive()
    }
}

/// Builder for profiles with caller supplied capabilities
pub struct LanguageProfileBuilder {
    code: String,
    name: Option<String>,
    aliases: Vec<String>,
    splitter: Option<Arc<dyn SentenceSplitter>>,
    segmenter: Option<Arc<dyn WordSegmenter>>,
    hyphenator: Option<Arc<dyn Hyphenator>>,
}

impl LanguageProfileBuilder {
    fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            aliases: Vec::new(),
            splitter: None,
            segmenter: None,
            hyphenator: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn splitter(mut self, splitter: impl SentenceSplitter + 'static) -> Self {
        self.splitter = Some(Arc::new(splitter));
        self
    }

    pub fn segmenter(mut self, segmenter: impl WordSegmenter + 'static) -> Self {
        self.segmenter = Some(Arc::new(segmenter));
        self
    }

    pub fn hyphenator(mut self, hyphenator: impl Hyphenator + 'static) -> Self {
        self.hyphenator = Some(Arc::new(hyphenator));
        self
    }

    /// Finish the profile; every capability must have been supplied
    pub fn build(self) -> ProfileResult<LanguageProfile> {
        let code = self.code.trim().to_string();
        if code.is_empty() {
            return Err(ProfileError::InvalidConfig(
                "language code must not be empty".into(),
            ));
        }

        let missing = |capability: &'static str| ProfileError::MissingCapability {
            code: code.clone(),
            capability,
        };
        let splitter = self.splitter.ok_or_else(|| missing("sentence splitter"))?;
        let segmenter = self.segmenter.ok_or_else(|| missing("word segmenter"))?;
        let hyphenator = self.hyphenator.ok_or_else(|| missing("hyphenator"))?;

        Ok(LanguageProfile {
            name: self.name.unwrap_or_else(|| code.clone()),
            code,
            aliases: self.aliases,
            splitter,
            segmenter,
            hyphenator,
            resources: None,
        })
    }
}
