//! Language source management for CLI

use anyhow::{Context, Result};
use std::path::PathBuf;
use wstf_core::ReadabilityEngine;

/// Source of the language profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language by code or alias
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// Pick the external file when one is given, the built-in code otherwise
    pub fn resolve(language_config: Option<PathBuf>, language: &str) -> Self {
        match language_config {
            Some(path) => LanguageSource::External(path),
            None => LanguageSource::BuiltIn(language.to_string()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Build an engine bound to this language
    pub fn load_engine(&self) -> Result<ReadabilityEngine> {
        let engine = match self {
            LanguageSource::BuiltIn(code) => ReadabilityEngine::for_language(code),
            LanguageSource::External(path) => ReadabilityEngine::from_config_file(path),
        }
        .with_context(|| format!("Failed to load language profile ({})", self.display_name()))?;

        log::info!(
            "Using language '{}' ({})",
            engine.language(),
            self.display_name()
        );
        Ok(engine)
    }
}
