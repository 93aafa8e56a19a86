//! Language configuration loader
//!
//! Builds profiles from the embedded language data or from a configuration
//! file on disk. Nothing is cached; callers keep the profile they built.

use crate::error::{ProfileError, ProfileResult};
use crate::language::config::LanguageConfig;
use crate::language::profile::LanguageProfile;
use std::fs;
use std::path::Path;

/// A language shipped with the library
struct EmbeddedLanguage {
    code: &'static str,
    aliases: &'static [&'static str],
    config: &'static str,
    patterns: &'static str,
}

const EMBEDDED: &[EmbeddedLanguage] = &[EmbeddedLanguage {
    code: "de",
    aliases: &["german", "deutsch", "deu"],
    config: include_str!("../../data/languages/german.toml"),
    patterns: include_str!("../../data/hyphen/hyph-de-syllables.pat.txt"),
}];

/// Codes of the built-in languages
pub fn builtin_languages() -> Vec<&'static str> {
    EMBEDDED.iter().map(|lang| lang.code).collect()
}

/// Load a built-in language by code or alias
pub(crate) fn load_embedded(code: &str) -> ProfileResult<LanguageProfile> {
    let requested = code.trim();
    let language = EMBEDDED
        .iter()
        .find(|lang| {
            lang.code.eq_ignore_ascii_case(requested)
                || lang.aliases.iter().any(|a| a.eq_ignore_ascii_case(requested))
        })
        .ok_or_else(|| ProfileError::UnknownLanguage {
            code: code.to_string(),
        })?;

    let config = LanguageConfig::from_toml(language.config, language.code)?;
    let profile = LanguageProfile::from_config(&config, language.patterns)?;
    tracing::debug!(
        code = profile.code(),
        resources = ?profile.resources(),
        "loaded built-in language profile"
    );
    Ok(profile)
}

/// Load a language from a TOML file, resolving its pattern table relative to
/// the file's directory
pub(crate) fn load_file(path: &Path) -> ProfileResult<LanguageProfile> {
    let source = read(path)?;
    let config = LanguageConfig::from_toml(&source, &path.display().to_string())?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let patterns_path = base.join(&config.hyphenation.patterns);
    let patterns = read(&patterns_path)?;

    let profile = LanguageProfile::from_config(&config, &patterns)?;
    tracing::info!(
        code = profile.code(),
        config = %path.display(),
        patterns = %patterns_path.display(),
        "loaded language profile from file"
    );
    Ok(profile)
}

fn read(path: &Path) -> ProfileResult<String> {
    fs::read_to_string(path).map_err(|source| ProfileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_languages() {
        assert_eq!(builtin_languages(), vec!["de"]);
    }

    #[test]
    fn test_aliases_resolve_to_german() {
        for code in ["de", "DE", "german", "Deutsch", " deu "] {
            let profile = load_embedded(code).unwrap();
            assert_eq!(profile.code(), "de");
        }
    }

    #[test]
    fn test_unknown_language() {
        let err = load_embedded("en").unwrap_err();
        assert!(matches!(err, ProfileError::UnknownLanguage { ref code } if code == "en"));
    }

    #[test]
    fn test_embedded_config_is_valid() {
        for language in EMBEDDED {
            let config = LanguageConfig::from_toml(language.config, language.code).unwrap();
            assert_eq!(config.metadata.code, language.code);
            for alias in language.aliases {
                assert!(config.metadata.matches(alias));
            }
        }
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_file(Path::new("/nonexistent/wstf/german.toml")).unwrap_err();
        match err {
            ProfileError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/wstf/german.toml"))
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
