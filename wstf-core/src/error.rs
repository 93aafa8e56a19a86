//! Layered error types
//!
//! Scoring errors are input-validation failures returned per call.
//! Profile errors only happen while a language profile is being built.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by a scoring call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadabilityError {
    /// The caller asked for a language the engine is not bound to
    #[error("language '{requested}' not supported, engine is bound to '{bound}'")]
    UnsupportedLanguage {
        /// The language the caller expected
        requested: String,
        /// The code of the engine's language profile
        bound: String,
    },

    /// The formula selector does not name one of WSTF1..WSTF4
    #[error("unknown formula variant '{0}', expected one of WSTF1, WSTF2, WSTF3, WSTF4")]
    InvalidVariant(String),

    /// No sentence or no word could be extracted from the text
    #[error("no words found in input text")]
    EmptyInput,
}

/// Errors raised while constructing a language profile
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No built-in profile exists for the code
    #[error("unknown language code: {code}")]
    UnknownLanguage {
        /// The requested language code
        code: String,
    },

    /// A resource file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to load
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The language configuration is not valid TOML for the schema
    #[error("failed to parse {origin} config: {source}")]
    Parse {
        /// Language code or file the configuration came from
        origin: String,
        /// The underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The configuration parsed but violates a constraint
    #[error("invalid language configuration: {0}")]
    InvalidConfig(String),

    /// A hyphenation pattern or exception could not be parsed
    #[error("malformed hyphenation pattern '{pattern}' on line {line}: {reason}")]
    MalformedPattern {
        /// 1-based line number in the pattern table (0 for exceptions)
        line: usize,
        /// The offending pattern text
        pattern: String,
        /// What is wrong with it
        reason: String,
    },

    /// A sentence suppression rule is not a valid regular expression
    #[error("invalid suppression pattern: {0}")]
    Regex(#[from] regex::Error),

    /// A profile builder was finished without one of its capabilities
    #[error("language profile '{code}' is missing a {capability}")]
    MissingCapability {
        /// The profile's language code
        code: String,
        /// Which capability was not supplied
        capability: &'static str,
    },
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ReadabilityError>;

/// Result type for profile construction
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;
