//! Wiener Sachtextformel readability scoring for German text
//!
//! The crate computes the four published variants of the Wiener
//! Sachtextformel (WSTF1 to WSTF4). A [`ReadabilityEngine`] is bound to one
//! [`LanguageProfile`], which supplies three capabilities:
//!
//! - a [`SentenceSplitter`] that finds sentences in a text,
//! - a [`WordSegmenter`] that finds the letter words of a sentence,
//! - a [`Hyphenator`] that splits a word into syllables.
//!
//! The engine counts sentences, words, one-syllable words, words with three
//! or more syllables and words longer than six characters over the whole
//! document, then evaluates the selected formula.
//!
//! # Example
//!
//! ```rust
//! use wstf_core::{FormulaVariant, ReadabilityEngine};
//!
//! let engine = ReadabilityEngine::for_language("de").unwrap();
//! let text = "Der Hund läuft. Die Katze schläft.";
//!
//! let counts = engine.analyze(text);
//! assert_eq!(counts.sentences, 2);
//! assert_eq!(counts.words, 6);
//!
//! let score = engine.score(text, FormulaVariant::Wstf1).unwrap();
//! assert!(score.is_finite());
//! ```
//!
//! Custom capabilities can be plugged in with [`LanguageProfile::builder`].

pub mod capability;
pub mod counts;
pub mod engine;
pub mod error;
pub mod formula;
pub mod language;
pub mod segment;

pub use capability::{
    Hyphenator, Sentence, SentenceSplitter, Syllables, TokenKind, WordSegmenter, WordToken,
};
pub use counts::{AggregateCounts, Metrics};
pub use engine::{ReadabilityEngine, ScoreReport};
pub use error::{ProfileError, ProfileResult, ReadabilityError, Result};
pub use formula::FormulaVariant;
pub use language::{builtin_languages, LanguageConfig, LanguageProfile, ResourceSummary};
