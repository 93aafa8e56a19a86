//! Aggregate counters and the document-level metrics derived from them

use crate::error::{ReadabilityError, Result};
use serde::{Deserialize, Serialize};

/// Words longer than this many code points count as long words
pub const LONG_WORD_THRESHOLD: usize = 6;

/// Minimum syllable count of a polysyllabic word
pub const POLYSYLLABIC_MIN: usize = 3;

/// Whole-document counts collected by one scoring call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateCounts {
    /// Number of sentences
    pub sentences: usize,
    /// Number of letter words
    pub words: usize,
    /// Words with three or more syllables
    pub polysyllabic: usize,
    /// Words with exactly one syllable
    pub monosyllabic: usize,
    /// Words longer than six code points
    pub long_words: usize,
}

impl AggregateCounts {
    /// Empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one word.
    ///
    /// Two-syllable words fall into neither syllable bucket.
    pub fn record_word(&mut self, syllables: usize, char_len: usize) {
        if syllables >= POLYSYLLABIC_MIN {
            self.polysyllabic += 1;
        } else if syllables == 1 {
            self.monosyllabic += 1;
        }

        if char_len > LONG_WORD_THRESHOLD {
            self.long_words += 1;
        }

        self.words += 1;
    }

    /// Record the end of a sentence
    pub fn record_sentence(&mut self) {
        self.sentences += 1;
    }

    /// Derive the formula inputs from the final totals
    pub fn metrics(&self) -> Result<Metrics> {
        if self.sentences == 0 || self.words == 0 {
            return Err(ReadabilityError::EmptyInput);
        }

        let words = self.words as f64;
        Ok(Metrics {
            ms: 100.0 * self.polysyllabic as f64 / words,
            sl: words / self.sentences as f64,
            iw: 100.0 * self.long_words as f64 / words,
            es: 100.0 * self.monosyllabic as f64 / words,
        })
    }
}

/// Formula inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Percentage of words with three or more syllables
    pub ms: f64,
    /// Mean sentence length in words
    pub sl: f64,
    /// Percentage of words longer than six characters
    pub iw: f64,
    /// Percentage of words with one syllable
    pub es: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_buckets_are_exclusive() {
        let mut counts = AggregateCounts::new();
        counts.record_word(1, 3);
        counts.record_word(2, 5);
        counts.record_word(3, 9);
        counts.record_word(5, 14);

        assert_eq!(counts.words, 4);
        assert_eq!(counts.monosyllabic, 1);
        assert_eq!(counts.polysyllabic, 2);
        assert_eq!(counts.long_words, 2);
    }

    #[test]
    fn test_long_word_threshold_is_strict() {
        let mut counts = AggregateCounts::new();
        counts.record_word(2, 6);
        assert_eq!(counts.long_words, 0);
        counts.record_word(2, 7);
        assert_eq!(counts.long_words, 1);
    }

    #[test]
    fn test_zero_syllable_words_only_count_as_words() {
        let mut counts = AggregateCounts::new();
        counts.record_word(0, 2);
        assert_eq!(counts.words, 1);
        assert_eq!(counts.monosyllabic, 0);
        assert_eq!(counts.polysyllabic, 0);
    }

    #[test]
    fn test_metrics_from_totals() {
        let counts = AggregateCounts {
            sentences: 4,
            words: 50,
            polysyllabic: 10,
            monosyllabic: 25,
            long_words: 20,
        };
        let m = counts.metrics().unwrap();

        assert_eq!(m.ms, 20.0);
        assert_eq!(m.sl, 12.5);
        assert_eq!(m.iw, 40.0);
        assert_eq!(m.es, 50.0);
    }

    #[test]
    fn test_metrics_empty_input() {
        assert_eq!(
            AggregateCounts::new().metrics(),
            Err(ReadabilityError::EmptyInput)
        );

        let sentences_without_words = AggregateCounts {
            sentences: 3,
            ..AggregateCounts::default()
        };
        assert_eq!(
            sentences_without_words.metrics(),
            Err(ReadabilityError::EmptyInput)
        );
    }
}
