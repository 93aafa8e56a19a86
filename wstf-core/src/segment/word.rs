//! Word segmentation on Unicode word boundaries (UAX #29)

use crate::capability::{TokenKind, WordSegmenter, WordToken};
use unicode_segmentation::UnicodeSegmentation;

/// Word segmenter based on Unicode word boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordSegmenter;

impl UnicodeWordSegmenter {
    pub fn new() -> Self {
        Self
    }

    /// Classify a single boundary token
    pub fn classify(token: &str) -> TokenKind {
        if token.chars().any(char::is_alphabetic) {
            TokenKind::Letter
        } else if token.chars().any(char::is_numeric) {
            TokenKind::Number
        } else if token.chars().all(char::is_whitespace) {
            TokenKind::Whitespace
        } else {
            TokenKind::Punctuation
        }
    }
}

impl WordSegmenter for UnicodeWordSegmenter {
    fn segment<'a>(&self, sentence: &'a str) -> Vec<WordToken<'a>> {
        sentence
            .split_word_bounds()
            .map(|token| WordToken::new(token, Self::classify(token)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_skip_punctuation_and_numbers() {
        let words = UnicodeWordSegmenter.words("Der Hund läuft, 3 Mal!");
        assert_eq!(words, vec!["Der", "Hund", "läuft", "Mal"]);
    }

    #[test]
    fn test_umlauts_and_eszett_stay_in_one_word() {
        let words = UnicodeWordSegmenter.words("Die Straße führt über Brücken.");
        assert_eq!(words, vec!["Die", "Straße", "führt", "über", "Brücken"]);
    }

    #[test]
    fn test_tokens_cover_the_sentence() {
        let sentence = "Er kam um 10.30 Uhr (pünktlich).";
        let tokens = UnicodeWordSegmenter.segment(sentence);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        assert_eq!(joined, sentence);
    }

    #[test]
    fn test_classify() {
        assert_eq!(UnicodeWordSegmenter::classify("Hund"), TokenKind::Letter);
        assert_eq!(UnicodeWordSegmenter::classify("B2B"), TokenKind::Letter);
        assert_eq!(UnicodeWordSegmenter::classify("10.30"), TokenKind::Number);
        assert_eq!(UnicodeWordSegmenter::classify(" \t"), TokenKind::Whitespace);
        assert_eq!(UnicodeWordSegmenter::classify("…"), TokenKind::Punctuation);
    }

    #[test]
    fn test_empty_sentence() {
        assert!(UnicodeWordSegmenter.segment("").is_empty());
    }
}
