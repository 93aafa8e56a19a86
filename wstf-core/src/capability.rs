//! Public contract for the text capabilities consumed by the engine
//!
//! The engine never splits text itself. It asks three narrow capabilities
//! for sentences, word tokens and syllables, so each can be swapped for a
//! different implementation (or a deterministic stub in tests).
//!
//! All capabilities are shared between threads once a profile is built and
//! must therefore be safe for concurrent read-only use.

use smallvec::SmallVec;

/// A sentence produced by a [`SentenceSplitter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// The sentence text, a substring of the input
    pub text: &'a str,
    /// Byte offset of `text` in the input
    pub offset: usize,
}

impl<'a> Sentence<'a> {
    /// Create a sentence at the given byte offset
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Byte offset one past the end of the sentence
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Classification of a token produced by a [`WordSegmenter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A word containing at least one letter
    Letter,
    /// Digits without letters
    Number,
    /// Punctuation, symbols and anything else
    Punctuation,
    /// Whitespace
    Whitespace,
}

impl TokenKind {
    /// Only letter words take part in readability counts
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(self, TokenKind::Letter)
    }
}

/// A token of a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordToken<'a> {
    /// The token text
    pub text: &'a str,
    /// What kind of token this is
    pub kind: TokenKind,
}

impl<'a> WordToken<'a> {
    /// Create a new token
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }

    /// Token length in code points
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Syllable fragments of one word, in order
pub type Syllables<'a> = SmallVec<[&'a str; 4]>;

/// Splits a text into sentences
pub trait SentenceSplitter: Send + Sync {
    /// Split `text` into ordered, non-overlapping sentences
    fn split<'a>(&self, text: &'a str) -> Vec<Sentence<'a>>;
}

/// Splits a sentence into classified tokens
pub trait WordSegmenter: Send + Sync {
    /// Segment `sentence` into ordered tokens
    fn segment<'a>(&self, sentence: &'a str) -> Vec<WordToken<'a>>;

    /// Only the tokens classified as words
    fn words<'a>(&self, sentence: &'a str) -> Vec<&'a str> {
        self.segment(sentence)
            .into_iter()
            .filter(|token| token.kind.is_word())
            .map(|token| token.text)
            .collect()
    }
}

/// Splits a word into syllables
pub trait Hyphenator: Send + Sync {
    /// Split `word` into fragments whose concatenation is `word`
    fn hyphenate<'a>(&self, word: &'a str) -> Syllables<'a>;

    /// Number of syllables in `word`
    fn syllable_count(&self, word: &str) -> usize {
        self.hyphenate(word).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SpaceSegmenter;

    impl WordSegmenter for SpaceSegmenter {
        fn segment<'a>(&self, sentence: &'a str) -> Vec<WordToken<'a>> {
            sentence
                .split(' ')
                .map(|t| {
                    let kind = if t.chars().any(char::is_alphabetic) {
                        TokenKind::Letter
                    } else {
                        TokenKind::Punctuation
                    };
                    WordToken::new(t, kind)
                })
                .collect()
        }
    }

    #[test]
    fn test_words_filters_non_letter_tokens() {
        let words = SpaceSegmenter.words("Der Hund , bellt !");
        assert_eq!(words, vec!["Der", "Hund", "bellt"]);
    }

    #[test]
    fn test_token_char_len_counts_code_points() {
        let token = WordToken::new("schläft", TokenKind::Letter);
        assert_eq!(token.text.len(), 8);
        assert_eq!(token.char_len(), 7);
    }

    #[test]
    fn test_sentence_end() {
        let sentence = Sentence::new("Die Katze schläft.", 16);
        assert_eq!(sentence.end(), 16 + "Die Katze schläft.".len());
    }
}
