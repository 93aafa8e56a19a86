//! Hyphenation pattern table (Liang's algorithm)
//!
//! Patterns use the TeX `.pat.txt` format: whitespace separated entries,
//! `%` starts a comment, digits between letters give the priority of a break
//! at that position and `.` anchors a pattern at a word edge. Odd priorities
//! allow a break, even ones forbid it; the highest priority wins.

use crate::error::{ProfileError, ProfileResult};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Break priorities of one pattern, one slot per inter-letter position
type Priorities = SmallVec<[u8; 8]>;

/// Char positions (inside a word) where a break occurs
pub type BreakPoints = SmallVec<[usize; 8]>;

/// Parsed pattern table with exceptions
#[derive(Debug, Clone)]
pub struct PatternTable {
    patterns: HashMap<String, Priorities>,
    /// Longest pattern, in chars
    max_len: usize,
    exceptions: HashMap<String, BreakPoints>,
    left_min: usize,
    right_min: usize,
}

impl PatternTable {
    /// Parse a pattern table
    pub fn parse(source: &str, left_min: usize, right_min: usize) -> ProfileResult<Self> {
        let mut table = Self {
            patterns: HashMap::new(),
            max_len: 0,
            exceptions: HashMap::new(),
            left_min: left_min.max(1),
            right_min: right_min.max(1),
        };

        for (idx, line) in source.lines().enumerate() {
            let content = line.split('%').next().unwrap_or("");
            for token in content.split_whitespace() {
                // Tolerate the TeX wrapper of .tex pattern files
                if token.starts_with('\\') || token == "{" || token == "}" {
                    continue;
                }
                table.insert_pattern(token, idx + 1)?;
            }
        }

        Ok(table)
    }

    /// Add an explicit hyphenation such as `li-ni-e`
    pub fn add_exception(&mut self, entry: &str) -> ProfileResult<()> {
        let malformed = |reason: &str| ProfileError::MalformedPattern {
            line: 0,
            pattern: entry.to_string(),
            reason: reason.to_string(),
        };

        let mut word = String::new();
        let mut breaks = BreakPoints::new();
        let mut len = 0usize;

        for part in entry.trim().split('-') {
            if part.is_empty() {
                return Err(malformed("empty syllable"));
            }
            if part.chars().any(|c| c.is_ascii_digit() || c.is_whitespace()) {
                return Err(malformed("exceptions may only contain letters and '-'"));
            }
            if len > 0 {
                breaks.push(len);
            }
            for ch in part.chars() {
                word.push(lowercase(ch));
                len += 1;
            }
        }

        self.exceptions.insert(word, breaks);
        Ok(())
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of exceptions
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// Break positions for a word that has already been lowercased char by char.
    ///
    /// A position `p` means a break between `word[p - 1]` and `word[p]`.
    pub fn break_points(&self, word: &[char]) -> BreakPoints {
        let n = word.len();
        if n == 0 {
            return BreakPoints::new();
        }

        let key: String = word.iter().collect();
        if let Some(breaks) = self.exceptions.get(&key) {
            return breaks.clone();
        }

        if n < self.left_min + self.right_min {
            return BreakPoints::new();
        }

        let mut dotted = Vec::with_capacity(n + 2);
        dotted.push('.');
        dotted.extend_from_slice(word);
        dotted.push('.');

        // points[i] is the priority in front of dotted[i]
        let mut points = vec![0u8; dotted.len() + 1];
        let mut candidate = String::with_capacity(self.max_len * 2);

        for start in 0..dotted.len() {
            candidate.clear();
            let end = (start + self.max_len).min(dotted.len());
            for &ch in &dotted[start..end] {
                candidate.push(ch);
                if let Some(priorities) = self.patterns.get(&candidate) {
                    for (offset, &priority) in priorities.iter().enumerate() {
                        let slot = &mut points[start + offset];
                        *slot = (*slot).max(priority);
                    }
                }
            }
        }

        // word[p] sits at dotted[p + 1]
        (self.left_min..=n - self.right_min)
            .filter(|&p| points[p + 1] % 2 == 1)
            .collect()
    }

    fn insert_pattern(&mut self, token: &str, line: usize) -> ProfileResult<()> {
        let malformed = |reason: &str| ProfileError::MalformedPattern {
            line,
            pattern: token.to_string(),
            reason: reason.to_string(),
        };

        let mut letters = String::new();
        let mut priorities = Priorities::new();
        priorities.push(0);
        let mut previous_digit = false;

        for ch in token.chars() {
            if let Some(digit) = ch.to_digit(10) {
                if previous_digit {
                    return Err(malformed("consecutive digits"));
                }
                if let Some(last) = priorities.last_mut() {
                    *last = digit as u8;
                }
                previous_digit = true;
            } else if ch.is_alphabetic() || ch == '.' || ch == '\'' || ch == '’' {
                letters.push(lowercase(ch));
                priorities.push(0);
                previous_digit = false;
            } else {
                return Err(malformed("unexpected character"));
            }
        }

        let letter_count = priorities.len() - 1;
        if letters.chars().all(|c| c == '.') {
            return Err(malformed("pattern has no letters"));
        }

        self.max_len = self.max_len.max(letter_count);
        match self.patterns.get_mut(&letters) {
            Some(existing) => {
                for (slot, priority) in existing.iter_mut().zip(priorities) {
                    *slot = (*slot).max(priority);
                }
            }
            None => {
                self.patterns.insert(letters, priorities);
            }
        }

        Ok(())
    }
}

#[inline]
pub(crate) fn lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().map(lowercase).collect()
    }

    fn table(source: &str) -> PatternTable {
        PatternTable::parse(source, 1, 1).unwrap()
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let table = table("% header\n\n1ba 1be % trailing comment\n  .a2b\n");
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_parse_tolerates_tex_wrapper() {
        let table = table("\\patterns{\n1ba\n}\n");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_odd_priority_breaks() {
        let table = table("1ba");
        assert_eq!(table.break_points(&chars("aba")).as_slice(), &[1]);
        assert_eq!(table.break_points(&chars("abba")).as_slice(), &[2]);
    }

    #[test]
    fn test_even_priority_inhibits() {
        let table = table("1ba b2b");
        assert!(table.break_points(&chars("abba")).is_empty());
        assert_eq!(table.break_points(&chars("aba")).as_slice(), &[1]);
    }

    #[test]
    fn test_word_edge_anchor() {
        let table = table("1ba .b2");
        // Position 1 is after a word-initial b
        assert!(table.break_points(&chars("bba")).is_empty());
    }

    #[test]
    fn test_left_and_right_min() {
        let source = "1b 1c 1d";
        let loose = PatternTable::parse(source, 1, 1).unwrap();
        assert_eq!(loose.break_points(&chars("abcd")).as_slice(), &[1, 2, 3]);

        let strict = PatternTable::parse(source, 2, 2).unwrap();
        assert_eq!(strict.break_points(&chars("abcd")).as_slice(), &[2]);
    }

    #[test]
    fn test_short_words_never_break() {
        let table = PatternTable::parse("1b", 2, 2).unwrap();
        assert!(table.break_points(&chars("ab")).is_empty());
        assert!(table.break_points(&[]).is_empty());
    }

    #[test]
    fn test_exceptions_override_patterns() {
        let mut table = table("1ni");
        table.add_exception("li-ni-e").unwrap();
        assert_eq!(table.exception_count(), 1);
        assert_eq!(table.break_points(&chars("linie")).as_slice(), &[2, 4]);
        assert_eq!(table.break_points(&chars("Linie")).as_slice(), &[2, 4]);
    }

    #[test]
    fn test_duplicate_patterns_keep_highest_priority() {
        let table = table("1ba\n2ba");
        assert_eq!(table.len(), 1);
        assert!(table.break_points(&chars("aba")).is_empty());
    }

    #[test]
    fn test_malformed_patterns() {
        let err = PatternTable::parse("1ba\n12b", 1, 1).unwrap_err();
        match err {
            ProfileError::MalformedPattern { line, pattern, .. } => {
                assert_eq!(line, 2);
                assert_eq!(pattern, "12b");
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert!(PatternTable::parse("1", 1, 1).is_err());
        assert!(PatternTable::parse(".1.", 1, 1).is_err());
        assert!(PatternTable::parse("a#b", 1, 1).is_err());
    }

    #[test]
    fn test_malformed_exceptions() {
        let mut table = table("1ba");
        assert!(table.add_exception("li--nie").is_err());
        assert!(table.add_exception("-linie").is_err());
        assert!(table.add_exception("li-n1e").is_err());
    }
}
