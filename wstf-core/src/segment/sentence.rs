//! Rule-based sentence splitter
//!
//! A sentence ends at a run of terminator characters (plus any closing
//! quotes or brackets) that is followed by whitespace or the end of the
//! text. A lone period is kept inside the sentence when the word in front
//! of it is an abbreviation, matches a suppression rule (optionally only
//! in front of a given next word), or when the next word starts in
//! lowercase.

use crate::capability::{Sentence, SentenceSplitter};
use crate::error::ProfileResult;
use crate::language::config::Sentences;
use crate::language::tables::{Suppresser, Trie};
use std::collections::HashMap;

/// Sentence splitter driven by a language configuration
#[derive(Debug, Clone)]
pub struct RuleSentenceSplitter {
    terminators: Vec<char>,
    closing: Vec<char>,
    abbreviations: Trie,
    suppress: Suppresser,
    paragraph_breaks: bool,
    lowercase_continuation: bool,
}

impl RuleSentenceSplitter {
    /// Build from the `[sentences]` and `[abbreviations]` configuration
    pub fn from_config(
        sentences: &Sentences,
        abbreviations: &HashMap<String, Vec<String>>,
    ) -> ProfileResult<Self> {
        Ok(Self {
            terminators: sentences.terminators.clone(),
            closing: sentences.closing.clone(),
            abbreviations: Trie::from_categories(abbreviations),
            suppress: Suppresser::from_rules(&sentences.suppress)?,
            paragraph_breaks: sentences.paragraph_breaks,
            lowercase_continuation: sentences.lowercase_continuation,
        })
    }

    /// Number of known abbreviations
    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    /// Number of suppression rules
    pub fn suppression_rule_count(&self) -> usize {
        self.suppress.len()
    }

    #[inline]
    fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    #[inline]
    fn is_closing(&self, ch: char) -> bool {
        self.closing.contains(&ch)
    }

    /// Whether the period at `dot` continues the sentence
    fn is_suppressed(&self, text: &str, dot: usize, rest: &str) -> bool {
        let word_start = text[..dot]
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = text[word_start..=dot].trim_start_matches(|c: char| !c.is_alphanumeric());
        let candidate = word.trim_end_matches('.');

        if !candidate.is_empty() && self.abbreviations.contains(candidate) {
            tracing::trace!(word, "abbreviation keeps sentence open");
            return true;
        }

        let next = rest
            .split_whitespace()
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if let Some(rule) = self.suppress.matching_rule(word, next) {
            tracing::trace!(word, rule, "suppression rule keeps sentence open");
            return true;
        }

        self.continues_lowercase(rest)
    }

    fn continues_lowercase(&self, rest: &str) -> bool {
        self.lowercase_continuation
            && rest
                .trim_start()
                .chars()
                .next()
                .is_some_and(char::is_lowercase)
    }

    /// Whether the newline at `pos` starts a blank line
    fn is_paragraph_break(text: &str, pos: usize) -> bool {
        text[pos + 1..]
            .chars()
            .find(|c| *c == '\n' || !c.is_whitespace())
            .is_some_and(|c| c == '\n')
    }
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, text: &'a str, start: usize, end: usize) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let offset = start + (slice.len() - slice.trim_start().len());
    sentences.push(Sentence::new(trimmed, offset));
}

impl SentenceSplitter for RuleSentenceSplitter {
    fn split<'a>(&self, text: &'a str) -> Vec<Sentence<'a>> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            if ch == '\n' && self.paragraph_breaks && Self::is_paragraph_break(text, pos) {
                push_sentence(&mut sentences, text, start, pos);
                start = pos;
                continue;
            }

            if !self.is_terminator(ch) {
                continue;
            }

            let mut end = pos + ch.len_utf8();
            let mut run_len = 1;
            let mut dotted = ch == '.' || ch == '…';

            while let Some(&(next_pos, next)) = chars.peek() {
                if self.is_terminator(next) {
                    run_len += 1;
                    dotted &= next == '.' || next == '…';
                } else if !self.is_closing(next) {
                    break;
                }
                end = next_pos + next.len_utf8();
                chars.next();
            }

            let rest = &text[end..];
            if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
                continue;
            }

            let continues = if run_len == 1 && ch == '.' {
                self.is_suppressed(text, pos, rest)
            } else {
                dotted && self.continues_lowercase(rest)
            };
            if continues {
                continue;
            }

            push_sentence(&mut sentences, text, start, end);
            start = end;
        }

        push_sentence(&mut sentences, text, start, text.len());
        sentences
    }
}
