//! Pattern based hyphenator

use crate::capability::{Hyphenator, Syllables};
use crate::language::tables::patterns::lowercase;
use crate::language::tables::PatternTable;
use smallvec::SmallVec;

/// Hyphenator backed by a Liang pattern table
#[derive(Debug, Clone)]
pub struct PatternHyphenator {
    table: PatternTable,
}

impl PatternHyphenator {
    pub fn new(table: PatternTable) -> Self {
        Self { table }
    }
}

impl Hyphenator for PatternHyphenator {
    fn hyphenate<'a>(&self, word: &'a str) -> Syllables<'a> {
        if word.is_empty() {
            return Syllables::new();
        }

        let mut lowered = Vec::with_capacity(word.len());
        let mut byte_offsets: SmallVec<[usize; 16]> = SmallVec::new();
        for (offset, ch) in word.char_indices() {
            byte_offsets.push(offset);
            lowered.push(lowercase(ch));
        }

        let mut syllables = Syllables::new();
        let mut start = 0;
        for point in self.table.break_points(&lowered) {
            let split = byte_offsets[point];
            syllables.push(&word[start..split]);
            start = split;
        }
        syllables.push(&word[start..]);
        syllables
    }
}
