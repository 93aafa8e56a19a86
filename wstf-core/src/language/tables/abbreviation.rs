//! Abbreviation trie
//!
//! Compact trie used to decide whether the word in front of a period is a
//! known abbreviation. Keys are lowercased per character, so lookups are
//! case-insensitive and walk the candidate forward without allocating.

use std::collections::HashMap;

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks end of abbreviation
    is_end: bool,
}

impl TrieNode {
    fn empty() -> Self {
        Self {
            children: HashMap::new(),
            is_end: false,
        }
    }
}

/// Case-insensitive abbreviation trie
#[derive(Debug, Clone)]
pub struct Trie {
    /// All nodes in contiguous storage
    nodes: Vec<TrieNode>,
    /// Number of distinct abbreviations inserted
    len: usize,
}

impl Trie {
    /// Create empty trie
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::empty()],
            len: 0,
        }
    }

    /// Build from configuration categories
    pub fn from_categories(categories: &HashMap<String, Vec<String>>) -> Self {
        let mut trie = Self::new();

        for abbr in categories.values().flatten() {
            // Configured entries may carry their final dot or not
            let abbr = abbr.trim().trim_end_matches('.');
            if !abbr.is_empty() {
                trie.insert(abbr);
            }
        }

        trie
    }

    /// Insert abbreviation into trie
    pub fn insert(&mut self, abbreviation: &str) {
        let mut current_idx = 0u32;

        for ch in abbreviation.chars() {
            let ch = normalize(ch);
            let next_idx = match self.nodes[current_idx as usize].children.get(&ch) {
                Some(&child_idx) => child_idx,
                None => {
                    let new_idx = self.nodes.len() as u32;
                    self.nodes.push(TrieNode::empty());
                    self.nodes[current_idx as usize]
                        .children
                        .insert(ch, new_idx);
                    new_idx
                }
            };

            current_idx = next_idx;
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            self.len += 1;
        }
        node.is_end = true;
    }

    /// Whether `candidate` (without its final dot) is a known abbreviation
    pub fn contains(&self, candidate: &str) -> bool {
        self.find(candidate).is_some_and(|node| node.is_end)
    }

    /// Number of abbreviations
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, candidate: &str) -> Option<&TrieNode> {
        if candidate.is_empty() {
            return None;
        }

        let mut current_idx = 0u32;
        for ch in candidate.chars() {
            let ch = normalize(ch);
            current_idx = *self.nodes[current_idx as usize].children.get(&ch)?;
        }

        Some(&self.nodes[current_idx as usize])
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn normalize(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
