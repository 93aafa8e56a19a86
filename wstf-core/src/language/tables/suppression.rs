//! Regex rules that keep a period from ending a sentence

use crate::error::ProfileResult;
use crate::language::config::SuppressionRule;
use regex::Regex;

#[derive(Debug, Clone)]
struct Rule {
    word: Regex,
    /// Required shape of the following word
    after: Option<Regex>,
    description: String,
}

/// Compiled suppression rules
#[derive(Debug, Clone, Default)]
pub struct Suppresser {
    rules: Vec<Rule>,
}

impl Suppresser {
    /// Compile the configured rules
    pub fn from_rules(rules: &[SuppressionRule]) -> ProfileResult<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> ProfileResult<Rule> {
                Ok(Rule {
                    word: Regex::new(&rule.pattern)?,
                    after: rule.after.as_deref().map(Regex::new).transpose()?,
                    description: rule.description.clone(),
                })
            })
            .collect::<ProfileResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// Description of the first rule matching `word`, which includes its final
    /// period, given the word that follows it (empty at the end of the text)
    pub fn matching_rule(&self, word: &str, next: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| {
                rule.word.is_match(word)
                    && rule.after.as_ref().map_or(true, |after| after.is_match(next))
            })
            .map(|rule| rule.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
