//! Built-in capability implementations backed by a language configuration

pub mod hyphenator;
pub mod sentence;
pub mod word;

pub use hyphenator::PatternHyphenator;
pub use sentence::RuleSentenceSplitter;
pub use word::UnicodeWordSegmenter;
