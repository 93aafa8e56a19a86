//! Runtime lookup tables built from a language configuration

pub mod abbreviation;
pub mod patterns;
pub mod suppression;

pub use abbreviation::Trie;
pub use patterns::{BreakPoints, PatternTable};
pub use suppression::Suppresser;
