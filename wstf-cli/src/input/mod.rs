//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// A text to score and where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// The text itself
    pub text: String,
}

impl TextInput {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
        }
    }
}
