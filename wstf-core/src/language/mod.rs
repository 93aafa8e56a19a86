//! Language profiles and the configuration they are built from
//!
//! Built-in languages are embedded TOML configurations paired with a
//! hyphenation pattern table. External configurations use the same schema.

pub mod config;
pub(crate) mod loader;
pub mod profile;
pub mod tables;

pub use config::LanguageConfig;
pub use loader::builtin_languages;
pub use profile::{LanguageProfile, LanguageProfileBuilder, ResourceSummary};
