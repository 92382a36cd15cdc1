//! Engine error types
//!
//! Everything except [`EngineError::Speller`] is raised while a checker is
//! being built. A built checker only fails when the spell-checking backend
//! reports an error.

use crate::speller::SpellerError;
use lexcheck_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Pattern or automaton construction failed
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// A resource file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A word list line could not be parsed
    #[error("{list}:{line}: {reason}")]
    WordList {
        /// Name of the list
        list: String,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Configuration file is not valid TOML for the schema
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration values are inconsistent
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No rules exist for the language
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The requested language code
        code: String,
    },

    /// Configuration names a rule the language does not have
    #[error("unknown rule id '{id}' for language '{language}'")]
    UnknownRule {
        /// The unknown id
        id: String,
        /// Language code of the catalog searched
        language: String,
    },

    /// Spell-checking backend failed during matching
    #[error("spell checker failed: {0}")]
    Speller(#[from] SpellerError),

    /// Worker pool could not be created
    #[cfg(feature = "parallel")]
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
