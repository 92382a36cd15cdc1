//! Core error types
//!
//! Everything here is a construction-time failure. Matching itself never fails.

use thiserror::Error;

/// Errors raised while building sentences, patterns or automata
#[derive(Error, Debug)]
pub enum CoreError {
    /// A regex condition could not be compiled
    #[error("invalid regex '{pattern}': {source}")]
    InvalidRegex {
        /// The offending pattern text
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A token's offsets are out of range or not on a char boundary
    #[error("token '{text}' has invalid offsets {start}..{end} for sentence of length {len}")]
    InvalidOffsets {
        /// Token text
        text: String,
        /// Start offset
        start: usize,
        /// End offset
        end: usize,
        /// Sentence length in bytes
        len: usize,
    },

    /// Tokens overlap or are out of order
    #[error("token at {start} overlaps the previous token ending at {previous_end}")]
    OverlappingTokens {
        /// Start offset of the offending token
        start: usize,
        /// End offset of the previous token
        previous_end: usize,
    },

    /// The automaton could not be compiled
    #[error("failed to build exception automaton: {0}")]
    AutomatonBuild(#[from] aho_corasick::BuildError),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
