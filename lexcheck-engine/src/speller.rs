//! Spell-checking capability
//!
//! The casing rule asks whether the lowercased form of a word is a real word
//! before suggesting it. Any backend can be plugged in through [`Speller`];
//! [`WordListSpeller`] is a set-backed implementation.

use crate::error::Result;
use crate::wordlist::WordSource;
use std::collections::HashSet;
use std::fmt::Debug;
use thiserror::Error;

/// Errors reported by a spell-checking backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellerError {
    /// No backend is configured or it is not loaded
    #[error("spell checker unavailable")]
    Unavailable,

    /// The backend failed while answering
    #[error("spell checker backend error: {0}")]
    Backend(String),
}

/// Spell-checking backend
pub trait Speller: Debug + Send + Sync {
    /// Whether `word` is not a known word
    fn is_misspelled(&self, word: &str) -> std::result::Result<bool, SpellerError>;
}

/// Placeholder used when no backend is configured
///
/// Every query reports [`SpellerError::Unavailable`], which rules treat as a
/// reason not to flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpeller;

impl Speller for NoSpeller {
    fn is_misspelled(&self, _word: &str) -> std::result::Result<bool, SpellerError> {
        Err(SpellerError::Unavailable)
    }
}

/// Speller backed by a set of known words
///
/// Lookups try the word as given and then fully lowercased.
#[derive(Debug, Clone, Default)]
pub struct WordListSpeller {
    words: HashSet<String>,
}

impl WordListSpeller {
    /// Build from known words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a plain word list
    pub fn load(source: &WordSource) -> Result<Self> {
        Ok(Self::from_words(source.words()?))
    }

    /// Number of known words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no words are known
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Speller for WordListSpeller {
    fn is_misspelled(&self, word: &str) -> std::result::Result<bool, SpellerError> {
        if self.words.contains(word) {
            return Ok(false);
        }
        Ok(!self.words.contains(&word.to_lowercase()))
    }
}
