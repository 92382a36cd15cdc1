//! Language rules and checking entry point
//!
//! This crate turns the detection substrate of `lexcheck-core` into
//! concrete, configurable checks: word lists, per-language rule catalogs,
//! the spell-checking capability, and the [`Checker`] that runs the active
//! rules over tokenized sentences, one at a time or in parallel batches.
//!
//! # Example
//!
//! ```rust
//! use lexcheck_engine::{Checker, CheckerConfig, SentenceBuilder, WordListSpeller};
//! use std::sync::Arc;
//!
//! let speller = Arc::new(WordListSpeller::from_words(["like", "spaghetti"]));
//! let checker = Checker::with_speller(CheckerConfig::new("en"), speller).unwrap();
//!
//! let sentence = SentenceBuilder::new()
//!     .word("I", &["PRP"])
//!     .word("really", &["RB"])
//!     .word("Like", &["VB", "VBP"])
//!     .word("spaghetti", &["NN"])
//!     .punct(".")
//!     .build();
//!
//! let matches = checker.check(&sentence).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].replacements, vec!["like"]);
//! ```

#![warn(missing_docs)]

pub mod checker;
pub mod config;
pub mod error;
pub mod language;
pub mod registry;
pub mod rules;
pub mod speller;
pub mod wordlist;

pub use checker::Checker;
pub use config::{CheckerConfig, CheckerConfigBuilder, ResourcePaths};
pub use error::{EngineError, Result};
pub use language::Language;
pub use registry::{active_rules, catalog, RuleDescriptor};
pub use rules::{DashRule, Rule, SimpleReplaceRule, UpperCaseRule};
pub use speller::{NoSpeller, Speller, SpellerError, WordListSpeller};
pub use wordlist::{Replacement, WordSource};

// Re-export from core for convenience
pub use lexcheck_core::{RuleMatch, Sentence, SentenceBuilder, SharedAutomaton, Token};
