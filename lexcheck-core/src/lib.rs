//! Detection substrate for rule-based text checking
//!
//! This crate holds the pieces language rules are built from:
//! - **Token model**: [`Sentence`] and [`Token`] as produced by an upstream
//!   tokenizer and tagger
//! - **Pattern matcher**: [`Pattern`]s of literal, regex, part-of-speech and
//!   anchor [`Condition`]s evaluated over token windows
//! - **Anti-pattern suppressor**: [`AntiPatterns`] answering whether a token is
//!   covered by a context that should never be flagged
//! - **Exception automaton**: [`ExceptionAutomaton`] scanning raw text for many
//!   dictionary entries in one pass, with [`SharedAutomaton`] for build-once
//!   sharing across threads
//!
//! Matching never fails; only construction (invalid regexes, malformed
//! sentences, automaton limits) returns [`CoreError`].
//!
//! # Example
//!
//! ```rust
//! use lexcheck_core::{AntiPatterns, ConditionSpec as C, SentenceBuilder};
//!
//! let sentence = SentenceBuilder::new()
//!     .word("BBC", &["NNP"])
//!     .word("Culture", &["NN"])
//!     .build();
//!
//! let anti = AntiPatterns::compile(&[&[C::Token("BBC"), C::Token("Culture")]]).unwrap();
//! assert!(anti.covers(sentence.tokens(), 2));
//! ```

pub mod automaton;
pub mod boundary;
pub mod condition;
pub mod error;
pub mod pattern;
pub mod rule_match;
pub mod suppress;
pub mod text;
pub mod token;

pub use automaton::{AutomatonBuilder, ExceptionAutomaton, Hit, SharedAutomaton};
pub use boundary::{is_standalone, AsciiLetters, LettersWith, UnicodeAlphanumeric, WordBoundary};
pub use condition::{Condition, TokenRegex};
pub use error::{CoreError, Result};
pub use pattern::{ConditionSpec, Pattern};
pub use rule_match::RuleMatch;
pub use suppress::AntiPatterns;
pub use token::{PosTag, Sentence, SentenceBuilder, Token, TokenFlags};
