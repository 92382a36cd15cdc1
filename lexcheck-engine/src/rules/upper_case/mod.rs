//! Uppercase misuse
//!
//! Finds verbs written with an initial capital in running text, as in
//! "I really Like spaghetti.", and suggests the lowercase form. Only verb
//! readings are considered and headlines are skipped. Titles, list items
//! and known capitalized phrases are left alone.

mod anti_patterns;
pub mod predicates;

use crate::error::{EngineError, Result};
use crate::language::Language;
use crate::rules::Rule;
use crate::speller::{Speller, SpellerError};
use crate::wordlist::WordSource;
use anti_patterns::ANTI_PATTERNS;
use lexcheck_core::text::lowercase_first_char;
use lexcheck_core::{
    AntiPatterns, ExceptionAutomaton, Hit, RuleMatch, Sentence, SharedAutomaton, Token,
    WordBoundary,
};
use predicates::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Rule id
pub const ID: &str = "EN_UPPER_CASE";

const DESCRIPTION: &str = "Checks wrong uppercase spelling of words that are not proper nouns";

const MESSAGE: &str =
    "Only proper nouns start with an uppercase character (there are exceptions for headlines).";

/// Exception phrases from the embedded list, shared by every rule instance
static SPECIFIC_CASE: SharedAutomaton = SharedAutomaton::new();

/// Casing rule for English
#[derive(Debug)]
pub struct UpperCaseRule {
    anti_patterns: AntiPatterns,
    exceptions: Arc<ExceptionAutomaton>,
    boundary: &'static dyn WordBoundary,
    speller: Arc<dyn Speller>,
    reported_unavailable: AtomicBool,
}

impl UpperCaseRule {
    /// Build with the embedded exception list
    pub fn new(speller: Arc<dyn Speller>) -> Result<Self> {
        let source = Language::English
            .specific_case()
            .ok_or_else(|| EngineError::UnsupportedLanguage {
                code: Language::English.code().to_string(),
            })?;
        Self::with_exceptions(speller, &source, &SPECIFIC_CASE)
    }

    /// Build with exceptions from `source`, cached in `slot`
    ///
    /// The slot is filled on first use and reused afterwards; a slot that
    /// already holds an automaton is not rebuilt from `source`.
    pub fn with_exceptions(
        speller: Arc<dyn Speller>,
        source: &WordSource,
        slot: &SharedAutomaton,
    ) -> Result<Self> {
        let started = Instant::now();
        let anti_patterns = AntiPatterns::compile(ANTI_PATTERNS)?;
        let exceptions = Arc::clone(slot.get_or_try_init(|| -> Result<_> {
            Ok(ExceptionAutomaton::build(source.words()?)?)
        })?);
        tracing::debug!(
            rule = ID,
            anti_patterns = anti_patterns.len(),
            exceptions = exceptions.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built rule"
        );

        Ok(Self {
            anti_patterns,
            exceptions,
            boundary: Language::English.boundary(),
            speller,
            reported_unavailable: AtomicBool::new(false),
        })
    }

    /// Whether the purely local clauses allow flagging token `i`
    fn is_local_candidate(tokens: &[Token], i: usize) -> bool {
        let token = &tokens[i];
        is_candidate_text(token)
            && has_initial_capital(token)
            && !is_at_sentence_start(tokens, i)
            && is_verb_not_proper_noun(token)
            && token.is_tagged()
            && prev_allows(tokens, i)
            && !next_is_uppercase(tokens, i)
            && !prev_is_one_of(tokens, i, &PREV_MARKERS)
            && !opens_of_phrase(tokens, i)
            && !is_exception(token)
    }

    /// Whether the lowercased word is known, failing open
    ///
    /// `Ok(false)` when the speller is unavailable, so the candidate is
    /// dropped rather than flagged without a dictionary check.
    fn lowercase_is_word(&self, lowercase: &str) -> Result<bool> {
        match self.speller.is_misspelled(lowercase) {
            Ok(misspelled) => Ok(!misspelled),
            Err(SpellerError::Unavailable) => {
                if !self.reported_unavailable.swap(true, Ordering::Relaxed) {
                    tracing::warn!(rule = ID, "speller unavailable, uppercase candidates are not flagged");
                }
                tracing::trace!(word = lowercase, "speller unavailable, not flagging");
                Ok(false)
            }
            Err(err) => Err(err.into()),
        }
    }
}

impl Rule for UpperCaseRule {
    fn id(&self) -> &str {
        ID
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn match_sentence(&self, sentence: &Sentence) -> Result<Vec<RuleMatch>> {
        let tokens = sentence.tokens();
        if !is_prose(tokens) {
            tracing::trace!(text = sentence.text(), "no terminal punctuation, skipping");
            return Ok(Vec::new());
        }

        let mut exception_hits: Option<Vec<Hit<'_>>> = None;
        let mut matches = Vec::new();
        for (i, token) in tokens.iter().enumerate() {
            if !Self::is_local_candidate(tokens, i) || self.anti_patterns.covers(tokens, i) {
                continue;
            }

            let suggestion = lowercase_first_char(token.text());
            if !self.lowercase_is_word(&suggestion)? {
                continue;
            }

            let hits = exception_hits.get_or_insert_with(|| {
                self.exceptions.scan_standalone(sentence.text(), self.boundary)
            });
            if hits.iter().any(|hit| hit.overlaps(token.start(), token.end())) {
                continue;
            }

            matches.push(
                RuleMatch::new(ID, token.start(), token.end(), MESSAGE).with_replacement(suggestion),
            );
        }
        Ok(matches)
    }
}
