//! Checker entry point
//!
//! A [`Checker`] owns the active rules for one language. It is immutable
//! after construction and can be shared across threads; every call checks
//! one sentence independently of all others.

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::language::Language;
use crate::registry;
use crate::rules::Rule;
use crate::speller::{NoSpeller, Speller, WordListSpeller};
use crate::wordlist::WordSource;
use lexcheck_core::{RuleMatch, Sentence};
use std::sync::Arc;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs the active rules of one language over sentences
#[derive(Debug)]
pub struct Checker {
    language: Language,
    rules: Vec<Arc<dyn Rule>>,
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Checker {
    /// Create a checker with the default rules for `language`
    pub fn with_language(language: &str) -> Result<Self> {
        Self::new(CheckerConfig::new(language))
    }

    /// Create a checker from configuration
    ///
    /// The speller is loaded from `resources.spelling_words` when set;
    /// otherwise the casing rule runs without one and flags nothing.
    pub fn new(config: CheckerConfig) -> Result<Self> {
        let speller: Arc<dyn Speller> = match &config.resources.spelling_words {
            Some(path) => Arc::new(WordListSpeller::load(&WordSource::File(path.clone()))?),
            None => {
                if config.language().ok() == Some(Language::English) {
                    tracing::warn!("no spelling word list configured; uppercase checks are skipped");
                }
                Arc::new(NoSpeller)
            }
        };
        Self::with_speller(config, speller)
    }

    /// Create a checker with an explicit spell-checking backend
    pub fn with_speller(config: CheckerConfig, speller: Arc<dyn Speller>) -> Result<Self> {
        config.validate()?;
        let language = config.language()?;
        let started = Instant::now();
        let rules = registry::build_rules(&config, &speller)?;

        tracing::debug!(
            language = %language,
            rules = rules.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "checker ready"
        );

        Ok(Self {
            language,
            rules,
            #[cfg(feature = "parallel")]
            pool: build_pool(config.threads)?,
        })
    }

    /// Language being checked
    pub fn language(&self) -> Language {
        self.language
    }

    /// Active rules in catalog order
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Ids of the active rules
    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Issues in one sentence, ordered by start offset
    ///
    /// Matches at the same offset keep catalog order.
    pub fn check(&self, sentence: &Sentence) -> Result<Vec<RuleMatch>> {
        let mut matches = Vec::new();
        for rule in &self.rules {
            let found = rule.match_sentence(sentence)?;
            tracing::trace!(rule = rule.id(), matches = found.len(), "rule checked");
            matches.extend(found);
        }
        matches.sort_by_key(|m| m.start);
        Ok(matches)
    }

    /// Check many sentences; results keep the input order
    #[cfg(feature = "parallel")]
    pub fn check_batch(&self, sentences: &[Sentence]) -> Result<Vec<Vec<RuleMatch>>> {
        let run = || {
            sentences
                .par_iter()
                .map(|sentence| self.check(sentence))
                .collect::<Result<Vec<_>>>()
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }

    /// Check many sentences; results keep the input order
    #[cfg(not(feature = "parallel"))]
    pub fn check_batch(&self, sentences: &[Sentence]) -> Result<Vec<Vec<RuleMatch>>> {
        sentences.iter().map(|sentence| self.check(sentence)).collect()
    }
}

#[cfg(feature = "parallel")]
fn build_pool(threads: Option<usize>) -> Result<Option<rayon::ThreadPool>> {
    let Some(threads) = threads else {
        return Ok(None);
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("lexcheck-{i}"))
        .build()?;
    Ok(Some(pool))
}
