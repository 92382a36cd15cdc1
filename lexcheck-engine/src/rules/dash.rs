//! Dashes typed in place of hyphens
//!
//! Compound lists hold hyphenated forms such as "well-known". The rule
//! compiles every dash spelling of every compound ("well – known",
//! "well—known", ...) into one automaton and reports each standalone
//! occurrence with the hyphenated form as the suggestion.
//!
//! Building the automaton dominates the rule's cost, so the rule is off
//! unless configuration enables it.

use crate::error::{EngineError, Result};
use crate::language::Language;
use crate::rules::Rule;
use crate::wordlist::{dash_variants, WordSource};
use lexcheck_core::{ExceptionAutomaton, RuleMatch, Sentence, SharedAutomaton, WordBoundary};
use std::sync::Arc;
use std::time::Instant;

/// Per-language identity of the rule
#[derive(Debug, Clone, Copy)]
struct Flavour {
    id: &'static str,
    description: &'static str,
    message: &'static str,
}

const ENGLISH: Flavour = Flavour {
    id: "EN_DASH_RULE",
    description: "Checks if hyphenated words were spelled with dashes (e.g., 'T — shirt' instead of 'T-shirt').",
    message: "A dash was used instead of a hyphen.",
};

const PORTUGUESE: Flavour = Flavour {
    id: "PT_POSAO_DASH_RULE",
    description: "Travessões no lugar de hífens",
    message: "Um travessão foi utilizado em vez de um hífen.",
};

const RUSSIAN: Flavour = Flavour {
    id: "RU_DASH_RULE",
    description: "Проверка на использование тире вместо дефиса (то есть «из — за» вместо «из-за»).",
    message: "Использовано тире вместо дефиса.",
};

static EN_COMPOUNDS: SharedAutomaton = SharedAutomaton::new();
static PT_COMPOUNDS: SharedAutomaton = SharedAutomaton::new();
static RU_COMPOUNDS: SharedAutomaton = SharedAutomaton::new();

fn flavour(language: Language) -> Result<Flavour> {
    match language {
        Language::English => Ok(ENGLISH),
        Language::Portuguese => Ok(PORTUGUESE),
        Language::Russian => Ok(RUSSIAN),
        Language::Arabic => Err(EngineError::UnsupportedLanguage {
            code: language.code().to_string(),
        }),
    }
}

fn shared_slot(language: Language) -> Option<&'static SharedAutomaton> {
    match language {
        Language::English => Some(&EN_COMPOUNDS),
        Language::Portuguese => Some(&PT_COMPOUNDS),
        Language::Russian => Some(&RU_COMPOUNDS),
        Language::Arabic => None,
    }
}

/// Build the dash-variant automaton for a compound list
pub fn compile_compounds(compounds: &[String]) -> Result<ExceptionAutomaton> {
    let automaton =
        ExceptionAutomaton::build_map(compounds.iter().flat_map(|c| dash_variants(c)))?;
    Ok(automaton)
}

/// Dash/compound rule for one language
#[derive(Debug)]
pub struct DashRule {
    flavour: Flavour,
    automaton: Arc<ExceptionAutomaton>,
    boundary: &'static dyn WordBoundary,
}

impl DashRule {
    /// Build with the language's embedded compound list
    ///
    /// The automaton is built once per language and process.
    pub fn for_language(language: Language) -> Result<Self> {
        let unsupported = || EngineError::UnsupportedLanguage {
            code: language.code().to_string(),
        };
        let source = language.compounds().ok_or_else(unsupported)?;
        let slot = shared_slot(language).ok_or_else(unsupported)?;
        Self::with_compounds(language, &source, slot)
    }

    /// Build with compounds from `source`, cached in `slot`
    pub fn with_compounds(
        language: Language,
        source: &WordSource,
        slot: &SharedAutomaton,
    ) -> Result<Self> {
        let flavour = flavour(language)?;
        let started = Instant::now();
        let automaton = Arc::clone(
            slot.get_or_try_init(|| -> Result<_> { compile_compounds(&source.compounds()?) })?,
        );
        tracing::debug!(
            rule = flavour.id,
            variants = automaton.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built rule"
        );

        Ok(Self {
            flavour,
            automaton,
            boundary: language.boundary(),
        })
    }
}

impl Rule for DashRule {
    fn id(&self) -> &str {
        self.flavour.id
    }

    fn description(&self) -> &str {
        self.flavour.description
    }

    fn is_default_enabled(&self) -> bool {
        false
    }

    fn match_sentence(&self, sentence: &Sentence) -> Result<Vec<RuleMatch>> {
        let mut matches: Vec<RuleMatch> = self
            .automaton
            .scan_standalone(sentence.text(), self.boundary)
            .into_iter()
            .map(|hit| {
                RuleMatch::new(self.flavour.id, hit.start, hit.end, self.flavour.message)
                    .with_replacement(hit.value)
            })
            .collect();
        matches.sort_by_key(|m| (m.start, m.end));
        Ok(matches)
    }
}
