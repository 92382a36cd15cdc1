//! Phrase replacement lists
//!
//! Looks up every phrase of a `phrase=suggestion1|suggestion2` list in the
//! sentence text and reports standalone occurrences with all suggestions.

use crate::error::{EngineError, Result};
use crate::language::Language;
use crate::rules::Rule;
use crate::wordlist::WordSource;
use lexcheck_core::text::{starts_with_uppercase, uppercase_first_char};
use lexcheck_core::{ExceptionAutomaton, RuleMatch, Sentence, SharedAutomaton, WordBoundary};
use std::sync::Arc;
use std::time::Instant;

/// Joins suggestions inside the automaton values
const VALUE_SEPARATOR: &str = "|";

/// Static description of a replace rule
#[derive(Debug, Clone, Copy)]
pub struct ReplaceFlavour {
    /// Rule id
    pub id: &'static str,
    /// Rule description
    pub description: &'static str,
    /// Message template; `$match` and `$suggestions` are substituted
    pub message: &'static str,
    /// Separator between suggestions in the message
    pub separator: &'static str,
    /// Match ASCII letters regardless of case
    pub case_insensitive: bool,
}

/// English nonstandard words and phrases
pub const ENGLISH_NONSTANDARD: ReplaceFlavour = ReplaceFlavour {
    id: "EN_NONSTANDARD_SIMPLE_REPLACE",
    description: "Nonstandard words and phrases",
    message: "'$match' is nonstandard. Use $suggestions instead.",
    separator: " or ",
    case_insensitive: true,
};

/// Arabic colloquial and foreign words
pub const ARABIC_BARBARISMS: ReplaceFlavour = ReplaceFlavour {
    id: "AR_BARBARISMS_REPLACE",
    description: "كلمات بديلة للكلمات العامية أو الأجنبية",
    message: "الكلمة عامية يفضل أن يقال $suggestions",
    separator: " أو ",
    case_insensitive: false,
};

static EN_NONSTANDARD: SharedAutomaton = SharedAutomaton::new();
static AR_BARBARISMS: SharedAutomaton = SharedAutomaton::new();

/// Replace rule flavour for `language`, if it has one
pub fn flavour_for(language: Language) -> Option<ReplaceFlavour> {
    match language {
        Language::English => Some(ENGLISH_NONSTANDARD),
        Language::Arabic => Some(ARABIC_BARBARISMS),
        Language::Portuguese | Language::Russian => None,
    }
}

fn shared_slot(language: Language) -> Option<&'static SharedAutomaton> {
    match language {
        Language::English => Some(&EN_NONSTANDARD),
        Language::Arabic => Some(&AR_BARBARISMS),
        Language::Portuguese | Language::Russian => None,
    }
}

/// Replacement-list rule
#[derive(Debug)]
pub struct SimpleReplaceRule {
    flavour: ReplaceFlavour,
    automaton: Arc<ExceptionAutomaton>,
    boundary: &'static dyn WordBoundary,
}

impl SimpleReplaceRule {
    /// Build with the language's embedded replacement list
    pub fn for_language(language: Language) -> Result<Self> {
        let unsupported = || EngineError::UnsupportedLanguage {
            code: language.code().to_string(),
        };
        let flavour = flavour_for(language).ok_or_else(unsupported)?;
        let source = language.replacements().ok_or_else(unsupported)?;
        let slot = shared_slot(language).ok_or_else(unsupported)?;
        Self::with_replacements(flavour, language.boundary(), &source, slot)
    }

    /// Build from an explicit flavour and list, cached in `slot`
    pub fn with_replacements(
        flavour: ReplaceFlavour,
        boundary: &'static dyn WordBoundary,
        source: &WordSource,
        slot: &SharedAutomaton,
    ) -> Result<Self> {
        let started = Instant::now();
        let automaton = Arc::clone(slot.get_or_try_init(|| -> Result<_> {
            let pairs = source.replacements()?.into_iter().map(|r| {
                let value = r.suggestions.join(VALUE_SEPARATOR);
                (r.phrase, value)
            });
            Ok(ExceptionAutomaton::builder()
                .ascii_case_insensitive(flavour.case_insensitive)
                .build_map(pairs)?)
        })?);
        tracing::debug!(
            rule = flavour.id,
            phrases = automaton.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built rule"
        );

        Ok(Self {
            flavour,
            automaton,
            boundary,
        })
    }

    fn suggestions(&self, matched: &str, value: &str) -> Vec<String> {
        let capitalize = self.flavour.case_insensitive && starts_with_uppercase(matched);
        value
            .split(VALUE_SEPARATOR)
            .map(|s| {
                if capitalize {
                    uppercase_first_char(s)
                } else {
                    s.to_string()
                }
            })
            .collect()
    }
}

impl Rule for SimpleReplaceRule {
    fn id(&self) -> &str {
        self.flavour.id
    }

    fn description(&self) -> &str {
        self.flavour.description
    }

    fn match_sentence(&self, sentence: &Sentence) -> Result<Vec<RuleMatch>> {
        let mut matches: Vec<RuleMatch> = self
            .automaton
            .scan_standalone(sentence.text(), self.boundary)
            .into_iter()
            .map(|hit| {
                let suggestions = self.suggestions(hit.matched, hit.value);
                let message = self
                    .flavour
                    .message
                    .replace("$match", hit.matched)
                    .replace("$suggestions", &suggestions.join(self.flavour.separator));
                RuleMatch::new(self.flavour.id, hit.start, hit.end, message)
                    .with_replacements(suggestions)
                    .with_separator(self.flavour.separator)
            })
            .collect();
        matches.sort_by_key(|m| (m.start, m.end));
        Ok(matches)
    }
}
