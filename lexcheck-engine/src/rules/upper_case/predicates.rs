//! Token-level clauses of the casing check
//!
//! Each function looks at the token array and one index and nothing else, so
//! the clauses can be tested one at a time. The rule flags a token only when
//! all of them agree.

use lexcheck_core::text::{is_all_uppercase, starts_with_uppercase};
use lexcheck_core::Token;

/// Tokens after which a capitalized word is probably part of a title or name
pub const PREV_MARKERS: [&str; 5] = [":", "née", "of", "\"", "'"];

/// Capitalized words that are fine even when tagged as verbs
pub const EXCEPTIONS: [&str; 8] = [
    "Bin", "Spot", "French", "Roman", "Hawking", "Square", "Japan", "Premier",
];

/// Tokens that end a prose sentence
const TERMINATORS: [&str; 4] = [".", "!", "?", ":"];

/// Whether the sentence ends like prose rather than a headline
///
/// Walks back from the last token, skipping paragraph ends and non-word
/// tokens, looking for a terminator. The first token is never inspected.
pub fn is_prose(tokens: &[Token]) -> bool {
    for token in tokens.iter().skip(1).rev() {
        if TERMINATORS.contains(&token.text()) {
            return true;
        }
        if !token.is_paragraph_end() && !token.is_non_word() {
            return false;
        }
    }
    false
}

/// Non-empty, not immunized, and not the pronoun "I"
pub fn is_candidate_text(token: &Token) -> bool {
    !token.text().is_empty() && !token.is_immunized() && token.text() != "I"
}

/// Starts uppercase without being an all-caps acronym
pub fn has_initial_capital(token: &Token) -> bool {
    starts_with_uppercase(token.text()) && !is_all_uppercase(token.text())
}

/// No substantive word occurs before `i`
///
/// Sentence-start markers, empty tokens and non-word tokens do not end the
/// sentence opening.
pub fn is_at_sentence_start(tokens: &[Token], i: usize) -> bool {
    tokens[..i.min(tokens.len())]
        .iter()
        .all(|t| t.is_sentence_start() || t.text().is_empty() || t.is_non_word())
}

/// Some reading is a verb and none is a proper noun
pub fn is_verb_not_proper_noun(token: &Token) -> bool {
    token.has_pos_prefix("VB") && !token.has_pos_prefix("NNP")
}

/// The token before `i` starts uppercase
pub fn prev_is_uppercase(tokens: &[Token], i: usize) -> bool {
    i > 0 && tokens.get(i - 1).is_some_and(|t| starts_with_uppercase(t.text()))
}

/// The previous-token clause, keeping the index-2 exception
///
/// A capitalized predecessor usually means a name ("Sex Pistols"), except
/// right after the first word of the sentence.
pub fn prev_allows(tokens: &[Token], i: usize) -> bool {
    !prev_is_uppercase(tokens, i) || i == 2
}

/// The token after `i` starts uppercase
pub fn next_is_uppercase(tokens: &[Token], i: usize) -> bool {
    tokens
        .get(i + 1)
        .is_some_and(|t| starts_with_uppercase(t.text()))
}

/// The token before `i` is one of `markers`
pub fn prev_is_one_of(tokens: &[Token], i: usize, markers: &[&str]) -> bool {
    i > 0 && tokens.get(i - 1).is_some_and(|t| markers.contains(&t.text()))
}

/// `i` opens "<word> of <Capitalized>", as in "The History of Rome"
pub fn opens_of_phrase(tokens: &[Token], i: usize) -> bool {
    match (tokens.get(i + 1), tokens.get(i + 2)) {
        (Some(next), Some(after)) => next.text() == "of" && starts_with_uppercase(after.text()),
        _ => false,
    }
}

/// The word is on the fixed exception list
pub fn is_exception(token: &Token) -> bool {
    EXCEPTIONS.contains(&token.text())
}
