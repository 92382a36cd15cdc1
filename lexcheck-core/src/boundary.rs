//! Word boundary predicates
//!
//! Language-specific classification of characters as word or non-word. Used
//! to reject dictionary hits that are only a substring of a longer word.

use std::fmt::Debug;

/// Classifies characters as part of a word
pub trait WordBoundary: Debug + Send + Sync {
    /// Whether `ch` belongs to a word
    fn is_word_char(&self, ch: char) -> bool;
}

/// ASCII letters only (`[a-zA-Z]`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiLetters;

impl WordBoundary for AsciiLetters {
    #[inline]
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }
}

/// ASCII letters plus an explicit set of extra letters, e.g. diacritics
#[derive(Debug, Clone, Copy)]
pub struct LettersWith(pub &'static str);

impl WordBoundary for LettersWith {
    #[inline]
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_ascii_alphabetic() || self.0.contains(ch)
    }
}

/// Any Unicode letter or digit
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeAlphanumeric;

impl WordBoundary for UnicodeAlphanumeric {
    #[inline]
    fn is_word_char(&self, ch: char) -> bool {
        ch.is_alphanumeric()
    }
}

/// Whether `text[start..end]` stands alone as a word
///
/// Both neighbouring characters must be non-word, or the span must touch the
/// edge of the text. Offsets off a char boundary never stand alone.
pub fn is_standalone<B>(text: &str, start: usize, end: usize, boundary: &B) -> bool
where
    B: WordBoundary + ?Sized,
{
    let (Some(before), Some(after)) = (text.get(..start), text.get(end..)) else {
        return false;
    };
    let left_ok = before
        .chars()
        .next_back()
        .map_or(true, |ch| !boundary.is_word_char(ch));
    let right_ok = after
        .chars()
        .next()
        .map_or(true, |ch| !boundary.is_word_char(ch));
    left_ok && right_ok
}
