//! Exception automaton
//!
//! Compiles a word or phrase list into an Aho-Corasick automaton and finds
//! every occurrence in one pass over the text, overlapping and nested hits
//! included. Each entry carries a value: the entry itself for exception lists,
//! the canonical form for compound lists, or a suggestion list for replace
//! rules.

mod shared;

pub use shared::SharedAutomaton;

use crate::boundary::{is_standalone, WordBoundary};
use crate::error::Result;
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::HashSet;

/// One occurrence of an entry in scanned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Byte offset of the first matched byte
    pub start: usize,
    /// Byte offset one past the last matched byte
    pub end: usize,
    /// The matched slice of the scanned text
    pub matched: &'a str,
    /// Value attached to the matched entry
    pub value: &'a str,
}

impl Hit<'_> {
    /// Whether the hit shares at least one byte with `start..end`
    #[inline]
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && start < self.end
    }

    /// Whether the hit spans all of `start..end`
    #[inline]
    pub fn covers(&self, start: usize, end: usize) -> bool {
        self.start <= start && self.end >= end
    }

    /// Whether the hit stands alone in `text` under `boundary`
    pub fn is_standalone<B>(&self, text: &str, boundary: &B) -> bool
    where
        B: WordBoundary + ?Sized,
    {
        is_standalone(text, self.start, self.end, boundary)
    }
}

/// Builder options for [`ExceptionAutomaton`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomatonBuilder {
    ascii_case_insensitive: bool,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match ASCII letters regardless of case
    pub fn ascii_case_insensitive(mut self, yes: bool) -> Self {
        self.ascii_case_insensitive = yes;
        self
    }

    /// Build from entries that map to themselves
    pub fn build<I, S>(self, entries: I) -> Result<ExceptionAutomaton>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_map(entries.into_iter().map(|entry| {
            let entry = entry.as_ref().to_string();
            (entry.clone(), entry)
        }))
    }

    /// Build from `(entry, value)` pairs
    ///
    /// Empty entries are skipped. For duplicate entries the first value wins.
    pub fn build_map<I, K, V>(self, pairs: I) -> Result<ExceptionAutomaton>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        let mut values = Vec::new();

        for (entry, value) in pairs {
            let entry = entry.into();
            if entry.is_empty() || !seen.insert(entry.clone()) {
                continue;
            }
            entries.push(entry);
            values.push(value.into());
        }

        let matcher = if entries.is_empty() {
            None
        } else {
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::Standard)
                    .ascii_case_insensitive(self.ascii_case_insensitive)
                    .build(&entries)?,
            )
        };

        Ok(ExceptionAutomaton {
            matcher,
            entries,
            values,
        })
    }
}

/// Compiled multi-pattern scanner over a fixed dictionary
#[derive(Debug, Clone)]
pub struct ExceptionAutomaton {
    matcher: Option<AhoCorasick>,
    entries: Vec<String>,
    values: Vec<String>,
}

impl ExceptionAutomaton {
    /// Build a case-sensitive automaton whose entries map to themselves
    pub fn build<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AutomatonBuilder::new().build(entries)
    }

    /// Build a case-sensitive automaton from `(entry, value)` pairs
    pub fn build_map<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        AutomatonBuilder::new().build_map(pairs)
    }

    pub fn builder() -> AutomatonBuilder {
        AutomatonBuilder::new()
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry occurrence in `text`, ordered by end offset
    pub fn scan<'a>(&'a self, text: &'a str) -> Vec<Hit<'a>> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };

        matcher
            .find_overlapping_iter(text)
            .map(|m| Hit {
                start: m.start(),
                end: m.end(),
                matched: &text[m.start()..m.end()],
                value: &self.values[m.pattern().as_usize()],
            })
            .collect()
    }

    /// Hits that stand alone as words under `boundary`
    pub fn scan_standalone<'a, B>(&'a self, text: &'a str, boundary: &B) -> Vec<Hit<'a>>
    where
        B: WordBoundary + ?Sized,
    {
        let mut hits = self.scan(text);
        hits.retain(|hit| hit.is_standalone(text, boundary));
        hits
    }
}
