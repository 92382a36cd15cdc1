//! Anti-pattern suppression
//!
//! Anti-patterns describe contexts that look like titles, enumerations or
//! markdown rather than prose. A candidate token covered by any anti-pattern
//! window is never reported.

use crate::error::Result;
use crate::pattern::{ConditionSpec, Pattern};
use crate::token::Token;
use std::ops::Range;

/// Library of suppressing patterns for one rule
#[derive(Debug, Clone, Default)]
pub struct AntiPatterns {
    patterns: Vec<Pattern>,
    /// Longest token window any pattern can consume
    max_len: usize,
}

impl AntiPatterns {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        let max_len = patterns.iter().map(Pattern::token_len).max().unwrap_or(0);
        Self { patterns, max_len }
    }

    /// Compile a declarative table
    pub fn compile(table: &[&[ConditionSpec<'_>]]) -> Result<Self> {
        Ok(Self::new(Pattern::compile_all(table)?))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any anti-pattern matches a window containing `index`
    pub fn covers(&self, tokens: &[Token], index: usize) -> bool {
        self.covering_window(tokens, index).is_some()
    }

    /// First matching window that contains `index`
    pub fn covering_window(&self, tokens: &[Token], index: usize) -> Option<Range<usize>> {
        if index >= tokens.len() {
            return None;
        }

        let first_start = index.saturating_sub(self.max_len.saturating_sub(1));
        self.patterns.iter().find_map(|pattern| {
            (first_start..=index).find_map(|start| {
                pattern
                    .match_at(tokens, start)
                    .filter(|window| window.contains(&index))
            })
        })
    }
}
