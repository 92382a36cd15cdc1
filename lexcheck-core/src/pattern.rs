//! Token sequence patterns
//!
//! A pattern is an ordered list of conditions matched against a contiguous
//! token window. Rule catalogs declare patterns as data with [`ConditionSpec`]
//! tables which are compiled once when the rule is built.

use crate::condition::Condition;
use crate::error::Result;
use crate::token::Token;
use std::ops::Range;

/// Declarative form of a [`Condition`], usable in `const` tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionSpec<'a> {
    /// Case-insensitive literal
    Token(&'a str),
    /// Case-sensitive literal
    CsToken(&'a str),
    /// Case-insensitive regex
    Regex(&'a str),
    /// Case-sensitive regex
    CsRegex(&'a str),
    /// Part-of-speech prefix
    Pos(&'a str),
    /// Sentence start anchor
    SentStart,
    /// Sentence end anchor
    SentEnd,
}

impl ConditionSpec<'_> {
    /// Compile into a condition; fails only on an invalid regex
    pub fn compile(&self) -> Result<Condition> {
        Ok(match *self {
            Self::Token(text) => Condition::exact(text, false),
            Self::CsToken(text) => Condition::exact(text, true),
            Self::Regex(pattern) => Condition::regex(pattern, false)?,
            Self::CsRegex(pattern) => Condition::regex(pattern, true)?,
            Self::Pos(prefix) => Condition::pos_prefix(prefix),
            Self::SentStart => Condition::SentenceStartAnchor,
            Self::SentEnd => Condition::SentenceEndAnchor,
        })
    }
}

/// Ordered sequence of conditions
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    conditions: Vec<Condition>,
}

impl Pattern {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    /// Compile a declarative pattern
    pub fn compile(specs: &[ConditionSpec<'_>]) -> Result<Self> {
        let conditions = specs
            .iter()
            .map(ConditionSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { conditions })
    }

    /// Compile a whole table of declarative patterns
    pub fn compile_all(table: &[&[ConditionSpec<'_>]]) -> Result<Vec<Self>> {
        table.iter().map(|specs| Self::compile(specs)).collect()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Number of tokens a successful match consumes
    pub fn token_len(&self) -> usize {
        self.conditions.iter().filter(|c| !c.is_anchor()).count()
    }

    /// Whether the pattern matches starting at token `start`
    #[inline]
    pub fn matches(&self, tokens: &[Token], start: usize) -> bool {
        self.match_at(tokens, start).is_some()
    }

    /// Walk the pattern from `start`, returning the consumed token window
    ///
    /// Windows that would run past the end of `tokens` do not match.
    pub fn match_at(&self, tokens: &[Token], start: usize) -> Option<Range<usize>> {
        if start > tokens.len() {
            return None;
        }

        let mut pos = start;
        for condition in &self.conditions {
            if condition.is_anchor() {
                if !condition.holds_at(tokens, pos) {
                    return None;
                }
                continue;
            }
            let token = tokens.get(pos)?;
            if !condition.accepts(token) {
                return None;
            }
            pos += 1;
        }

        Some(start..pos)
    }
}
