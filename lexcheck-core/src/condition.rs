//! Per-token conditions
//!
//! A closed set of condition kinds. Literal and regex conditions each own one
//! token slot; anchors test a position and consume nothing.

use crate::error::{CoreError, Result};
use crate::token::Token;
use regex::Regex;

/// One step of a token pattern
#[derive(Debug, Clone)]
pub enum Condition {
    /// Token text equals the literal
    ExactToken {
        /// Literal text
        text: String,
        /// Compare case-sensitively
        case_sensitive: bool,
    },
    /// Whole token text matches the regex
    RegexToken(TokenRegex),
    /// Some reading of the token starts with the prefix
    PosTagPrefix(String),
    /// Position is at the start of the sentence
    SentenceStartAnchor,
    /// No word token follows the position
    SentenceEndAnchor,
}

/// A regex compiled to match the whole token text
#[derive(Debug, Clone)]
pub struct TokenRegex {
    source: String,
    case_sensitive: bool,
    regex: Regex,
}

impl TokenRegex {
    /// Compile `pattern`, anchored at both ends
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self> {
        let flags = if case_sensitive { "" } else { "(?i)" };
        let regex = Regex::new(&format!("{flags}^(?:{pattern})$")).map_err(|source| {
            CoreError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            case_sensitive,
            regex,
        })
    }

    /// The pattern as written
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl Condition {
    /// Exact literal match
    pub fn exact(text: &str, case_sensitive: bool) -> Self {
        Self::ExactToken {
            text: text.to_string(),
            case_sensitive,
        }
    }

    /// Regex match over the token text
    pub fn regex(pattern: &str, case_sensitive: bool) -> Result<Self> {
        Ok(Self::RegexToken(TokenRegex::new(pattern, case_sensitive)?))
    }

    /// Part-of-speech prefix match
    pub fn pos_prefix(prefix: &str) -> Self {
        Self::PosTagPrefix(prefix.to_string())
    }

    /// Anchors match a position and do not consume a token
    #[inline]
    pub fn is_anchor(&self) -> bool {
        matches!(self, Self::SentenceStartAnchor | Self::SentenceEndAnchor)
    }

    /// Evaluate a token-consuming condition; anchors never accept a token
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            Self::ExactToken {
                text,
                case_sensitive: true,
            } => token.text() == text,
            Self::ExactToken {
                text,
                case_sensitive: false,
            } => eq_ignore_case(token.text(), text),
            Self::RegexToken(regex) => regex.is_match(token.text()),
            Self::PosTagPrefix(prefix) => token.has_pos_prefix(prefix),
            Self::SentenceStartAnchor | Self::SentenceEndAnchor => false,
        }
    }

    /// Evaluate an anchor at position `pos`; non-anchors never hold at a position
    pub fn holds_at(&self, tokens: &[Token], pos: usize) -> bool {
        match self {
            Self::SentenceStartAnchor => tokens
                .get(..pos)
                .is_some_and(|before| before.iter().all(is_start_marker)),
            Self::SentenceEndAnchor => tokens
                .get(pos..)
                .is_some_and(|after| after.iter().all(is_trailing)),
            _ => false,
        }
    }
}

fn is_start_marker(token: &Token) -> bool {
    token.is_sentence_start() && token.text().is_empty()
}

fn is_trailing(token: &Token) -> bool {
    token.is_non_word() || token.is_paragraph_end() || token.text().is_empty()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
