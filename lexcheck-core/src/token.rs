//! Token and sentence model
//!
//! Sentences arrive from an upstream tokenizer/tagger. Offsets are UTF-8 byte
//! offsets into the raw sentence text so that spans can be sliced directly.

use crate::error::{CoreError, Result};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

/// Interned part-of-speech label
///
/// Equal labels share one allocation, so cloning and comparing is cheap.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PosTag(Arc<str>);

static TAG_INTERNER: OnceLock<Mutex<HashSet<Arc<str>>>> = OnceLock::new();

impl PosTag {
    /// Intern a tag label
    pub fn new(tag: &str) -> Self {
        let interner = TAG_INTERNER.get_or_init(|| Mutex::new(HashSet::new()));
        // A poisoned interner still holds valid labels
        let mut set = interner.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = set.get(tag) {
            return Self(existing.clone());
        }
        let interned: Arc<str> = Arc::from(tag);
        set.insert(interned.clone());
        Self(interned)
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this label starts with `prefix`
    #[inline]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PosTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

/// Boolean token attributes set by the upstream pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenFlags {
    /// Sentence-start marker token
    pub is_sentence_start: bool,
    /// Last token of a paragraph
    pub is_paragraph_end: bool,
    /// Punctuation or symbol only
    pub is_non_word: bool,
    /// Excluded from flagging by an earlier stage
    pub is_immunized: bool,
    /// Has a confirmed morphological analysis
    pub is_tagged: bool,
}

/// One lexical unit of a sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    start: usize,
    end: usize,
    readings: SmallVec<[PosTag; 2]>,
    flags: TokenFlags,
}

impl Token {
    /// Create an untagged token starting at `start`
    ///
    /// The end offset is derived from the text length and the non-word flag
    /// from its characters.
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        let is_non_word = !text.is_empty() && !text.chars().any(char::is_alphanumeric);
        Self {
            text,
            start,
            end,
            readings: SmallVec::new(),
            flags: TokenFlags {
                is_non_word,
                ..TokenFlags::default()
            },
        }
    }

    /// The empty marker token that opens every sentence
    pub fn sentence_start_marker() -> Self {
        Self::new("", 0).sentence_start()
    }

    /// Attach part-of-speech readings; a token with readings counts as tagged
    pub fn with_readings<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<PosTag>,
    {
        self.readings.extend(tags.into_iter().map(Into::into));
        self.flags.is_tagged = !self.readings.is_empty();
        self
    }

    /// Replace all flags
    pub fn with_flags(mut self, flags: TokenFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Mark as the sentence-start marker
    pub fn sentence_start(mut self) -> Self {
        self.flags.is_sentence_start = true;
        self
    }

    /// Mark as the last token of a paragraph
    pub fn paragraph_end(mut self) -> Self {
        self.flags.is_paragraph_end = true;
        self
    }

    /// Mark as immunized
    pub fn immunized(mut self) -> Self {
        self.flags.is_immunized = true;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn readings(&self) -> &[PosTag] {
        &self.readings
    }

    pub fn flags(&self) -> TokenFlags {
        self.flags
    }

    pub fn is_sentence_start(&self) -> bool {
        self.flags.is_sentence_start
    }

    pub fn is_paragraph_end(&self) -> bool {
        self.flags.is_paragraph_end
    }

    pub fn is_non_word(&self) -> bool {
        self.flags.is_non_word
    }

    pub fn is_immunized(&self) -> bool {
        self.flags.is_immunized
    }

    pub fn is_tagged(&self) -> bool {
        self.flags.is_tagged
    }

    /// Whether any reading starts with `prefix`
    pub fn has_pos_prefix(&self, prefix: &str) -> bool {
        self.readings.iter().any(|tag| tag.has_prefix(prefix))
    }

    /// Whitespace-only tokens are dropped before matching
    fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }
}

/// Raw sentence text plus its tokens
///
/// Whitespace tokens are filtered out on construction; every remaining token
/// is in left-to-right, non-overlapping order with offsets into `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence, validating token offsets
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Result<Self> {
        let text = text.into();
        let len = text.len();
        let mut previous_end = 0;
        let mut kept = Vec::with_capacity(tokens.len());

        for token in tokens {
            if token.start > token.end
                || token.end > len
                || !text.is_char_boundary(token.start)
                || !text.is_char_boundary(token.end)
            {
                return Err(CoreError::InvalidOffsets {
                    text: token.text,
                    start: token.start,
                    end: token.end,
                    len,
                });
            }
            if token.start < previous_end {
                return Err(CoreError::OverlappingTokens {
                    start: token.start,
                    previous_end,
                });
            }
            previous_end = token.end;
            if !token.is_whitespace() {
                kept.push(token);
            }
        }

        Ok(Self { text, tokens: kept })
    }

    /// Raw text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Non-whitespace tokens
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Incremental sentence assembly with computed offsets
///
/// Starts with the sentence-start marker token. Words and spaced symbols are
/// separated by a single space; punctuation attaches to the previous token.
#[derive(Debug)]
pub struct SentenceBuilder {
    text: String,
    tokens: Vec<Token>,
    glue_next: bool,
}

impl SentenceBuilder {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            tokens: vec![Token::sentence_start_marker()],
            glue_next: true,
        }
    }

    /// Append a space-separated word with its readings
    pub fn word(self, text: &str, tags: &[&str]) -> Self {
        self.push(text, tags, true)
    }

    /// Append punctuation directly after the previous token
    pub fn punct(self, text: &str) -> Self {
        self.push(text, &[], false)
    }

    /// Append an untagged space-separated token such as a dash or a number
    pub fn spaced(self, text: &str) -> Self {
        self.push(text, &[], true)
    }

    /// Append a space-separated token the next token attaches to, e.g. `(`
    pub fn opening(mut self, text: &str) -> Self {
        self = self.push(text, &[], true);
        self.glue_next = true;
        self
    }

    /// Mark the last token as paragraph end
    pub fn paragraph_end(mut self) -> Self {
        if let Some(last) = self.tokens.last_mut() {
            last.flags.is_paragraph_end = true;
        }
        self
    }

    /// Mark the last token as immunized
    pub fn immunize_last(mut self) -> Self {
        if let Some(last) = self.tokens.last_mut() {
            last.flags.is_immunized = true;
        }
        self
    }

    pub fn build(self) -> Sentence {
        Sentence {
            text: self.text,
            tokens: self.tokens,
        }
    }

    fn push(mut self, text: &str, tags: &[&str], spaced: bool) -> Self {
        if spaced && !self.glue_next {
            self.text.push(' ');
        }
        self.glue_next = false;
        let token = Token::new(text, self.text.len()).with_readings(tags.iter().copied());
        self.text.push_str(text);
        self.tokens.push(token);
        self
    }
}

impl Default for SentenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
