//! Word list loading
//!
//! Rules take their dictionaries from line-oriented text lists, either
//! compiled into the binary or read from disk. Three formats share the same
//! reader; every format trims lines and skips blank lines and `#` comments.
//!
//! - **Words**: one word or phrase per line.
//! - **Compounds**: hyphenated forms. A trailing `+` marks a compound that is
//!   only written as one word (skipped), a trailing `*` marks one that is only
//!   written hyphenated (marker stripped). Lines without a hyphen are ignored.
//! - **Replacements**: `phrase=suggestion1|suggestion2`.

use crate::error::{EngineError, Result};
use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

/// Dash spellings a hyphenated compound gets mistyped with
pub const DASH_VARIANTS: [&str; 4] = ["\u{2013}", "\u{2014}", " \u{2013} ", " \u{2014} "];

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Compiled into the binary
    Embedded {
        /// Name used in error messages
        name: &'static str,
        /// List contents
        content: &'static str,
    },
    /// Read from disk when the rule is built
    File(PathBuf),
}

/// One line of a replacement list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Text to look for
    pub phrase: String,
    /// Suggested alternatives, in list order
    pub suggestions: Vec<String>,
}

impl WordSource {
    /// Name of the list for messages and logs
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            WordSource::Embedded { name, .. } => Cow::Borrowed(name),
            WordSource::File(path) => path.to_string_lossy(),
        }
    }

    /// Raw list contents
    pub fn read(&self) -> Result<Cow<'static, str>> {
        match self {
            WordSource::Embedded { content, .. } => Ok(Cow::Borrowed(content)),
            WordSource::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|source| EngineError::Io {
                    path: path.clone(),
                    source,
                }),
        }
    }

    /// Read as a plain word list
    pub fn words(&self) -> Result<Vec<String>> {
        let words = parse_words(&self.read()?);
        tracing::debug!(list = %self.name(), entries = words.len(), "loaded word list");
        Ok(words)
    }

    /// Read as a compound list
    pub fn compounds(&self) -> Result<Vec<String>> {
        let compounds = parse_compounds(&self.name(), &self.read()?)?;
        tracing::debug!(list = %self.name(), entries = compounds.len(), "loaded compound list");
        Ok(compounds)
    }

    /// Read as a replacement list
    pub fn replacements(&self) -> Result<Vec<Replacement>> {
        let replacements = parse_replacements(&self.name(), &self.read()?)?;
        tracing::debug!(
            list = %self.name(),
            entries = replacements.len(),
            "loaded replacement list"
        );
        Ok(replacements)
    }
}

/// Non-comment lines with their 1-based line numbers
fn entries(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_start_matches('\u{feff}').trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn line_error(list: &str, line: usize, reason: impl Into<String>) -> EngineError {
    EngineError::WordList {
        list: list.to_string(),
        line,
        reason: reason.into(),
    }
}

/// Parse a plain word list
pub fn parse_words(content: &str) -> Vec<String> {
    entries(content).map(|(_, line)| line.to_string()).collect()
}

/// Parse a compound list into hyphenated canonical forms
pub fn parse_compounds(list: &str, content: &str) -> Result<Vec<String>> {
    let mut compounds = Vec::new();
    for (line_no, line) in entries(content) {
        if line.ends_with('+') {
            continue;
        }
        let compound = line.strip_suffix('*').unwrap_or(line).trim();
        if compound.is_empty() {
            return Err(line_error(list, line_no, "empty compound"));
        }
        if !compound.contains('-') {
            continue;
        }
        if compound.starts_with('-') || compound.ends_with('-') {
            return Err(line_error(
                list,
                line_no,
                format!("compound '{compound}' starts or ends with a hyphen"),
            ));
        }
        compounds.push(compound.to_string());
    }
    Ok(compounds)
}

/// Dash-written variants of `compound`, each paired with the hyphenated form
pub fn dash_variants(compound: &str) -> impl Iterator<Item = (String, String)> + '_ {
    DASH_VARIANTS
        .iter()
        .map(move |dash| (compound.replace('-', dash), compound.to_string()))
}

/// Parse a `phrase=suggestion1|suggestion2` list
pub fn parse_replacements(list: &str, content: &str) -> Result<Vec<Replacement>> {
    let mut replacements = Vec::new();
    for (line_no, line) in entries(content) {
        let Some((phrase, suggestions)) = line.split_once('=') else {
            return Err(line_error(list, line_no, "expected 'phrase=suggestion'"));
        };
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Err(line_error(list, line_no, "empty phrase"));
        }
        let suggestions: Vec<String> = suggestions
            .split('|')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if suggestions.is_empty() {
            return Err(line_error(
                list,
                line_no,
                format!("no suggestions for '{phrase}'"),
            ));
        }
        replacements.push(Replacement {
            phrase: phrase.to_string(),
            suggestions,
        });
    }
    Ok(replacements)
}
