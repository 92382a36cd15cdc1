//! Supported languages and their embedded resources

use crate::error::{EngineError, Result};
use crate::wordlist::WordSource;
use lexcheck_core::{AsciiLetters, LettersWith, UnicodeAlphanumeric, WordBoundary};
use std::fmt;
use std::str::FromStr;

/// Letters that continue a Portuguese word besides ASCII
pub const PORTUGUESE_LETTERS: &str = "ÂâÃãÇçÊêÓóÔôÕõü";

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English
    English,
    /// Portuguese, post-1990-reform spelling
    Portuguese,
    /// Russian
    Russian,
    /// Arabic
    Arabic,
}

impl Language {
    /// Every supported language
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Portuguese,
        Language::Russian,
        Language::Arabic,
    ];

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Portuguese => "pt",
            Language::Russian => "ru",
            Language::Arabic => "ar",
        }
    }

    /// Look up a language by code or English name, case-insensitively
    pub fn from_code(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            "ru" | "russian" => Ok(Language::Russian),
            "ar" | "arabic" => Ok(Language::Arabic),
            _ => Err(EngineError::UnsupportedLanguage {
                code: code.to_string(),
            }),
        }
    }

    /// Character class that continues a word in this language
    pub fn boundary(&self) -> &'static dyn WordBoundary {
        match self {
            Language::English => &AsciiLetters,
            Language::Portuguese => &LettersWith(PORTUGUESE_LETTERS),
            Language::Russian | Language::Arabic => &UnicodeAlphanumeric,
        }
    }

    /// Embedded compound list, for languages with a dash rule
    pub fn compounds(&self) -> Option<WordSource> {
        match self {
            Language::English => Some(WordSource::Embedded {
                name: "en/compounds.txt",
                content: include_str!("../resources/en/compounds.txt"),
            }),
            Language::Portuguese => Some(WordSource::Embedded {
                name: "pt/post-reform-compounds.txt",
                content: include_str!("../resources/pt/post-reform-compounds.txt"),
            }),
            Language::Russian => Some(WordSource::Embedded {
                name: "ru/compounds.txt",
                content: include_str!("../resources/ru/compounds.txt"),
            }),
            Language::Arabic => None,
        }
    }

    /// Embedded replacement list, for languages with a replace rule
    pub fn replacements(&self) -> Option<WordSource> {
        match self {
            Language::English => Some(WordSource::Embedded {
                name: "en/nonstandard.txt",
                content: include_str!("../resources/en/nonstandard.txt"),
            }),
            Language::Arabic => Some(WordSource::Embedded {
                name: "ar/barbarisms.txt",
                content: include_str!("../resources/ar/barbarisms.txt"),
            }),
            Language::Portuguese | Language::Russian => None,
        }
    }

    /// Embedded list of capitalized phrases the casing rule leaves alone
    pub fn specific_case(&self) -> Option<WordSource> {
        match self {
            Language::English => Some(WordSource::Embedded {
                name: "en/specific_case.txt",
                content: include_str!("../resources/en/specific_case.txt"),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}
