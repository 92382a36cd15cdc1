//! Checker configuration
//!
//! Configuration comes from a TOML file or from [`CheckerConfigBuilder`]:
//!
//! ```toml
//! language = "en"
//! enabled_rules = ["EN_DASH_RULE"]
//! disabled_rules = []
//! threads = 4
//!
//! [resources]
//! compounds = "lists/compounds.txt"
//! spelling_words = "lists/words.txt"
//! ```

use crate::error::{EngineError, Result};
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Word list overrides; unset entries use the embedded lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResourcePaths {
    /// Capitalized phrases the casing rule leaves alone
    pub specific_case: Option<PathBuf>,
    /// Hyphenated compounds for the dash rule
    pub compounds: Option<PathBuf>,
    /// `phrase=suggestion` list for the replace rule
    pub replacements: Option<PathBuf>,
    /// Known words for the word-list speller
    pub spelling_words: Option<PathBuf>,
}

impl ResourcePaths {
    /// Resolve relative paths against `base`
    fn resolve_against(&mut self, base: &Path) {
        for path in [
            &mut self.specific_case,
            &mut self.compounds,
            &mut self.replacements,
            &mut self.spelling_words,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Checker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckerConfig {
    /// Language code (ISO 639-1)
    pub language: String,
    /// Rules to run even though they are off by default
    pub enabled_rules: Vec<String>,
    /// Rules not to run
    pub disabled_rules: Vec<String>,
    /// Worker threads for batch checking (None = rayon's global pool)
    pub threads: Option<usize>,
    /// Word list overrides
    pub resources: ResourcePaths,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            enabled_rules: Vec::new(),
            disabled_rules: Vec::new(),
            threads: None,
            resources: ResourcePaths::default(),
        }
    }
}

impl CheckerConfig {
    /// Create a configuration for `language` with default rules
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            ..Default::default()
        }
    }

    /// Create a builder
    pub fn builder() -> CheckerConfigBuilder {
        CheckerConfigBuilder::new()
    }

    /// Parse and validate TOML
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML file; relative resource paths resolve against its directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&input)?;
        if let Some(dir) = path.parent() {
            config.resources.resolve_against(dir);
        }
        Ok(config)
    }

    /// Check for values no checker can be built from
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(EngineError::Config("language must not be empty".into()));
        }
        Language::from_code(&self.language)?;

        if self.threads == Some(0) {
            return Err(EngineError::Config("threads must be at least 1".into()));
        }

        if let Some(id) = self
            .enabled_rules
            .iter()
            .find(|id| self.disabled_rules.contains(id))
        {
            return Err(EngineError::Config(format!(
                "rule '{id}' is both enabled and disabled"
            )));
        }
        Ok(())
    }

    /// The configured language
    pub fn language(&self) -> Result<Language> {
        Language::from_code(&self.language)
    }
}

/// Builder for [`CheckerConfig`]
#[derive(Debug, Default)]
pub struct CheckerConfigBuilder {
    config: CheckerConfig,
}

impl CheckerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.config.language = language.into();
        self
    }

    /// Turn on a rule that is off by default
    pub fn enable_rule<S: Into<String>>(mut self, id: S) -> Self {
        self.config.enabled_rules.push(id.into());
        self
    }

    /// Turn off a rule
    pub fn disable_rule<S: Into<String>>(mut self, id: S) -> Self {
        self.config.disabled_rules.push(id.into());
        self
    }

    /// Set the batch thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Override the casing exception list
    pub fn specific_case<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.resources.specific_case = Some(path.into());
        self
    }

    /// Override the compound list
    pub fn compounds<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.resources.compounds = Some(path.into());
        self
    }

    /// Override the replacement list
    pub fn replacements<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.resources.replacements = Some(path.into());
        self
    }

    /// Use a word-list speller loaded from `path`
    pub fn spelling_words<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.resources.spelling_words = Some(path.into());
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<CheckerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = CheckerConfig::default();
        assert_eq!(config.language, "en");
        assert!(config.validate().is_ok());
        assert_eq!(CheckerConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_parse_full() {
        let config = CheckerConfig::from_toml_str(
            r#"
            language = "pt"
            enabled_rules = ["PT_POSAO_DASH_RULE"]
            threads = 2

            [resources]
            compounds = "/tmp/compounds.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.language().unwrap(), Language::Portuguese);
        assert_eq!(config.enabled_rules, vec!["PT_POSAO_DASH_RULE"]);
        assert_eq!(config.threads, Some(2));
        assert_eq!(
            config.resources.compounds,
            Some(PathBuf::from("/tmp/compounds.txt"))
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(matches!(
            CheckerConfig::from_toml_str("langauge = \"en\""),
            Err(EngineError::Toml(_))
        ));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            CheckerConfig::builder().language("").build(),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            CheckerConfig::builder().language("xx").build(),
            Err(EngineError::UnsupportedLanguage { .. })
        ));
        assert!(matches!(
            CheckerConfig::builder()
                .enable_rule("EN_DASH_RULE")
                .disable_rule("EN_DASH_RULE")
                .build(),
            Err(EngineError::Config(_))
        ));
        assert!(CheckerConfig::builder().threads(Some(0)).build().is_err());
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lexcheck.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "language = \"en\"\n[resources]\ncompounds = \"lists/compounds.txt\"\nspelling_words = \"/abs/words.txt\""
        )
        .unwrap();

        let config = CheckerConfig::from_file(&path).unwrap();
        assert_eq!(
            config.resources.compounds,
            Some(dir.path().join("lists/compounds.txt"))
        );
        assert_eq!(
            config.resources.spelling_words,
            Some(PathBuf::from("/abs/words.txt"))
        );
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            CheckerConfig::from_file("/nonexistent/lexcheck.toml"),
            Err(EngineError::Io { .. })
        ));
    }
}
