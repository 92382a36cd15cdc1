//! Rule catalogs per language
//!
//! Each language has a fixed list of rule descriptors. The registry decides
//! from the descriptors and the configuration which rules are active, and
//! only those are ever constructed, so a default-off rule costs nothing
//! unless it is enabled.

use crate::config::{CheckerConfig, ResourcePaths};
use crate::error::{EngineError, Result};
use crate::language::Language;
use crate::rules::{simple_replace, upper_case, DashRule, Rule, SimpleReplaceRule, UpperCaseRule};
use crate::speller::Speller;
use crate::wordlist::WordSource;
use lexcheck_core::SharedAutomaton;
use std::fmt;
use std::sync::Arc;

/// Inputs available to rule constructors
#[derive(Debug)]
pub struct BuildContext<'a> {
    /// Language being checked
    pub language: Language,
    /// Word list overrides
    pub resources: &'a ResourcePaths,
    /// Spell-checking backend
    pub speller: &'a Arc<dyn Speller>,
}

type BuildFn = fn(&BuildContext<'_>) -> Result<Arc<dyn Rule>>;

/// Catalog entry for one rule
#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    /// Rule id
    pub id: &'static str,
    /// Whether the rule runs without being enabled in configuration
    pub default_enabled: bool,
    build: BuildFn,
}

impl fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("id", &self.id)
            .field("default_enabled", &self.default_enabled)
            .finish_non_exhaustive()
    }
}

impl RuleDescriptor {
    /// Construct the rule
    pub fn build(&self, ctx: &BuildContext<'_>) -> Result<Arc<dyn Rule>> {
        (self.build)(ctx)
    }
}

// Overridden lists get a private slot: the process-wide slots hold the
// embedded lists.

fn build_upper_case(ctx: &BuildContext<'_>) -> Result<Arc<dyn Rule>> {
    let speller = Arc::clone(ctx.speller);
    let rule = match &ctx.resources.specific_case {
        Some(path) => UpperCaseRule::with_exceptions(
            speller,
            &WordSource::File(path.clone()),
            &SharedAutomaton::new(),
        )?,
        None => UpperCaseRule::new(speller)?,
    };
    Ok(Arc::new(rule))
}

fn build_dash(ctx: &BuildContext<'_>) -> Result<Arc<dyn Rule>> {
    let rule = match &ctx.resources.compounds {
        Some(path) => DashRule::with_compounds(
            ctx.language,
            &WordSource::File(path.clone()),
            &SharedAutomaton::new(),
        )?,
        None => DashRule::for_language(ctx.language)?,
    };
    Ok(Arc::new(rule))
}

fn build_simple_replace(ctx: &BuildContext<'_>) -> Result<Arc<dyn Rule>> {
    let rule = match (&ctx.resources.replacements, simple_replace::flavour_for(ctx.language)) {
        (Some(path), Some(flavour)) => SimpleReplaceRule::with_replacements(
            flavour,
            ctx.language.boundary(),
            &WordSource::File(path.clone()),
            &SharedAutomaton::new(),
        )?,
        _ => SimpleReplaceRule::for_language(ctx.language)?,
    };
    Ok(Arc::new(rule))
}

const ENGLISH: &[RuleDescriptor] = &[
    RuleDescriptor {
        id: upper_case::ID,
        default_enabled: true,
        build: build_upper_case,
    },
    RuleDescriptor {
        id: "EN_DASH_RULE",
        default_enabled: false,
        build: build_dash,
    },
    RuleDescriptor {
        id: "EN_NONSTANDARD_SIMPLE_REPLACE",
        default_enabled: true,
        build: build_simple_replace,
    },
];

const PORTUGUESE: &[RuleDescriptor] = &[RuleDescriptor {
    id: "PT_POSAO_DASH_RULE",
    default_enabled: false,
    build: build_dash,
}];

const RUSSIAN: &[RuleDescriptor] = &[RuleDescriptor {
    id: "RU_DASH_RULE",
    default_enabled: false,
    build: build_dash,
}];

const ARABIC: &[RuleDescriptor] = &[RuleDescriptor {
    id: "AR_BARBARISMS_REPLACE",
    default_enabled: true,
    build: build_simple_replace,
}];

/// All rules known for `language`
pub fn catalog(language: Language) -> &'static [RuleDescriptor] {
    match language {
        Language::English => ENGLISH,
        Language::Portuguese => PORTUGUESE,
        Language::Russian => RUSSIAN,
        Language::Arabic => ARABIC,
    }
}

/// Descriptors of the rules `config` turns on, in catalog order
///
/// Fails on rule ids the language does not know.
pub fn active_rules(
    language: Language,
    config: &CheckerConfig,
) -> Result<Vec<&'static RuleDescriptor>> {
    let rules = catalog(language);
    for id in config.enabled_rules.iter().chain(&config.disabled_rules) {
        if !rules.iter().any(|d| d.id == id) {
            return Err(EngineError::UnknownRule {
                id: id.clone(),
                language: language.code().to_string(),
            });
        }
    }

    Ok(rules
        .iter()
        .filter(|d| {
            let enabled = d.default_enabled || config.enabled_rules.iter().any(|id| id == d.id);
            enabled && !config.disabled_rules.iter().any(|id| id == d.id)
        })
        .collect())
}

/// Construct every active rule
pub fn build_rules(
    config: &CheckerConfig,
    speller: &Arc<dyn Speller>,
) -> Result<Vec<Arc<dyn Rule>>> {
    let language = config.language()?;
    let ctx = BuildContext {
        language,
        resources: &config.resources,
        speller,
    };

    active_rules(language, config)?
        .into_iter()
        .map(|descriptor| {
            let rule = descriptor.build(&ctx)?;
            tracing::debug!(rule = descriptor.id, language = %language, "rule enabled");
            Ok(rule)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::NoSpeller;

    fn ids(config: &CheckerConfig) -> Vec<&'static str> {
        active_rules(config.language().unwrap(), config)
            .unwrap()
            .iter()
            .map(|d| d.id)
            .collect()
    }

    #[test]
    fn test_default_off_rules_are_inactive() {
        assert_eq!(
            ids(&CheckerConfig::new("en")),
            vec!["EN_UPPER_CASE", "EN_NONSTANDARD_SIMPLE_REPLACE"]
        );
        assert!(ids(&CheckerConfig::new("pt")).is_empty());
        assert!(ids(&CheckerConfig::new("ru")).is_empty());
        assert_eq!(ids(&CheckerConfig::new("ar")), vec!["AR_BARBARISMS_REPLACE"]);
    }

    #[test]
    fn test_enable_and_disable() {
        let config = CheckerConfig::builder()
            .enable_rule("EN_DASH_RULE")
            .disable_rule("EN_UPPER_CASE")
            .build()
            .unwrap();
        assert_eq!(ids(&config), vec!["EN_DASH_RULE", "EN_NONSTANDARD_SIMPLE_REPLACE"]);
    }

    #[test]
    fn test_unknown_rule_id() {
        let config = CheckerConfig::builder()
            .language("pt")
            .enable_rule("EN_DASH_RULE")
            .build()
            .unwrap();
        assert!(matches!(
            active_rules(Language::Portuguese, &config),
            Err(EngineError::UnknownRule { id, .. }) if id == "EN_DASH_RULE"
        ));
    }

    #[test]
    fn test_descriptors_agree_with_rules() {
        let speller: Arc<dyn Speller> = Arc::new(NoSpeller);
        let resources = ResourcePaths::default();
        for language in Language::ALL {
            let ctx = BuildContext {
                language,
                resources: &resources,
                speller: &speller,
            };
            for descriptor in catalog(language) {
                let rule = descriptor.build(&ctx).unwrap();
                assert_eq!(rule.id(), descriptor.id);
                assert_eq!(rule.is_default_enabled(), descriptor.default_enabled);
                assert!(!rule.description().is_empty());
            }
        }
    }
}
