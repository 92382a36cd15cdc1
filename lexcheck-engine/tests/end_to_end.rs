//! Whole-checker behaviour on tokenized sentences

use lexcheck_engine::{
    Checker, CheckerConfig, EngineError, NoSpeller, Sentence, SentenceBuilder, Speller,
    SpellerError, WordListSpeller,
};
use proptest::prelude::*;
use std::io::Write;
use std::sync::{Arc, OnceLock};
use tempfile::NamedTempFile;

fn speller() -> Arc<dyn Speller> {
    Arc::new(WordListSpeller::from_words([
        "like", "watch", "read", "have", "run", "spaghetti", "lead", "see", "make",
    ]))
}

fn english() -> &'static Checker {
    static CHECKER: OnceLock<Checker> = OnceLock::new();
    CHECKER.get_or_init(|| Checker::with_speller(CheckerConfig::new("en"), speller()).unwrap())
}

fn list_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

fn like_sentence() -> Sentence {
    SentenceBuilder::new()
        .word("I", &["PRP"])
        .word("really", &["RB"])
        .word("Like", &["VB", "VBP", "IN"])
        .word("spaghetti", &["NN"])
        .punct(".")
        .build()
}

#[test]
fn test_capitalized_verb_in_prose() {
    let sentence = like_sentence();
    let matches = english().check(&sentence).unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].rule_id, "EN_UPPER_CASE");
    assert_eq!(matches[0].covered(sentence.text()), Some("Like"));
    assert_eq!(matches[0].replacements, vec!["like"]);
}

#[test]
fn test_company_name() {
    let sentence = SentenceBuilder::new()
        .word("I", &["PRP"])
        .word("watched", &["VBD"])
        .word("BBC", &["NNP"])
        .word("Culture", &["NN", "VB"])
        .punct(".")
        .build();
    assert!(english().check(&sentence).unwrap().is_empty());
}

#[test]
fn test_step_headline() {
    let headline = SentenceBuilder::new()
        .word("Step", &["NN"])
        .spaced("1")
        .spaced("-")
        .word("Watch", &["VB"])
        .word("the", &["DT"])
        .word("Full", &["JJ"])
        .word("Episode", &["NN"])
        .build();
    assert!(english().check(&headline).unwrap().is_empty());

    let with_period = SentenceBuilder::new()
        .word("Step", &["NN"])
        .spaced("1")
        .spaced("-")
        .word("Watch", &["VB"])
        .word("the", &["DT"])
        .word("full", &["JJ"])
        .word("episode", &["NN"])
        .punct(".")
        .build();
    assert!(english().check(&with_period).unwrap().is_empty());
}

#[test]
fn test_unavailable_speller_fails_open() {
    let checker = Checker::with_speller(CheckerConfig::new("en"), Arc::new(NoSpeller)).unwrap();
    assert!(checker.check(&like_sentence()).unwrap().is_empty());
}

#[test]
fn test_speller_backend_error_propagates() {
    #[derive(Debug)]
    struct Offline;

    impl Speller for Offline {
        fn is_misspelled(&self, _word: &str) -> Result<bool, SpellerError> {
            Err(SpellerError::Backend("connection refused".into()))
        }
    }

    let checker = Checker::with_speller(CheckerConfig::new("en"), Arc::new(Offline)).unwrap();
    assert!(matches!(
        checker.check(&like_sentence()),
        Err(EngineError::Speller(_))
    ));
}

#[test]
fn test_dash_rule_with_custom_compounds() {
    let compounds = list_file("# test\nfruit-salad\n");
    let config = CheckerConfig::builder()
        .enable_rule("EN_DASH_RULE")
        .disable_rule("EN_UPPER_CASE")
        .compounds(compounds.path())
        .build()
        .unwrap();
    let checker = Checker::new(config).unwrap();

    let dashed = SentenceBuilder::new()
        .word("fruit", &["NN"])
        .spaced("—")
        .word("salad", &["NN"])
        .build();
    let matches = checker.check(&dashed).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].covered(dashed.text()), Some("fruit — salad"));
    assert_eq!(matches[0].replacements, vec!["fruit-salad"]);

    let hyphenated = SentenceBuilder::new().word("fruit-salad", &["NN"]).build();
    assert!(checker.check(&hyphenated).unwrap().is_empty());
}

#[test]
fn test_dash_rule_is_off_by_default() {
    let checker = Checker::with_language("en").unwrap();
    assert!(!checker.rule_ids().contains(&"EN_DASH_RULE"));

    let dashed = SentenceBuilder::new()
        .word("well", &["RB"])
        .punct("—")
        .punct("known")
        .build();
    assert!(checker.check(&dashed).unwrap().is_empty());
}

#[test]
fn test_replacement_boundaries() {
    let replacements = list_file("lead=guide\n");
    let config = CheckerConfig::builder()
        .disable_rule("EN_UPPER_CASE")
        .replacements(replacements.path())
        .build()
        .unwrap();
    let checker = Checker::new(config).unwrap();

    let check = |sentence: &Sentence| checker.check(sentence).unwrap();

    let plain = SentenceBuilder::new().word("a", &[]).word("lead", &[]).build();
    assert_eq!(check(&plain).len(), 1);

    let initial = SentenceBuilder::new().word("Lead", &[]).word("on", &[]).build();
    let found = check(&initial);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].replacements, vec!["Guide"]);

    let before_period = SentenceBuilder::new().word("the", &[]).word("lead", &[]).punct(".").build();
    assert_eq!(check(&before_period).len(), 1);

    let inside_word = SentenceBuilder::new().word("the", &[]).word("leader", &[]).build();
    assert!(check(&inside_word).is_empty());
}

#[test]
fn test_casing_exceptions_override() {
    let sentence = SentenceBuilder::new()
        .word("Pencils", &["NNS"])
        .word("contain", &["VBP"])
        .word("Lead", &["VB", "NN"])
        .punct(".")
        .build();
    assert_eq!(english().check(&sentence).unwrap().len(), 1);

    let exceptions = list_file("contain Lead\n");
    let config = CheckerConfig::builder()
        .specific_case(exceptions.path())
        .build()
        .unwrap();
    let checker = Checker::with_speller(config, speller()).unwrap();
    assert!(checker.check(&sentence).unwrap().is_empty());
}

#[test]
fn test_arabic_barbarisms() {
    let checker = Checker::with_language("ar").unwrap();
    let sentence = SentenceBuilder::new()
        .word("أكلت", &[])
        .word("طرشي", &[])
        .punct(".")
        .build();
    let matches = checker.check(&sentence).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].separator.as_deref(), Some(" أو "));
}

const VERBS: [&str; 5] = ["Like", "Watch", "Read", "Have", "Run"];

const WORDS: &[(&str, &[&str])] = &[
    ("we", &["PRP"]),
    ("often", &["RB"]),
    ("spaghetti", &["NN"]),
    ("of", &["IN"]),
    ("Paris", &["NNP"]),
    ("Like", &["VB", "IN"]),
    ("Watch", &["VB"]),
    ("alot", &["NN"]),
    ("-", &[]),
    ("6", &["CD"]),
];

proptest! {
    #[test]
    fn prop_check_is_deterministic(
        words in prop::collection::vec(prop::sample::select(WORDS), 0..10),
        end in prop_oneof![Just("."), Just("!"), Just("")],
    ) {
        let builder = words
            .iter()
            .fold(SentenceBuilder::new(), |b, (w, tags)| b.word(w, tags));
        let sentence = if end.is_empty() { builder.build() } else { builder.punct(end).build() };

        let checker = english();
        let first = checker.check(&sentence).unwrap();
        let second = checker.check(&sentence).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_menu_and_list_contexts_never_flagged(
        verb in prop::sample::select(VERBS.to_vec()),
        number in 1u32..100,
        tail in prop::collection::vec(prop::sample::select(vec!["the", "a", "now", "again"]), 0..4),
    ) {
        let checker = english();

        let menu = tail
            .iter()
            .fold(
                SentenceBuilder::new()
                    .word("Please", &["UH"])
                    .word("go", &["VB"])
                    .word("to", &["TO"])
                    .word(verb, &["VB"]),
                |b, w| b.word(w, &["DT"]),
            )
            .punct(".")
            .build();
        let verb_start = menu.tokens()[4].start();
        prop_assert!(checker
            .check(&menu)
            .unwrap()
            .iter()
            .all(|m| m.start != verb_start));

        let list_item = tail
            .iter()
            .fold(
                SentenceBuilder::new()
                    .word("Then", &["RB"])
                    .spaced(&number.to_string())
                    .punct(")")
                    .word(verb, &["VB"]),
                |b, w| b.word(w, &["DT"]),
            )
            .punct(".")
            .build();
        let verb_start = list_item.tokens()[4].start();
        prop_assert!(checker
            .check(&list_item)
            .unwrap()
            .iter()
            .all(|m| m.start != verb_start));
    }
}
