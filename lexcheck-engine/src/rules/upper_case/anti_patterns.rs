//! Contexts where a capitalized verb is a title, list item or name
//!
//! `Token` and `Regex` conditions ignore case; `CsRegex` keeps it.

use lexcheck_core::ConditionSpec as C;

/// Capitalized word of two or more characters
const CAP: C<'static> = C::Regex("[A-Z].+");
/// Capitalized word of any length
const CAP_ANY: C<'static> = C::Regex("[A-Z].*");
const DASH: C<'static> = C::Regex("-|–");
const CLOSE: C<'static> = C::Regex(r"[)\]]");

pub(crate) const ANTI_PATTERNS: &[&[C<'static>]] = &[
    &[C::Token("Hugs"), C::Token("and"), C::Token("Kisses")],
    // Please go to File and select Options.
    &[C::Token("go"), C::Token("to"), CAP],
    &[CAP, C::Token(","), C::Regex("[Aa]nd|[Oo]r|&"), CAP],
    // The goal is to Develop, Discuss and Learn.
    &[CAP, C::Token(","), CAP, C::Regex("[Aa]nd|[Oo]r|&|,"), CAP],
    &[CAP, C::Token(">"), CAP],
    // What Happened? / Catch Up!
    &[C::SentStart, CAP, CAP, C::Regex("[!?]")],
    // Step1 - Watch the full episode.
    &[C::SentStart, C::Regex(r".*\w.*"), DASH, CAP],
    // Step 1 - Watch the full episode.
    &[C::SentStart, C::Regex(r".*\w.*"), C::Regex("[0-9]+"), DASH, CAP],
    // # Headline
    &[C::SentStart, C::Token("#"), CAP],
    &[C::SentStart, C::Token("#"), C::Token("#"), CAP],
    &[C::SentStart, C::Token("#"), C::Token("#"), C::Token("#"), CAP],
    // Scene 4, Lines 93-96
    &[CAP, C::Regex(r"\d+"), C::Regex("-|–|,"), CAP, C::Regex(r"\d+")],
    // 1.- Sign up for
    &[C::Regex(r"\d+"), C::Token("."), DASH, CAP],
    &[C::Regex("«"), CAP],
    // H1 What's wrong?
    &[C::Regex("H[1-6]"), CAP],
    // ii) Enabling you to
    &[C::SentStart, C::Regex("[a-z]{1,2}"), C::Token(")"), CAP],
    &[C::SentStart, C::Token("•"), CAP],
    &[DASH, CAP],
    // I finished Step 6
    &[C::Regex("Step|Grade"), C::Regex(r"\d+")],
    // Let's talk to the Onboarding team.
    &[C::Regex("the|our|their"), CAP, C::Regex("team|department")],
    // 12.3 Game.
    &[C::SentStart, C::Regex(r"\d+"), C::Regex(r"\.|/"), C::Regex(r"\d+"), CAP],
    // Lesson #1 - Learn the alphabet.
    &[
        C::SentStart,
        C::Regex(r".*\w.*"),
        C::Token("#"),
        C::Regex("[0-9]+"),
        DASH,
        CAP,
    ],
    &[C::Token("BBC"), C::Token("Culture")],
    &[C::Token("Amazon"), C::Token("Live")],
    &[C::Token("Volvo"), C::Token("Buses")],
    &[CAP, C::Token("/"), CAP],
    // Order #76540
    &[C::CsRegex("[A-Z].+"), C::Token("#"), C::Regex(r"\d+")],
    // He plays games at Games.co.uk.
    &[
        C::CsRegex("[A-Z].+"),
        C::Token("."),
        C::Regex("com?|de|us|gov|net|info|org|es|mx|ca|uk|at|ch|it|pl|ru|nl|ie|be|fr"),
    ],
    // He's Ben (Been)
    &[CAP, C::Token("("), CAP, C::Token(")")],
    &[C::Token("["), CAP, C::Token("]")],
    &[C::Token("Pay"), C::Token("per"), CAP],
    &[C::Regex("Hi|Hello|Heya?"), C::Token(","), CAP],
    // C stands for Curse.
    &[C::Regex("[A-Z]"), C::Regex("is|stands"), C::Token("for"), CAP],
    // Stop & Jot:
    &[C::SentStart, CAP, C::Token("&"), CAP, C::Token(":")],
    // The Story:
    &[C::SentStart, CAP, CAP, C::Token(":")],
    // Easy to Use:
    &[C::SentStart, CAP, C::Regex("[a-z].+"), CAP, C::Token(":")],
    // Top 10% Lunch Deals
    &[CAP, C::Regex(r"\d+%?"), CAP],
    // 6) Have a beer
    &[C::Regex("[0-9]+"), CLOSE, CAP],
    // a) Have a beer
    &[C::Regex("[a-z]"), CLOSE, CAP],
    // (b) Have a beer
    &[C::Regex(r"[(\]]"), C::Regex("[a-z0-9]"), CLOSE],
    // Freelance 2.0
    &[CAP, C::Regex("[0-9]+"), C::Regex("."), C::Regex("[0-9]+")],
    // You Don't Know / Kuiper’s Belt
    &[CAP_ANY, C::Regex("['’`´‘]"), C::Regex("t|d|ve|s|re|m|ll"), CAP],
    // Culture, People, Nature
    &[CAP, C::Token(","), CAP, C::Token(","), CAP],
    // The Sea is Watching
    &[C::Regex("The"), CAP, C::Token("is"), CAP],
    // My name is Gentle.
    &[C::Token("name"), C::Token("is"), CAP],
    // They called it Greet.
    &[C::Regex("call|calls|called"), C::Token("it"), CAP],
    &[C::Token("Professor"), CAP],
    &[C::Token("Time"), C::Token("magazine")],
    // What is Foreshadowing?
    &[C::Regex("Who|What"), C::Regex("is|are|was|were"), CAP, C::Token("?")],
    // His name is Carp.
    &[C::Token("name"), C::Regex("is|was"), CAP],
    // FDM Group
    &[CAP_ANY, C::Token("Group")],
    // Victor or Rabbit as everyone calls him.
    &[C::Pos("NNP"), C::Regex("or|and|&"), CAP_ANY],
    // Microsoft Teams, Google Maps
    &[C::Regex("Google|Microsoft"), C::Regex("Teams|Maps|Canvas|Remind|Switch|Gems?")],
    // Music and Concepts.
    &[C::SentStart, CAP_ANY, C::Regex("or|and|&"), CAP_ANY, C::SentEnd],
];

#[cfg(test)]
mod tests {
    use super::*;
    use lexcheck_core::{AntiPatterns, SentenceBuilder};

    fn anti() -> AntiPatterns {
        AntiPatterns::compile(ANTI_PATTERNS).unwrap()
    }

    #[test]
    fn test_table_compiles() {
        assert_eq!(anti().len(), ANTI_PATTERNS.len());
    }

    #[test]
    fn test_step_headline() {
        let s = SentenceBuilder::new()
            .word("Step", &["NN"])
            .spaced("1")
            .spaced("-")
            .word("Watch", &["VB"])
            .word("the", &["DT"])
            .word("Full", &["JJ"])
            .word("Episode", &["NN"])
            .build();
        assert!(anti().covers(s.tokens(), 4));
    }

    #[test]
    fn test_go_to_menu() {
        let s = SentenceBuilder::new()
            .word("Please", &["UH"])
            .word("go", &["VB"])
            .word("to", &["TO"])
            .word("File", &["VB", "NN"])
            .word("and", &["CC"])
            .word("select", &["VB"])
            .word("Options", &["NNS"])
            .punct(".")
            .build();
        assert!(anti().covers(s.tokens(), 4));
    }

    #[test]
    fn test_plain_prose_not_covered() {
        let s = SentenceBuilder::new()
            .word("I", &["PRP"])
            .word("really", &["RB"])
            .word("Like", &["VB"])
            .word("spaghetti", &["NN"])
            .punct(".")
            .build();
        assert!(!anti().covers(s.tokens(), 3));
    }

    #[test]
    fn test_domain_name() {
        let s = SentenceBuilder::new()
            .word("He", &["PRP"])
            .word("plays", &["VBZ"])
            .word("at", &["IN"])
            .word("Games", &["VBZ"])
            .punct(".")
            .punct("co")
            .punct(".")
            .punct("uk")
            .punct(".")
            .build();
        assert!(anti().covers(s.tokens(), 4));
    }
}
