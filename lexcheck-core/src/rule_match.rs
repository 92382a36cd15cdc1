//! Reported issues

use serde::Serialize;

/// One issue found in a sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch {
    /// Id of the rule that produced the match
    pub rule_id: String,
    /// Byte offset where the flagged span starts
    pub start: usize,
    /// Byte offset one past the flagged span
    pub end: usize,
    /// Human-readable explanation
    pub message: String,
    /// Suggested replacements, best first
    pub replacements: Vec<String>,
    /// Separator used when the suggestions are shown inline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl RuleMatch {
    pub fn new(
        rule_id: impl Into<String>,
        start: usize,
        end: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            start,
            end,
            message: message.into(),
            replacements: Vec::new(),
            separator: None,
        }
    }

    /// Set a single suggested replacement
    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacements = vec![replacement.into()];
        self
    }

    /// Set the ordered list of suggested replacements
    pub fn with_replacements(mut self, replacements: Vec<String>) -> Self {
        self.replacements = replacements;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// The flagged slice of `text`, if the span is valid for it
    pub fn covered<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_covered_text() {
        let text = "I really Like spaghetti.";
        let m = RuleMatch::new("EN_UPPER_CASE", 9, 13, "msg").with_replacement("like");
        assert_eq!(m.covered(text), Some("Like"));
        assert_eq!(m.replacements, vec!["like".to_string()]);
        assert_eq!(m.separator, None);
        assert_eq!(m.covered("short"), None);
    }

    #[test]
    fn test_serialization_skips_missing_separator() {
        let m = RuleMatch::new("R", 0, 1, "m");
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("separator").is_none());

        let json = serde_json::to_value(m.with_separator(" or ")).unwrap();
        assert_eq!(json["separator"], " or ");
    }
}
