//! Detection rules
//!
//! Every rule inspects one sentence at a time and never mutates it. Rules
//! hold only read-only state after construction, so one instance serves any
//! number of checking threads.

pub mod dash;
pub mod simple_replace;
pub mod upper_case;

pub use dash::DashRule;
pub use simple_replace::SimpleReplaceRule;
pub use upper_case::UpperCaseRule;

use crate::error::Result;
use lexcheck_core::{RuleMatch, Sentence};
use std::fmt::Debug;

/// A check over a single sentence
pub trait Rule: Debug + Send + Sync {
    /// Stable identifier used in configuration and reports
    fn id(&self) -> &str;

    /// Short human-readable description
    fn description(&self) -> &str;

    /// Whether the rule runs unless configuration turns it off
    fn is_default_enabled(&self) -> bool {
        true
    }

    /// Issues found in `sentence`, ordered by start offset
    fn match_sentence(&self, sentence: &Sentence) -> Result<Vec<RuleMatch>>;
}
