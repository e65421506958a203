use crate::engine::{self, ScoringResult};
use crate::error::Result;
use crate::rules::RuleSet;
use serde::Serialize;

/// A scoring result reduced to its persisted form: the total and whether it
/// met the threshold. The comparison is inclusive, so a score exactly equal
/// to the threshold flags the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub score: u32,
    pub is_flagged: bool,
}

impl Classification {
    pub fn from_result(result: &ScoringResult, threshold: u32) -> Self {
        Self {
            score: result.total,
            is_flagged: result.total >= threshold,
        }
    }
}

pub fn classify(text: &str, rules: &RuleSet) -> Result<Classification> {
    let result = engine::score(text, rules)?;
    Ok(Classification::from_result(&result, rules.threshold()))
}
