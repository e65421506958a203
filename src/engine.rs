use crate::error::{Result, SpamScoreError};
use crate::rules::RuleSet;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RulePenalty {
    pub rule: String,
    pub penalty: u32,
}

/// Outcome of one evaluation: the summed total plus a per-rule breakdown in
/// registration order. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringResult {
    pub total: u32,
    pub breakdown: Vec<RulePenalty>,
}

impl ScoringResult {
    pub fn penalty(&self, rule: &str) -> Option<u32> {
        self.breakdown
            .iter()
            .find(|entry| entry.rule == rule)
            .map(|entry| entry.penalty)
    }
}

/// Run every rule in the set against the text. A failing rule aborts the
/// whole evaluation; a partial total would under-report spam.
pub fn score(text: &str, rules: &RuleSet) -> Result<ScoringResult> {
    let mut total: u32 = 0;
    let mut breakdown = Vec::with_capacity(rules.len());

    for rule in rules.rules() {
        let penalty = rule
            .evaluate(text)
            .map_err(|e| SpamScoreError::Evaluation {
                rule: rule.name().to_string(),
                message: e.to_string(),
            })?;
        debug!(rule = rule.name(), penalty, "rule evaluated");
        total = total.saturating_add(penalty);
        breakdown.push(RulePenalty {
            rule: rule.name().to_string(),
            penalty,
        });
    }

    Ok(ScoringResult { total, breakdown })
}
