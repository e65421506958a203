//! Rule-based spam scoring for user-submitted comment text.
//!
//! A configured [`RuleSet`] runs a fixed pipeline of independent detectors
//! over a piece of text, sums their penalties, and compares the total against
//! a threshold. The result is a [`Classification`] the host persists
//! alongside its own fields.

pub mod adapter;
pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;

pub use adapter::Classifiable;
pub use classifier::Classification;
pub use config::RuleSetConfig;
pub use engine::{RulePenalty, ScoringResult};
pub use error::{Result, SpamScoreError};
pub use rules::{Rule, RuleSet};

/// Single-call entry point: build the rule set from configuration and
/// classify the text. Hosts that score many texts should build the
/// [`RuleSet`] once and call [`classifier::classify`] directly.
pub fn classify(text: &str, config: &RuleSetConfig) -> Result<Classification> {
    let rules = RuleSet::from_config(config)?;
    classifier::classify(text, &rules)
}
