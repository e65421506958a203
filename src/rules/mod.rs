pub mod bad_words;
pub mod bbcode;
pub mod href;
pub mod html;
pub mod line_length;
pub mod script;

use crate::config::RuleSetConfig;
use crate::error::{Result, SpamScoreError};
use std::collections::HashSet;

/// A single spam detector. Implementations are pure: for a fixed
/// configuration, the same text always yields the same penalty, and nothing
/// is carried over between invocations.
pub trait Rule: Send + Sync {
    fn name(&self) -> &str;

    /// Penalty for the given text. Zero means no match.
    fn evaluate(&self, text: &str) -> Result<u32>;
}

/// An ordered collection of configured rules plus the classification
/// threshold. Immutable once built: to reconfigure, edit the plain-data
/// `RuleSetConfig` and build a new set, so an in-flight evaluation can never
/// observe a half-applied change.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
    threshold: u32,
}

impl RuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Build the full pipeline from configuration, registering enabled rules
    /// in the canonical order: bad_words, html, bbcode, href, chinese,
    /// line_length, russian.
    pub fn from_config(config: &RuleSetConfig) -> Result<RuleSet> {
        config.validate()?;

        let mut builder = RuleSet::builder().threshold(config.threshold);
        if config.bad_words.enabled {
            builder = builder.rule(Box::new(bad_words::BadWordsRule::new(&config.bad_words)));
        }
        if config.html.enabled {
            builder = builder.rule(Box::new(html::HtmlRule::new(&config.html)?));
        }
        if config.bbcode.enabled {
            builder = builder.rule(Box::new(bbcode::BbcodeRule::new(&config.bbcode)?));
        }
        if config.href.enabled {
            builder = builder.rule(Box::new(href::HrefRule::new(&config.href)?));
        }
        if config.chinese.enabled {
            builder = builder.rule(Box::new(script::ScriptRule::chinese(&config.chinese)));
        }
        if config.line_length.enabled {
            builder = builder.rule(Box::new(line_length::LineLengthRule::new(
                &config.line_length,
            )?));
        }
        if config.russian.enabled {
            builder = builder.rule(Box::new(script::ScriptRule::russian(&config.russian)));
        }
        builder.build()
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(Box::as_ref)
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules
            .iter()
            .find(|rule| rule.name() == name)
            .map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "rules",
                &self.rules.iter().map(|rule| rule.name()).collect::<Vec<_>>(),
            )
            .field("threshold", &self.threshold)
            .finish()
    }
}

#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<Box<dyn Rule>>,
    threshold: Option<u32>,
}

impl RuleSetBuilder {
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Fails when two rules share a name; the per-rule breakdown would be
    /// ambiguous otherwise.
    pub fn build(self) -> Result<RuleSet> {
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name().to_string()) {
                return Err(SpamScoreError::Config(format!(
                    "duplicate rule name: {}",
                    rule.name()
                )));
            }
        }
        Ok(RuleSet {
            rules: self.rules,
            threshold: self.threshold.unwrap_or(crate::config::DEFAULT_THRESHOLD),
        })
    }
}
