use crate::config::HrefConfig;
use crate::error::{Result, SpamScoreError};
use crate::rules::Rule;
use regex::Regex;

const LINK_PATTERN: &str = r"(?i)\bhttps?://[^\s<>\[\]]+";

/// Penalizes embedded hyperlinks, scaling with the number found.
pub struct HrefRule {
    pattern: Regex,
    link_penalty: u32,
}

impl HrefRule {
    pub fn new(config: &HrefConfig) -> Result<Self> {
        let pattern = Regex::new(LINK_PATTERN)
            .map_err(|e| SpamScoreError::Config(format!("href pattern: {e}")))?;
        Ok(Self {
            pattern,
            link_penalty: config.link_penalty,
        })
    }
}

impl Rule for HrefRule {
    fn name(&self) -> &str {
        "href"
    }

    fn evaluate(&self, text: &str) -> Result<u32> {
        let count = self.pattern.find_iter(text).count() as u32;
        Ok(self.link_penalty.saturating_mul(count))
    }
}
