use crate::config::MarkupConfig;
use crate::error::{Result, SpamScoreError};
use crate::rules::Rule;
use regex::Regex;

const TAG_PATTERN: &str = r"</?[A-Za-z][A-Za-z0-9]*(?:\s[^<>]*)?/?>";

/// Penalizes HTML tags. Comments are expected to be plain text, so every tag
/// found costs a flat penalty.
pub struct HtmlRule {
    pattern: Regex,
    tag_penalty: u32,
}

impl HtmlRule {
    pub fn new(config: &MarkupConfig) -> Result<Self> {
        let pattern = Regex::new(TAG_PATTERN)
            .map_err(|e| SpamScoreError::Config(format!("html tag pattern: {e}")))?;
        Ok(Self {
            pattern,
            tag_penalty: config.tag_penalty,
        })
    }
}

impl Rule for HtmlRule {
    fn name(&self) -> &str {
        "html"
    }

    fn evaluate(&self, text: &str) -> Result<u32> {
        let count = self.pattern.find_iter(text).count() as u32;
        Ok(self.tag_penalty.saturating_mul(count))
    }
}
