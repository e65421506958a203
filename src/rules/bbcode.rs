use crate::config::MarkupConfig;
use crate::error::{Result, SpamScoreError};
use crate::rules::Rule;
use regex::Regex;

const BBCODE_PATTERN: &str = r"(?i)\[/?[a-z*]+(?:=[^\]\r\n]*)?\]";

/// Penalizes bulletin-board markup tokens like `[url=...]`, `[b]`, `[/b]`.
pub struct BbcodeRule {
    pattern: Regex,
    tag_penalty: u32,
}

impl BbcodeRule {
    pub fn new(config: &MarkupConfig) -> Result<Self> {
        let pattern = Regex::new(BBCODE_PATTERN)
            .map_err(|e| SpamScoreError::Config(format!("bbcode tag pattern: {e}")))?;
        Ok(Self {
            pattern,
            tag_penalty: config.tag_penalty,
        })
    }
}

impl Rule for BbcodeRule {
    fn name(&self) -> &str {
        "bbcode"
    }

    fn evaluate(&self, text: &str) -> Result<u32> {
        let count = self.pattern.find_iter(text).count() as u32;
        Ok(self.tag_penalty.saturating_mul(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(tag_penalty: u32) -> BbcodeRule {
        BbcodeRule::new(&MarkupConfig {
            enabled: true,
            tag_penalty,
        })
        .expect("built-in pattern should compile")
    }

    #[test]
    fn plain_brackets_score_zero() {
        let rule = rule(10);
        assert_eq!(
            rule.evaluate("array[3] and [see note 1]").expect("evaluation should succeed"),
            0
        );
    }

    #[test]
    fn open_and_close_tags_both_count() {
        let rule = rule(10);
        assert_eq!(
            rule.evaluate("[b]bold[/b]").expect("evaluation should succeed"),
            20
        );
    }

    #[test]
    fn url_tag_with_argument_counts() {
        let rule = rule(10);
        let text = "[URL=http://spam.example]click[/url]";
        assert_eq!(rule.evaluate(text).expect("evaluation should succeed"), 20);
    }
}
