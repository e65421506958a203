use crate::config::LineLengthConfig;
use crate::error::{Result, SpamScoreError};
use crate::rules::Rule;

/// Penalizes excessively long unbroken lines, proportional to the excess over
/// the configured maximum: one point per `chars_per_point` characters of
/// excess, rounded up, per line.
#[derive(Debug)]
pub struct LineLengthRule {
    max_len: u32,
    chars_per_point: u32,
}

impl LineLengthRule {
    pub fn new(config: &LineLengthConfig) -> Result<Self> {
        if config.chars_per_point == 0 {
            return Err(SpamScoreError::Config(
                "line_length.chars_per_point must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            max_len: config.max_len,
            chars_per_point: config.chars_per_point,
        })
    }
}

impl Rule for LineLengthRule {
    fn name(&self) -> &str {
        "line_length"
    }

    fn evaluate(&self, text: &str) -> Result<u32> {
        let mut penalty: u32 = 0;
        for line in text.lines() {
            let len = line.chars().count() as u32;
            if len > self.max_len {
                let excess = len - self.max_len;
                penalty = penalty.saturating_add(excess.div_ceil(self.chars_per_point));
            }
        }
        Ok(penalty)
    }
}
