use crate::config::ScriptConfig;
use crate::error::Result;
use crate::rules::Rule;
use std::ops::RangeInclusive;

const CHINESE_RANGES: &[RangeInclusive<char>] = &[
    '\u{4E00}'..='\u{9FFF}', // CJK Unified Ideographs
    '\u{3400}'..='\u{4DBF}', // CJK Extension A
];

const RUSSIAN_RANGES: &[RangeInclusive<char>] = &[
    '\u{0400}'..='\u{04FF}', // Cyrillic
    '\u{0500}'..='\u{052F}', // Cyrillic Supplement
];

/// Penalizes characters from a script that is off-topic for an
/// English-oriented comment section. Penalty scales with the number of
/// matched characters.
pub struct ScriptRule {
    name: &'static str,
    ranges: &'static [RangeInclusive<char>],
    char_penalty: u32,
}

impl ScriptRule {
    pub fn chinese(config: &ScriptConfig) -> Self {
        Self {
            name: "chinese",
            ranges: CHINESE_RANGES,
            char_penalty: config.char_penalty,
        }
    }

    pub fn russian(config: &ScriptConfig) -> Self {
        Self {
            name: "russian",
            ranges: RUSSIAN_RANGES,
            char_penalty: config.char_penalty,
        }
    }
}

impl Rule for ScriptRule {
    fn name(&self) -> &str {
        self.name
    }

    fn evaluate(&self, text: &str) -> Result<u32> {
        let count = text
            .chars()
            .filter(|c| self.ranges.iter().any(|range| range.contains(c)))
            .count() as u32;
        Ok(self.char_penalty.saturating_mul(count))
    }
}
