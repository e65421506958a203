use crate::config::BadWordsConfig;
use crate::error::Result;
use crate::rules::Rule;

/// Weighted lexicon matcher. Matching is case-insensitive and word-boundary
/// aware; every occurrence of a configured word or phrase adds its weight, so
/// a word appearing twice contributes its weight twice.
pub struct BadWordsRule {
    entries: Vec<Entry>,
}

struct Entry {
    tokens: Vec<String>,
    weight: u32,
}

impl BadWordsRule {
    pub fn new(config: &BadWordsConfig) -> Self {
        let entries = config
            .words
            .iter()
            .map(|(word, weight)| Entry {
                tokens: tokenize(word),
                weight: *weight,
            })
            .filter(|entry| !entry.tokens.is_empty())
            .collect();
        Self { entries }
    }
}

impl Rule for BadWordsRule {
    fn name(&self) -> &str {
        "bad_words"
    }

    fn evaluate(&self, text: &str) -> Result<u32> {
        let tokens = tokenize(text);
        let mut penalty: u32 = 0;
        for entry in &self.entries {
            let count = count_occurrences(&tokens, &entry.tokens);
            penalty = penalty.saturating_add(entry.weight.saturating_mul(count));
        }
        Ok(penalty)
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Non-overlapping occurrences of `phrase` as a contiguous token run.
fn count_occurrences(tokens: &[String], phrase: &[String]) -> u32 {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return 0;
    }
    let mut count = 0;
    let mut i = 0;
    while i + phrase.len() <= tokens.len() {
        if tokens[i..i + phrase.len()] == *phrase {
            count += 1;
            i += phrase.len();
        } else {
            i += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rule(words: Vec<(&str, u32)>) -> BadWordsRule {
        let words: BTreeMap<String, u32> = words
            .into_iter()
            .map(|(word, weight)| (word.to_string(), weight))
            .collect();
        BadWordsRule::new(&BadWordsConfig {
            enabled: true,
            words,
        })
    }

    #[test]
    fn clean_text_scores_zero() {
        let rule = rule(vec![("viagra", 10)]);
        assert_eq!(
            rule.evaluate("Hello, nice post!").expect("evaluation should succeed"),
            0
        );
    }

    #[test]
    fn each_occurrence_adds_its_weight() {
        let rule = rule(vec![("sexy", 10)]);
        assert_eq!(
            rule.evaluate("sexy stuff, very sexy").expect("evaluation should succeed"),
            20
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let rule = rule(vec![("viagra", 10)]);
        assert_eq!(
            rule.evaluate("Cheap VIAGRA here").expect("evaluation should succeed"),
            10
        );
    }

    #[test]
    fn word_boundaries_are_respected() {
        let rule = rule(vec![("buy", 4)]);
        assert_eq!(
            rule.evaluate("buyer's guide").expect("evaluation should succeed"),
            0
        );
        assert_eq!(
            rule.evaluate("buy now").expect("evaluation should succeed"),
            4
        );
    }

    #[test]
    fn phrases_match_contiguous_token_runs() {
        let rule = rule(vec![("free money", 12)]);
        assert_eq!(
            rule.evaluate("get FREE money today, free money!").expect("evaluation should succeed"),
            24
        );
        assert_eq!(
            rule.evaluate("free range money").expect("evaluation should succeed"),
            0
        );
    }

    #[test]
    fn punctuation_does_not_hide_matches() {
        let rule = rule(vec![("porn", 10)]);
        assert_eq!(
            rule.evaluate("porn, porn. porn!").expect("evaluation should succeed"),
            30
        );
    }
}
