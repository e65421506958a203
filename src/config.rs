use crate::error::{Result, SpamScoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_THRESHOLD: u32 = 40;

/// Data-only configuration for a rule set: the classification threshold plus
/// one section per built-in rule. Every field has a serde default, so a
/// partial TOML file overrides only what it names.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSetConfig {
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default)]
    pub bad_words: BadWordsConfig,
    #[serde(default)]
    pub html: MarkupConfig,
    #[serde(default)]
    pub bbcode: MarkupConfig,
    #[serde(default)]
    pub href: HrefConfig,
    #[serde(default)]
    pub chinese: ScriptConfig,
    #[serde(default)]
    pub russian: ScriptConfig,
    #[serde(default)]
    pub line_length: LineLengthConfig,
}

fn default_threshold() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BadWordsConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Word (or phrase) to penalty weight. Matching is case-insensitive and
    /// word-boundary aware; each occurrence contributes its weight.
    #[serde(default = "default_lexicon")]
    pub words: BTreeMap<String, u32>,
}

impl Default for BadWordsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            words: default_lexicon(),
        }
    }
}

fn default_lexicon() -> BTreeMap<String, u32> {
    [
        ("buy", 4),
        ("cialis", 10),
        ("casino", 10),
        ("gay", 10),
        ("porn", 10),
        ("sexy", 10),
        ("viagra", 10),
    ]
    .into_iter()
    .map(|(word, weight)| (word.to_string(), weight))
    .collect()
}

/// Shared shape for the html and bbcode rules: a flat penalty per markup
/// token found.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_tag_penalty")]
    pub tag_penalty: u32,
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tag_penalty: default_tag_penalty(),
        }
    }
}

fn default_tag_penalty() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HrefConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_link_penalty")]
    pub link_penalty: u32,
}

impl Default for HrefConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            link_penalty: default_link_penalty(),
        }
    }
}

fn default_link_penalty() -> u32 {
    15
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Penalty per character falling inside the script's code-point ranges.
    #[serde(default = "default_char_penalty")]
    pub char_penalty: u32,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            char_penalty: default_char_penalty(),
        }
    }
}

fn default_char_penalty() -> u32 {
    2
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LineLengthConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Longest unbroken line tolerated without penalty.
    #[serde(default = "default_max_len")]
    pub max_len: u32,
    /// One penalty point per this many characters of excess, rounded up.
    #[serde(default = "default_chars_per_point")]
    pub chars_per_point: u32,
}

impl Default for LineLengthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_len: default_max_len(),
            chars_per_point: default_chars_per_point(),
        }
    }
}

fn default_max_len() -> u32 {
    300
}

fn default_chars_per_point() -> u32 {
    10
}

impl Default for RuleSetConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bad_words: BadWordsConfig::default(),
            html: MarkupConfig::default(),
            bbcode: MarkupConfig::default(),
            href: HrefConfig::default(),
            chinese: ScriptConfig::default(),
            russian: ScriptConfig::default(),
            line_length: LineLengthConfig::default(),
        }
    }
}

impl RuleSetConfig {
    pub fn validate(&self) -> Result<()> {
        for (word, weight) in &self.bad_words.words {
            if word.trim().is_empty() {
                return Err(SpamScoreError::Config(
                    "bad_words.words keys must be non-empty".to_string(),
                ));
            }
            if *weight == 0 {
                return Err(SpamScoreError::Config(format!(
                    "bad_words.words['{word}'] must have a weight greater than 0"
                )));
            }
        }

        if self.line_length.chars_per_point == 0 {
            return Err(SpamScoreError::Config(
                "line_length.chars_per_point must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load a rules file, or fall back to the built-in defaults when no path is
/// given. A named file that does not exist is an error; defaults are only
/// implicit, never a silent substitute for a missing explicit file.
pub fn load_rules(path: Option<&Path>) -> Result<RuleSetConfig> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(SpamScoreError::RulesFileNotFound(
                    path.display().to_string(),
                ));
            }
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)
                .map_err(|e| SpamScoreError::Config(format!("{}: {}", path.display(), e)))?
        }
        None => RuleSetConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_passes_validation() {
        let config = RuleSetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.threshold, 40);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: RuleSetConfig = toml::from_str(
            r#"
threshold = 25

[href]
link_penalty = 30
"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.threshold, 25);
        assert_eq!(config.href.link_penalty, 30);
        assert!(config.href.enabled);
        assert_eq!(config.html.tag_penalty, 10);
        assert_eq!(
            config.bad_words.words.get("viagra").copied(),
            Some(10),
            "default lexicon should survive a partial override"
        );
    }

    #[test]
    fn lexicon_replacement_drops_defaults() {
        let config: RuleSetConfig = toml::from_str(
            r#"
[bad_words.words]
pills = 8
"#,
        )
        .expect("lexicon override should parse");

        assert_eq!(config.bad_words.words.len(), 1);
        assert_eq!(config.bad_words.words.get("pills").copied(), Some(8));
    }

    #[test]
    fn validate_rejects_zero_weight_word() {
        let config: RuleSetConfig = toml::from_str(
            r#"
[bad_words.words]
spam = 0
"#,
        )
        .expect("config should parse");
        let err = config.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("weight greater than 0"));
    }

    #[test]
    fn validate_rejects_blank_word() {
        let config: RuleSetConfig = toml::from_str(
            r#"
[bad_words.words]
" " = 5
"#,
        )
        .expect("config should parse");
        let err = config.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("non-empty"));
    }

    #[test]
    fn validate_rejects_zero_chars_per_point() {
        let config: RuleSetConfig = toml::from_str(
            r#"
[line_length]
chars_per_point = 0
"#,
        )
        .expect("config should parse");
        let err = config.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("chars_per_point"));
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result: std::result::Result<RuleSetConfig, _> = toml::from_str(
            r#"
[bayes]
enabled = true
"#,
        );
        assert!(result.is_err(), "unknown rule sections should not parse");
    }

    #[test]
    fn load_rules_defaults_when_no_path_given() {
        let config = load_rules(None).expect("defaults should load");
        assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    }

    #[test]
    fn load_rules_errors_on_missing_file() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("rules.toml");
        let err = load_rules(Some(&missing)).expect_err("missing file should error");
        assert!(err.to_string().contains("rules file not found"));
    }

    #[test]
    fn load_rules_reads_file_and_validates() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("rules.toml");
        fs::write(
            &path,
            r#"
threshold = 10

[line_length]
max_len = 120
"#,
        )
        .expect("rules file should write");

        let config = load_rules(Some(&path)).expect("rules file should load");
        assert_eq!(config.threshold, 10);
        assert_eq!(config.line_length.max_len, 120);
    }
}
