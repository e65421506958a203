use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamScoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("rule '{rule}' failed during evaluation: {message}")]
    Evaluation { rule: String, message: String },

    #[error("rules file not found: {0}")]
    RulesFileNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpamScoreError>;
