use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Lexicon error: {0}")]
    LexiconError(String),

    #[error("Sentiment scorer error: {0}")]
    ScorerError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Custom(String),
}

pub type Result<T> = std::result::Result<T, PersonaError>;
