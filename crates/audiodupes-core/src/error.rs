use thiserror::Error;

/// All errors that can occur in audiodupes-core.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Input is not a JSON array of asset records: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("Input is not a JSON array of asset records: element {0} is not an object")]
    NotARecord(usize),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
