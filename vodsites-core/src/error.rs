use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Site registry extender not configured")]
    MissingExtender,

    #[error("Duplicate site id '{id}' in bundle '{namespace}'")]
    DuplicateSite { namespace: String, id: String },

    #[error("Empty {field} for site '{id}'")]
    EmptyField { id: String, field: &'static str },

    #[error("Unsupported bundle format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
