use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("refusing to overwrite existing file: {0}")]
    AlreadyExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
