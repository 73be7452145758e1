use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegistryError>;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unrecognized variable identifier: '{0}'")]
    UnknownVariable(String),

    #[error("Invalid pressure level: {0}")]
    InvalidLevel(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
