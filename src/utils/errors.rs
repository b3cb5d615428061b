use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Missing dependency in package.json: {0}")]
    MissingDependency(String),
}

impl ConfigError {
    /// Create a manifest error
    pub fn manifest(message: String) -> Self {
        Self::Manifest(message)
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
