use thiserror::Error;

#[derive(Error, Debug)]
pub enum TroupeError {
    #[error("Actor not found: {0}")]
    ActorNotFound(crate::core::types::ActorId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("No available spot found after {attempts} attempts")]
    NoAvailableSpot { attempts: usize },
}

pub type Result<T> = std::result::Result<T, TroupeError>;
