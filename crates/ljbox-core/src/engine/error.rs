use super::config::ConfigError;
use crate::core::io::traits::OutputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Frame output failed: {source}")]
    Output {
        #[from]
        source: OutputError,
    },
}
