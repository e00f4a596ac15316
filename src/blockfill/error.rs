use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlockfillError {
    #[error("Invalid target length: {0} (a block needs at least one line)")]
    InvalidTargetLength(usize),

    #[error("Invalid wrap width: {0} (must be greater than zero)")]
    InvalidWrapWidth(usize),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown config key: {0}")]
    UnknownConfigKey(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BlockfillError>;
