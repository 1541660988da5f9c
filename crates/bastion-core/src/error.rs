use thiserror::Error;

/// Errors that can occur when loading the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
    /// JSON parsing failed
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but cannot drive the simulation
    #[error("Invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
