//! Error types for launch configuration

use std::path::PathBuf;

/// Errors raised while building a launch configuration
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Agent discovery failed in {}: {source}", dir.display())]
    Discovery {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Roster cursor {index} out of range for roster of {len} agents")]
    CursorOutOfRange { index: usize, len: usize },
}

/// Result alias for configuration operations
pub type Result<T> = std::result::Result<T, LaunchError>;
