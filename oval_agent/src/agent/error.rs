//! # Session Errors

use crate::config::ConfigError;
use crate::content::ContentError;
use crate::probe::ProbeError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to open probe session for '{name}': {source}")]
    ProbeInit {
        name: String,
        #[source]
        source: ProbeError,
    },

    #[error("Session reset failed: {0}")]
    Reset(#[source] ProbeError),

    #[error("Variable binding failed: {0}")]
    Bind(#[from] ContentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl SessionError {
    /// Whether the session remains usable after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SessionError::ProbeInit { .. } | SessionError::Config(_) => false,
            SessionError::Reset(_) | SessionError::Bind(_) => true,
        }
    }
}
