// src/probe/error.rs
//! Error types for the probe layer

/// Errors reported by an [`ObjectCollector`](super::ObjectCollector) implementation
#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("Access denied for object '{object_id}': {reason}")]
    AccessDenied { object_id: String, reason: String },

    #[error("Object type '{kind}' not supported by collector '{collector_id}'")]
    Unsupported { kind: String, collector_id: String },

    #[error("Collection failed for object '{object_id}': {reason}")]
    Failed { object_id: String, reason: String },
}

impl CollectionError {
    pub fn failed(object_id: &str, reason: impl Into<String>) -> Self {
        Self::Failed {
            object_id: object_id.to_string(),
            reason: reason.into(),
        }
    }
}

/// Probe session errors
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("System information unavailable: {0}")]
    SysinfoUnavailable(#[source] CollectionError),

    #[error("Collection error: {0}")]
    CollectionFailed(#[from] CollectionError),

    #[error("Definition '{0}' not found in definition model")]
    UnknownDefinition(String),

    #[error("Probe reset failed: {0}")]
    ResetFailed(#[source] CollectionError),
}

impl ProbeError {
    /// Whether the session can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ProbeError::CollectionFailed(_) | ProbeError::UnknownDefinition(_)
        )
    }
}
