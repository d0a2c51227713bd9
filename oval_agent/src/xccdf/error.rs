/// Policy bridge errors
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Check engine namespace must not be empty")]
    EmptyNamespace,

    #[error("Session '{session}' has no system information to export")]
    MissingSysinfo { session: String },
}
