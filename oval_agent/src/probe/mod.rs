//! Probe collaborator: the collector seam and the per-session probe cache.

pub mod error;
pub mod session;
pub mod traits;

pub use error::{CollectionError, ProbeError};
pub use session::ProbeSession;
pub use traits::ObjectCollector;
