//! # Agent Session Engine
//!
//! Lifecycle of one evaluation run: probe, evaluate, reset, and the
//! reconciliation of externally supplied variable bindings.

pub mod error;
pub mod report;
pub mod resolver;
pub mod session;

pub use error::SessionError;
pub use report::{DefinitionReport, ReportFamily, ReportSink, VerdictCounter};
pub use resolver::ResolutionSummary;
pub use session::{AgentSession, SystemEvaluation};
