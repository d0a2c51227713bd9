//! # OVAL Agent - Evaluation Session Engine
//!
//! Runs OVAL definitions against one target system and bridges the verdicts
//! into an XCCDF policy engine.

pub mod logging;

pub mod agent;
pub mod config;
pub mod content;
pub mod probe;
pub mod results;
pub mod syschar;
pub mod types;
pub mod xccdf;

#[cfg(test)]
pub(crate) mod test_support;

// Convenience re-exports
pub use agent::{AgentSession, SessionError};
pub use config::AgentConfig;
pub use xccdf::{register_engine_oval, PolicyResult};

pub mod prelude {
    pub use crate::agent::{
        AgentSession, DefinitionReport, ReportSink, ResolutionSummary, SessionError,
        SystemEvaluation, VerdictCounter,
    };
    pub use crate::config::{AgentConfig, ConfigError};
    pub use crate::content::{
        ContentError, Definition, DefinitionModel, ObjectRef, VariableDeclaration, VariableModel,
    };
    pub use crate::probe::{CollectionError, ObjectCollector, ProbeError};
    pub use crate::results::{CriteriaEvaluator, ResultsModel};
    pub use crate::syschar::{
        CollectedObject, CollectionFlag, Item, SystemCharacteristics, SystemInfo, SystemInterface,
    };
    pub use crate::types::{Datatype, Message, MessageLevel, ResultVerdict};
    pub use crate::xccdf::{
        register_engine_oval, CheckEngine, EngineRegistry, PolicyResult, ResultCodeBridge,
        TestResult, ValueBinding,
    };
}
