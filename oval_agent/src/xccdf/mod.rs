//! # XCCDF Policy Bridge
//!
//! Connects agent sessions to a policy engine: result code translation,
//! value bindings, check engine registration and host facts export.

pub mod binding;
pub mod engine;
pub mod error;
pub mod export;
pub mod result;

pub use binding::ValueBinding;
pub use engine::{register_engine_oval, CheckEngine, EngineRegistry};
pub use error::BridgeError;
pub use result::{
    FactType, PolicyResult, ResultCodeBridge, RuleResult, TargetFact, TestResult,
};
