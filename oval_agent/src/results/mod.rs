//! # Results Module
//!
//! The boolean evaluator seam and the results model that caches verdicts per
//! target system.
//!
//! ## Core Types
//! - [`CriteriaEvaluator`] - Interprets a definition's criteria tree
//! - [`ResultsModel`] - One [`ResultSystem`] per system-characteristics model
//! - [`DefinitionResult`] - Cached verdict of one definition

pub mod evaluator;
pub mod model;

pub use evaluator::CriteriaEvaluator;
pub use model::{DefinitionResult, ResultSystem, ResultsModel};
