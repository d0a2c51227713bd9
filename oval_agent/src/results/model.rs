//! # Results Model
//!
//! One [`ResultSystem`] per system-characteristics model. Each result system
//! caches the verdict of every definition it has evaluated; the cache lives
//! until the owning results model is replaced.

use super::evaluator::CriteriaEvaluator;
use crate::content::DefinitionModel;
use crate::logging::codes;
use crate::syschar::SystemCharacteristics;
use crate::types::ResultVerdict;
use crate::{log_debug, log_warning};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionResult {
    pub definition_id: String,
    pub verdict: ResultVerdict,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultSystem {
    primary_host_name: Option<String>,
    results: HashMap<String, DefinitionResult>,
}

impl ResultSystem {
    fn new(syschar: &SystemCharacteristics) -> Self {
        Self {
            primary_host_name: syschar.sysinfo().map(|s| s.primary_host_name.clone()),
            results: HashMap::new(),
        }
    }

    pub fn primary_host_name(&self) -> Option<&str> {
        self.primary_host_name.as_deref()
    }

    /// Evaluate `definition_id`, or return its cached verdict.
    ///
    /// An id missing from the definition model yields `NotEvaluated`.
    pub fn evaluate_definition(
        &mut self,
        definition_id: &str,
        definitions: &DefinitionModel,
        syschar: &SystemCharacteristics,
        evaluator: &dyn CriteriaEvaluator,
    ) -> ResultVerdict {
        if let Some(cached) = self.results.get(definition_id) {
            return cached.verdict;
        }

        let Some(definition) = definitions.definition(definition_id) else {
            log_warning!(code = codes::DEFINITION_NOT_FOUND, "Definition not found",
                "definition" => definition_id
            );
            return ResultVerdict::NotEvaluated;
        };

        let verdict = evaluator.evaluate(definition, syschar, definitions);
        log_debug!("Definition evaluated",
            "definition" => definition_id,
            "verdict" => verdict
        );

        self.results.insert(
            definition_id.to_string(),
            DefinitionResult {
                definition_id: definition_id.to_string(),
                verdict,
                evaluated_at: Utc::now(),
            },
        );
        verdict
    }

    pub fn result(&self, definition_id: &str) -> Option<&DefinitionResult> {
        self.results.get(definition_id)
    }

    pub fn evaluated_count(&self) -> usize {
        self.results.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultsModel {
    systems: Vec<ResultSystem>,
    created_at: DateTime<Utc>,
}

impl ResultsModel {
    pub fn new(definitions: &DefinitionModel, syschars: &[&SystemCharacteristics]) -> Self {
        log_debug!("Results model created",
            "definitions" => definitions.definitions().len(),
            "systems" => syschars.len()
        );
        Self {
            systems: syschars.iter().map(|s| ResultSystem::new(s)).collect(),
            created_at: Utc::now(),
        }
    }

    pub fn systems(&self) -> &[ResultSystem] {
        &self.systems
    }

    pub fn systems_mut(&mut self) -> &mut [ResultSystem] {
        &mut self.systems
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
