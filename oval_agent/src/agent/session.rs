//! # Agent Session
//!
//! One evaluation run against one target system. The session borrows the
//! definition model and owns the probe session together with the
//! system-characteristics and results models it fills in.
//!
//! ## Lifecycle
//! 1. [`AgentSession::new`] queries host facts; failure aborts construction
//! 2. [`AgentSession::evaluate_definition`] probes, then evaluates one definition
//! 3. [`AgentSession::reset`] invalidates probed items and cached verdicts
//! 4. [`AgentSession::destroy`] (or drop) releases everything

use super::error::SessionError;
use super::report::{DefinitionReport, ReportSink};
use crate::config::AgentConfig;
use crate::content::DefinitionModel;
use crate::logging::codes;
use crate::probe::{ObjectCollector, ProbeSession};
use crate::results::{CriteriaEvaluator, ResultsModel};
use crate::syschar::SystemCharacteristics;
use crate::types::ResultVerdict;
use crate::{log_debug, log_error, log_info, log_warning};
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of [`AgentSession::evaluate_system`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEvaluation {
    /// Definitions evaluated before the run ended
    pub evaluated: usize,
    /// Whether the report sink stopped the run early
    pub stopped: bool,
}

// Field order is release order.
pub struct AgentSession<'m> {
    probe: ProbeSession,
    syschar: SystemCharacteristics,
    results: ResultsModel,
    name: String,
    definitions: &'m DefinitionModel,
    evaluator: Arc<dyn CriteriaEvaluator>,
    config: AgentConfig,
    instance_id: Uuid,
}

impl<'m> AgentSession<'m> {
    /// Create a session with the default configuration
    pub fn new(
        definitions: &'m DefinitionModel,
        name: impl Into<String>,
        collector: Arc<dyn ObjectCollector>,
        evaluator: Arc<dyn CriteriaEvaluator>,
    ) -> Result<Self, SessionError> {
        Self::with_config(definitions, name, collector, evaluator, AgentConfig::default())
    }

    pub fn with_config(
        definitions: &'m DefinitionModel,
        name: impl Into<String>,
        collector: Arc<dyn ObjectCollector>,
        evaluator: Arc<dyn CriteriaEvaluator>,
        config: AgentConfig,
    ) -> Result<Self, SessionError> {
        let name = name.into();
        let instance_id = Uuid::new_v4();

        let probe = ProbeSession::new(collector).with_cache(config.cache_probed_items);
        let mut syschar = SystemCharacteristics::new();

        let sysinfo = probe.query_sysinfo().map_err(|source| {
            log_error!(codes::SYSINFO_QUERY_FAILED, "Failed to create agent session",
                "session" => &name,
                "instance" => instance_id
            );
            SessionError::ProbeInit {
                name: name.clone(),
                source,
            }
        })?;
        syschar.set_sysinfo(sysinfo);

        let results = ResultsModel::new(definitions, &[&syschar]);

        log_info!("Agent session created",
            "session" => &name,
            "instance" => instance_id,
            "collector" => probe.collector_id(),
            "definitions" => definitions.definitions().len()
        );

        Ok(Self {
            probe,
            syschar,
            results,
            name,
            definitions,
            evaluator,
            config,
            instance_id,
        })
    }

    /// Probe and evaluate one definition.
    ///
    /// A probe failure yields `Unknown`. Probed items and verdicts are reused
    /// until the next [`reset`](Self::reset).
    pub fn evaluate_definition(&mut self, definition_id: &str) -> ResultVerdict {
        if let Err(e) = self
            .probe
            .query_definition(self.definitions, definition_id, &mut self.syschar)
        {
            log_warning!(code = codes::DEFINITION_PROBE_FAILED, "Probe failed, verdict is unknown",
                "session" => &self.name,
                "definition" => definition_id,
                "error" => e
            );
            return ResultVerdict::Unknown;
        }

        let Some(system) = self.results.systems_mut().first_mut() else {
            log_error!(codes::NO_RESULT_SYSTEM, "Results model has no result system",
                "session" => &self.name
            );
            return ResultVerdict::Unknown;
        };

        system.evaluate_definition(
            definition_id,
            self.definitions,
            &self.syschar,
            self.evaluator.as_ref(),
        )
    }

    /// Evaluate every definition in model order, reporting each to `sink`
    pub fn evaluate_system(&mut self, mut sink: Option<&mut dyn ReportSink>) -> SystemEvaluation {
        let definitions = self.definitions;
        let mut evaluation = SystemEvaluation::default();

        for definition in definitions.definitions() {
            let verdict = self.evaluate_definition(&definition.id);
            evaluation.evaluated += 1;

            if self.config.debug_logging {
                log_debug!("System evaluation progress",
                    "session" => &self.name,
                    "definition" => &definition.id,
                    "verdict" => verdict
                );
            }

            if let Some(sink) = sink.as_deref_mut() {
                let report = DefinitionReport::new(definition, verdict);
                if sink.report(&report).is_break() {
                    evaluation.stopped = true;
                    break;
                }
            }
        }

        log_info!("System evaluation finished",
            "session" => &self.name,
            "evaluated" => evaluation.evaluated,
            "stopped" => evaluation.stopped
        );
        evaluation
    }

    /// Discard probed items and verdicts.
    ///
    /// Host facts survive. If the probe reset fails, the collected objects and
    /// results model in place before the call are restored.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        let objects = self.syschar.drain_objects();
        let fresh = ResultsModel::new(self.definitions, &[&self.syschar]);
        let previous = std::mem::replace(&mut self.results, fresh);

        if let Err(e) = self.probe.reset() {
            self.syschar.restore_objects(objects);
            self.results = previous;
            return Err(SessionError::Reset(e));
        }

        log_info!("Agent session reset",
            "session" => &self.name,
            "instance" => self.instance_id,
            "dropped_objects" => objects.len()
        );
        Ok(())
    }

    /// Release the session: probe session, system characteristics, results model, name
    pub fn destroy(self) {
        drop(self);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definitions(&self) -> &'m DefinitionModel {
        self.definitions
    }

    pub fn system_characteristics(&self) -> &SystemCharacteristics {
        &self.syschar
    }

    pub fn results_model(&self) -> &ResultsModel {
        &self.results
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }
}

impl Drop for AgentSession<'_> {
    fn drop(&mut self) {
        log_debug!("Agent session released",
            "session" => &self.name,
            "instance" => self.instance_id
        );
    }
}

impl std::fmt::Debug for AgentSession<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentSession")
            .field("name", &self.name)
            .field("instance_id", &self.instance_id)
            .field("probe", &self.probe)
            .field("objects", &self.syschar.object_count())
            .finish()
    }
}
