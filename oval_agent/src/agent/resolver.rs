//! # Variable Binding Resolver
//!
//! Reconciles value bindings supplied by the policy engine with the external
//! variables already bound in the definition model. A binding that disagrees
//! with a bound value forces the session to be reset and the bindings cleared
//! before the new values are committed.

use super::error::SessionError;
use super::session::AgentSession;
use crate::content::{DefinitionModel, VariableDeclaration, VariableModel};
use crate::logging::codes;
use crate::xccdf::ValueBinding;
use crate::{log_debug, log_error, log_info, log_warning};

/// What one resolution pass did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionSummary {
    /// A binding disagreed with an already bound value
    pub conflict: bool,
    /// The session was reset because of the conflict
    pub reset: bool,
    /// Bindings committed to the definition model
    pub bound: usize,
    /// Bindings left out of the commit
    pub skipped: usize,
}

const ENTRY_COMMENT: &str = "Unknown";

impl<'m> AgentSession<'m> {
    pub fn resolve_variables(
        &mut self,
        bindings: &[ValueBinding],
    ) -> Result<ResolutionSummary, SessionError> {
        let mut summary = ResolutionSummary::default();
        if bindings.is_empty() {
            return Ok(summary);
        }

        let definitions = self.definitions();

        if has_conflict(definitions, bindings) {
            summary.conflict = true;
            // bindings stay intact when the reset fails, so a retry still sees the conflict
            self.reset()?;
            definitions.clear_external_variables();
            summary.reset = true;
        }

        let (variables, skipped) = build_variable_model(definitions, bindings);
        summary.skipped = skipped;

        if !variables.is_empty() {
            summary.bound = definitions.bind_variable_model(variables).map_err(|e| {
                log_error!(codes::BIND_FAILED, "Failed to bind variable model",
                    "session" => self.name(),
                    "error" => &e
                );
                SessionError::Bind(e)
            })?;
        }

        log_info!("Variable bindings resolved",
            "session" => self.name(),
            "conflict" => summary.conflict,
            "bound" => summary.bound,
            "skipped" => summary.skipped
        );
        Ok(summary)
    }
}

fn external_variable<'a>(
    definitions: &'a DefinitionModel,
    name: &str,
) -> Option<&'a VariableDeclaration> {
    let variable = definitions.variable(name).filter(|v| v.is_external());
    if variable.is_none() {
        log_warning!(code = codes::VARIABLE_NOT_FOUND, "External variable not found",
            "variable" => name
        );
    }
    variable
}

/// Whether any binding disagrees with the first value already bound to its variable
fn has_conflict(definitions: &DefinitionModel, bindings: &[ValueBinding]) -> bool {
    let mut conflict = false;

    for binding in bindings {
        if external_variable(definitions, &binding.name).is_none() {
            continue;
        }

        let Some(bound) = definitions
            .variable_values(&binding.name)
            .and_then(|values| values.into_iter().next())
        else {
            continue;
        };

        let supplied = binding.effective_value();
        if bound == supplied {
            log_debug!("Binding matches bound value",
                "variable" => &binding.name,
                "value" => supplied
            );
        } else {
            log_warning!(code = codes::VARIABLE_CONFLICT, "Binding conflicts with bound value",
                "variable" => &binding.name,
                "bound" => &bound,
                "supplied" => supplied
            );
            conflict = true;
        }
    }

    conflict
}

/// Collect the bindings that can be committed; returns the model and the skip count
fn build_variable_model(
    definitions: &DefinitionModel,
    bindings: &[ValueBinding],
) -> (VariableModel, usize) {
    let mut variables = VariableModel::new();
    let mut skipped = 0;

    for binding in bindings {
        let Some(declared) = external_variable(definitions, &binding.name) else {
            skipped += 1;
            continue;
        };

        if definitions.has_bound_value(&binding.name) {
            log_debug!("Variable already bound, binding skipped",
                "variable" => &binding.name
            );
            skipped += 1;
            continue;
        }

        let value = binding.effective_value();
        if !declared.datatype.accepts(value) {
            log_warning!(code = codes::VARIABLE_TYPE_MISMATCH, "Binding value does not match declared datatype",
                "variable" => &binding.name,
                "datatype" => declared.datatype,
                "value" => value
            );
            skipped += 1;
            continue;
        }

        if let Err(e) = variables.add(&binding.name, ENTRY_COMMENT, declared.datatype, value) {
            log_error!(codes::VARIABLE_DUPLICATE, "Duplicate binding, first value kept",
                "variable" => &binding.name,
                "error" => e
            );
            skipped += 1;
        }
    }

    (variables, skipped)
}
