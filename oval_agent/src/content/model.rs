//! # Definition Model
//!
//! In-memory definitions document: definitions in document order, variable
//! declarations, and the external variable bindings supplied at run time.
//! Bindings live behind an `RwLock` so several sessions can borrow one model,
//! though they all see the same bindings.

use super::definition::Definition;
use super::error::ContentError;
use super::variable::{VariableDeclaration, VariableKind};
use super::variable_model::VariableModel;
use crate::logging::codes;
use crate::{log_debug, log_error};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Serialized form accepted by [`DefinitionModel::from_json`]
#[derive(Debug, Default, Deserialize)]
pub struct ContentDocument {
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub variables: Vec<VariableDeclaration>,
}

/// Definitions, variable declarations and external bindings.
///
/// Sessions may share one model, but the bindings are shared too. A conflict
/// resolved in one session clears bindings the other sessions rely on, and
/// their item caches are not invalidated; re-resolve or reset them afterwards.
#[derive(Debug)]
pub struct DefinitionModel {
    definitions: Vec<Definition>,
    definition_index: HashMap<String, usize>,
    variables: Vec<VariableDeclaration>,
    variable_index: HashMap<String, usize>,
    external_values: RwLock<HashMap<String, Vec<String>>>,
    locked: AtomicBool,
}

impl DefinitionModel {
    pub fn new(
        definitions: Vec<Definition>,
        variables: Vec<VariableDeclaration>,
    ) -> Result<Self, ContentError> {
        let mut definition_index = HashMap::with_capacity(definitions.len());
        for (i, def) in definitions.iter().enumerate() {
            if definition_index.insert(def.id.clone(), i).is_some() {
                return Err(ContentError::DuplicateDefinition { id: def.id.clone() });
            }
        }

        let mut variable_index = HashMap::with_capacity(variables.len());
        let mut external_values = HashMap::new();
        for (i, var) in variables.iter().enumerate() {
            if variable_index.insert(var.id.clone(), i).is_some() {
                return Err(ContentError::duplicate_variable(&var.id));
            }
            if var.is_external() && !var.values.is_empty() {
                external_values.insert(var.id.clone(), var.values.clone());
            }
        }

        log_debug!("Definition model created",
            "definitions" => definitions.len(),
            "variables" => variables.len()
        );

        Ok(Self {
            definitions,
            definition_index,
            variables,
            variable_index,
            external_values: RwLock::new(external_values),
            locked: AtomicBool::new(false),
        })
    }

    pub fn from_document(document: ContentDocument) -> Result<Self, ContentError> {
        Self::new(document.definitions, document.variables)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let document: ContentDocument = serde_json::from_str(json)?;
        Self::from_document(document)
    }

    /// Definitions in document order
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn definition(&self, id: &str) -> Option<&Definition> {
        self.definition_index.get(id).map(|&i| &self.definitions[i])
    }

    pub fn variables(&self) -> &[VariableDeclaration] {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&VariableDeclaration> {
        self.variable_index.get(name).map(|&i| &self.variables[i])
    }

    /// Effective values of a variable.
    ///
    /// External variables report their current binding; constant and local
    /// variables report the values declared in the content. `None` when the
    /// variable is undeclared or an external variable is unbound.
    pub fn variable_values(&self, name: &str) -> Option<Vec<String>> {
        let var = self.variable(name)?;
        match var.kind {
            VariableKind::External => self.read_bindings().get(name).cloned(),
            VariableKind::Constant | VariableKind::Local => {
                if var.values.is_empty() {
                    None
                } else {
                    Some(var.values.clone())
                }
            }
        }
    }

    pub fn has_bound_value(&self, name: &str) -> bool {
        self.variable_values(name)
            .map_or(false, |values| !values.is_empty())
    }

    /// Drop every external variable binding
    pub fn clear_external_variables(&self) {
        let mut bindings = self.write_bindings();
        let cleared = bindings.len();
        bindings.clear();
        log_debug!("External variable bindings cleared", "count" => cleared);
    }

    /// Bind every entry of `model` to its external variable.
    ///
    /// All entries are validated before any binding changes; on error the
    /// model keeps its previous bindings. Returns the number of bindings applied.
    pub fn bind_variable_model(&self, model: VariableModel) -> Result<usize, ContentError> {
        if self.is_locked() {
            log_error!(codes::BIND_FAILED, "Bind attempted on a locked definition model");
            return Err(ContentError::Locked);
        }

        for entry in model.iter() {
            let declared = self
                .variable(&entry.name)
                .filter(|v| v.is_external())
                .ok_or_else(|| ContentError::unknown_variable(&entry.name))?;

            if declared.datatype != entry.datatype {
                return Err(ContentError::DatatypeMismatch {
                    name: entry.name.clone(),
                    declared: declared.datatype,
                    supplied: entry.datatype,
                });
            }

            if let Some(bad) = entry.values.iter().find(|v| !declared.datatype.accepts(v)) {
                return Err(ContentError::invalid_value(&entry.name, declared.datatype, bad));
            }
        }

        let mut bindings = self.write_bindings();
        let mut applied = 0;
        for entry in model.iter() {
            bindings.insert(entry.name.clone(), entry.values.clone());
            applied += 1;
        }

        log_debug!("Variable model bound", "count" => applied);
        Ok(applied)
    }

    /// Freeze the current bindings
    pub fn lock(&self) {
        self.locked.store(true, Ordering::SeqCst);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }

    fn read_bindings(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<String>>> {
        self.external_values
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_bindings(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<String>>> {
        self.external_values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
