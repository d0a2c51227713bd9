use super::error::ContentError;
use crate::types::Datatype;
use serde::Serialize;
use std::collections::HashMap;

/// One externally supplied variable value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableEntry {
    pub name: String,
    pub comment: String,
    pub datatype: Datatype,
    pub values: Vec<String>,
}

/// Collection of external variable values built up before binding
///
/// Names are unique; the first entry added for a name wins.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariableModel {
    entries: Vec<VariableEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl VariableModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: &str,
        comment: &str,
        datatype: Datatype,
        value: &str,
    ) -> Result<(), ContentError> {
        if self.index.contains_key(name) {
            return Err(ContentError::duplicate_variable(name));
        }

        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push(VariableEntry {
            name: name.to_string(),
            comment: comment.to_string(),
            datatype,
            values: vec![value.to_string()],
        });
        Ok(())
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn datatype(&self, name: &str) -> Option<Datatype> {
        self.entry(name).map(|e| e.datatype)
    }

    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.entry(name).map(|e| e.values.as_slice())
    }

    pub fn entry(&self, name: &str) -> Option<&VariableEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariableEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
