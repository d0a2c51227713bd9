//! # Content Errors

use crate::types::Datatype;

/// Errors raised by the definition model and variable model
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Variable '{name}' is not declared in the definition model")]
    UnknownVariable { name: String },

    #[error("Variable '{name}' is declared as {declared} but was supplied as {supplied}")]
    DatatypeMismatch {
        name: String,
        declared: Datatype,
        supplied: Datatype,
    },

    #[error("Value '{value}' is not a valid {datatype} for variable '{name}'")]
    InvalidValue {
        name: String,
        datatype: Datatype,
        value: String,
    },

    #[error("Variable '{name}' appears more than once")]
    DuplicateVariable { name: String },

    #[error("Definition '{id}' appears more than once")]
    DuplicateDefinition { id: String },

    #[error("Definition model is locked; variable bindings cannot change")]
    Locked,

    #[error("Invalid content document: {0}")]
    Document(#[from] serde_json::Error),
}

impl ContentError {
    pub fn unknown_variable(name: &str) -> Self {
        Self::UnknownVariable {
            name: name.to_string(),
        }
    }

    pub fn invalid_value(name: &str, datatype: Datatype, value: &str) -> Self {
        Self::InvalidValue {
            name: name.to_string(),
            datatype,
            value: value.to_string(),
        }
    }

    pub fn duplicate_variable(name: &str) -> Self {
        Self::DuplicateVariable {
            name: name.to_string(),
        }
    }

    /// Whether the failure stems from the supplied data rather than the model state
    pub fn is_content_failure(&self) -> bool {
        !matches!(self, ContentError::Locked)
    }
}
