use crate::types::Datatype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a variable obtains its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    /// Supplied from outside the content (XCCDF value bindings)
    External,
    /// Fixed in the content
    Constant,
    /// Computed by the evaluator from other values
    Local,
}

/// Variable declaration from an OVAL definitions document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub id: String,
    pub datatype: Datatype,
    pub kind: VariableKind,

    #[serde(default)]
    pub comment: String,

    /// Constant values, or the initial binding of an external variable
    #[serde(default)]
    pub values: Vec<String>,
}

impl VariableDeclaration {
    pub fn external(id: impl Into<String>, datatype: Datatype) -> Self {
        Self {
            id: id.into(),
            datatype,
            kind: VariableKind::External,
            comment: String::new(),
            values: Vec::new(),
        }
    }

    pub fn constant(id: impl Into<String>, datatype: Datatype, values: Vec<String>) -> Self {
        Self {
            id: id.into(),
            datatype,
            kind: VariableKind::Constant,
            comment: String::new(),
            values,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn is_external(&self) -> bool {
        self.kind == VariableKind::External
    }
}

impl fmt::Display for VariableDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} {}", self.kind, self.id, self.datatype)
    }
}
