use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operation carried by OVAL entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Equals,
    NotEqual,
    CaseInsensitiveEquals,
    CaseInsensitiveNotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    BitwiseAnd,
    BitwiseOr,
    PatternMatch,
    SubsetOf,
    SupersetOf,
}

impl Operation {
    /// Parse operation text as written in OVAL content
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "equals" => Some(Operation::Equals),
            "not equal" => Some(Operation::NotEqual),
            "case insensitive equals" => Some(Operation::CaseInsensitiveEquals),
            "case insensitive not equal" => Some(Operation::CaseInsensitiveNotEqual),
            "greater than" => Some(Operation::GreaterThan),
            "less than" => Some(Operation::LessThan),
            "greater than or equal" => Some(Operation::GreaterThanOrEqual),
            "less than or equal" => Some(Operation::LessThanOrEqual),
            "bitwise and" => Some(Operation::BitwiseAnd),
            "bitwise or" => Some(Operation::BitwiseOr),
            "pattern match" => Some(Operation::PatternMatch),
            "subset of" => Some(Operation::SubsetOf),
            "superset of" => Some(Operation::SupersetOf),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Equals => "equals",
            Operation::NotEqual => "not equal",
            Operation::CaseInsensitiveEquals => "case insensitive equals",
            Operation::CaseInsensitiveNotEqual => "case insensitive not equal",
            Operation::GreaterThan => "greater than",
            Operation::LessThan => "less than",
            Operation::GreaterThanOrEqual => "greater than or equal",
            Operation::LessThanOrEqual => "less than or equal",
            Operation::BitwiseAnd => "bitwise and",
            Operation::BitwiseOr => "bitwise or",
            Operation::PatternMatch => "pattern match",
            Operation::SubsetOf => "subset of",
            Operation::SupersetOf => "superset of",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
