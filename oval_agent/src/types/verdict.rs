use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating one OVAL definition
///
/// Discriminants are the OVAL engine result codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultVerdict {
    True = 1,
    False = 2,
    Unknown = 4,
    Error = 8,
    NotEvaluated = 16,
    NotApplicable = 32,
}

impl ResultVerdict {
    /// Every verdict, in code order
    pub const ALL: [ResultVerdict; 6] = [
        ResultVerdict::True,
        ResultVerdict::False,
        ResultVerdict::Unknown,
        ResultVerdict::Error,
        ResultVerdict::NotEvaluated,
        ResultVerdict::NotApplicable,
    ];

    /// Numeric engine code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Decode a numeric engine code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(ResultVerdict::True),
            2 => Some(ResultVerdict::False),
            4 => Some(ResultVerdict::Unknown),
            8 => Some(ResultVerdict::Error),
            16 => Some(ResultVerdict::NotEvaluated),
            32 => Some(ResultVerdict::NotApplicable),
            _ => None,
        }
    }

    /// Parse result text as written in OVAL results documents
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "true" => Some(ResultVerdict::True),
            "false" => Some(ResultVerdict::False),
            "unknown" => Some(ResultVerdict::Unknown),
            "error" => Some(ResultVerdict::Error),
            "not evaluated" => Some(ResultVerdict::NotEvaluated),
            "not applicable" => Some(ResultVerdict::NotApplicable),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResultVerdict::True => "true",
            ResultVerdict::False => "false",
            ResultVerdict::Unknown => "unknown",
            ResultVerdict::Error => "error",
            ResultVerdict::NotEvaluated => "not evaluated",
            ResultVerdict::NotApplicable => "not applicable",
        }
    }

    /// Whether this verdict counts against a whole-system evaluation
    pub fn is_failing(self) -> bool {
        matches!(self, ResultVerdict::False | ResultVerdict::Unknown)
    }
}

impl fmt::Display for ResultVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
