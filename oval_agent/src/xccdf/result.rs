//! # Policy Results
//!
//! XCCDF result vocabulary, the mapping from OVAL verdicts into it, and the
//! test-result record the policy side fills in for one audited host.

use crate::agent::VerdictCounter;
use crate::types::ResultVerdict;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Rule result as understood by the policy framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyResult {
    Pass = 1,
    Fail,
    Error,
    Unknown,
    NotApplicable,
    NotChecked,
    NotSelected,
    Informational,
    Fixed,
}

impl PolicyResult {
    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pass" => Some(PolicyResult::Pass),
            "fail" => Some(PolicyResult::Fail),
            "error" => Some(PolicyResult::Error),
            "unknown" => Some(PolicyResult::Unknown),
            "notapplicable" => Some(PolicyResult::NotApplicable),
            "notchecked" => Some(PolicyResult::NotChecked),
            "notselected" => Some(PolicyResult::NotSelected),
            "informational" => Some(PolicyResult::Informational),
            "fixed" => Some(PolicyResult::Fixed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PolicyResult::Pass => "pass",
            PolicyResult::Fail => "fail",
            PolicyResult::Error => "error",
            PolicyResult::Unknown => "unknown",
            PolicyResult::NotApplicable => "notapplicable",
            PolicyResult::NotChecked => "notchecked",
            PolicyResult::NotSelected => "notselected",
            PolicyResult::Informational => "informational",
            PolicyResult::Fixed => "fixed",
        }
    }
}

impl fmt::Display for PolicyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResultVerdict> for PolicyResult {
    fn from(verdict: ResultVerdict) -> Self {
        match verdict {
            ResultVerdict::True => PolicyResult::Pass,
            ResultVerdict::False => PolicyResult::Fail,
            ResultVerdict::Unknown => PolicyResult::Unknown,
            ResultVerdict::Error => PolicyResult::Error,
            ResultVerdict::NotEvaluated => PolicyResult::NotChecked,
            ResultVerdict::NotApplicable => PolicyResult::NotApplicable,
        }
    }
}

/// Translates raw engine result codes into policy results
pub struct ResultCodeBridge;

impl ResultCodeBridge {
    /// Unrecognized codes map to `Unknown`
    pub fn from_code(code: u32) -> PolicyResult {
        ResultVerdict::from_code(code)
            .map(PolicyResult::from)
            .unwrap_or(PolicyResult::Unknown)
    }

    /// Whole-system result: pass only when no definition was false or unknown
    pub fn aggregate(counter: &VerdictCounter) -> PolicyResult {
        if counter.failing() == 0 {
            PolicyResult::Pass
        } else {
            PolicyResult::Fail
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactType {
    String,
    Number,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFact {
    pub name: String,
    pub value: String,
    pub fact_type: FactType,
}

impl TargetFact {
    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            fact_type: FactType::String,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    pub rule_id: String,
    pub result: PolicyResult,
}

/// Result record for one audited host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub targets: Vec<String>,
    pub target_addresses: Vec<String>,
    pub target_facts: Vec<TargetFact>,
    pub rule_results: Vec<RuleResult>,
}

impl TestResult {
    pub fn new() -> Self {
        Self {
            id: format!("xccdf_test-result_{}", Uuid::new_v4()),
            start_time: Utc::now(),
            end_time: None,
            targets: Vec::new(),
            target_addresses: Vec::new(),
            target_facts: Vec::new(),
            rule_results: Vec::new(),
        }
    }

    pub fn add_target(&mut self, target: impl Into<String>) {
        self.targets.push(target.into());
    }

    pub fn add_target_address(&mut self, address: impl Into<String>) {
        self.target_addresses.push(address.into());
    }

    pub fn add_target_fact(&mut self, fact: TargetFact) {
        self.target_facts.push(fact);
    }

    pub fn add_rule_result(&mut self, rule_id: impl Into<String>, result: PolicyResult) {
        self.rule_results.push(RuleResult {
            rule_id: rule_id.into(),
            result,
        });
    }

    pub fn finish(&mut self) {
        self.end_time = Some(Utc::now());
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for TestResult {
    fn default() -> Self {
        Self::new()
    }
}
