//! Diagnostic codes attached to warning and error records

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Diagnostic code wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Whether this code marks an error (as opposed to a warning)
    pub fn is_error(&self) -> bool {
        self.0.starts_with("E-")
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// PROBE
// ============================================================================

/// Host facts could not be queried while opening a session
pub const SYSINFO_QUERY_FAILED: Code = Code::new("E-PROBE-001");
/// Collecting the objects of one definition failed
pub const DEFINITION_PROBE_FAILED: Code = Code::new("W-PROBE-002");
/// The probe layer refused to drop its item cache
pub const PROBE_RESET_FAILED: Code = Code::new("E-PROBE-003");

// ============================================================================
// VARIABLES
// ============================================================================

/// Binding names a variable the definition model does not declare
pub const VARIABLE_NOT_FOUND: Code = Code::new("W-VAR-001");
/// Binding value differs from the value already bound
pub const VARIABLE_CONFLICT: Code = Code::new("W-VAR-002");
/// Binding value cannot be represented in the declared datatype
pub const VARIABLE_TYPE_MISMATCH: Code = Code::new("W-VAR-003");
/// Same external variable bound twice within one batch
pub const VARIABLE_DUPLICATE: Code = Code::new("E-VAR-004");
/// The definition model rejected the variable model
pub const BIND_FAILED: Code = Code::new("E-VAR-005");

// ============================================================================
// RESULTS / BRIDGE
// ============================================================================

/// Evaluation asked for a definition the model does not contain
pub const DEFINITION_NOT_FOUND: Code = Code::new("W-RES-001");
/// Results model has no result system to evaluate against
pub const NO_RESULT_SYSTEM: Code = Code::new("E-RES-002");
/// Session has no host facts to export
pub const SYSINFO_MISSING: Code = Code::new("W-XCCDF-001");
/// Engine registration rejected
pub const ENGINE_REGISTRATION_FAILED: Code = Code::new("E-XCCDF-002");
