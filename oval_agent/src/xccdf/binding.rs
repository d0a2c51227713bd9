use serde::{Deserialize, Serialize};

/// Value supplied by the policy engine for one external check variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueBinding {
    /// Name of the external variable the value is bound to
    pub name: String,
    pub value: String,
    /// Value set by the profile; takes precedence over `value`
    #[serde(default)]
    pub set_value: Option<String>,
}

impl ValueBinding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            set_value: None,
        }
    }

    pub fn with_set_value(mut self, set_value: impl Into<String>) -> Self {
        self.set_value = Some(set_value.into());
        self
    }

    pub fn effective_value(&self) -> &str {
        self.set_value.as_deref().unwrap_or(&self.value)
    }
}
